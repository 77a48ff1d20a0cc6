//! Repository layer for database operations.
//!
//! Repository structs encapsulate database queries following the Data Mapper
//! pattern recommended by SeaORM. Entities stay pure data models; everything
//! that touches the connection lives here or in the service layer.

pub mod category;
pub mod task;

pub use category::CategoryRepository;
pub use task::TaskRepository;
