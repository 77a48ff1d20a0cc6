use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::PathBuf;

use crate::entities;

/// Local storage manager holding the SQLite connection.
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the database and make sure the schema exists.
    ///
    /// With `in_memory` set the database lives only for the lifetime of the
    /// connection, which is what tests use.
    pub async fn new(in_memory: bool) -> Result<Self> {
        let database_url = if in_memory {
            // Shared-cache in-memory database; a unique name per instance
            // keeps parallel tests isolated. min_connections below anchors
            // it so the data survives pool churn.
            format!(
                "sqlite:file:alkaa_mem_{}?mode=memory&cache=shared",
                uuid::Uuid::new_v4().simple()
            )
        } else {
            let path = Self::database_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
            }
            format!("sqlite://{}?mode=rwc", path.display())
        };

        let mut options = ConnectOptions::new(&database_url);
        options.min_connections(1).max_connections(4);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open database: {database_url}"))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Database file location under the XDG data directory.
    fn database_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("alkaa").join("alkaa.sqlite"))
    }

    /// Create tables from the entity definitions if they do not exist yet.
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut categories = schema.create_table_from_entity(entities::Category);
        self.conn.execute(backend.build(categories.if_not_exists())).await?;

        let mut tasks = schema.create_table_from_entity(entities::Task);
        self.conn.execute(backend.build(tasks.if_not_exists())).await?;

        Ok(())
    }

    /// Check whether any task has been stored yet.
    pub async fn has_data(&self) -> Result<bool> {
        use sea_orm::EntityTrait;
        use sea_orm::PaginatorTrait;
        let count = entities::Task::find().count(&self.conn).await?;
        Ok(count > 0)
    }
}
