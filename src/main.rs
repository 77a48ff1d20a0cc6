use std::sync::Arc;

use anyhow::Result;

use alkaa::config::Config;
use alkaa::logger::init_file_logging;
use alkaa::service::TaskService;
use alkaa::storage::LocalStorage;
use alkaa::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        Config::generate_default_config("alkaa.toml")?;
        return Ok(());
    }

    let config = Config::load()?;
    config.validate()?;
    init_file_logging(&config.logging)?;

    let storage = Arc::new(LocalStorage::new(false).await?);
    let service = TaskService::new(storage);

    ui::run_app(service, &config).await?;

    Ok(())
}
