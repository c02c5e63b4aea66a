use std::path::Path;

use anyhow::Context;
use foodie_api::{AppState, HttpServer};
use foodie_config::FoodieConfig;
use foodie_db::CatalogDb;

use crate::cli::ServeArgs;

/// Handle `foodie serve`.
pub async fn handle(args: &ServeArgs, mut config: FoodieConfig) -> anyhow::Result<()> {
    args.apply(&mut config);
    config.validate()?;

    let db = open_catalog(&config).await?;
    let server = HttpServer::new(config.server, AppState::new(db));
    server.start().await.context("HTTP server failed")
}

/// Open the pre-populated catalog. A missing file is an error rather than an
/// empty database created on the fly.
async fn open_catalog(config: &FoodieConfig) -> anyhow::Result<CatalogDb> {
    let path = config.database.path.as_str();
    if !config.database.is_in_memory() && !Path::new(path).is_file() {
        anyhow::bail!("database file '{path}' does not exist");
    }

    let opened = if config.database.read_only {
        CatalogDb::open_read_only(path).await
    } else {
        CatalogDb::open_local(path).await
    };
    let db = opened.with_context(|| format!("failed to open database '{path}'"))?;

    tracing::info!(path, read_only = config.database.read_only, "database connected");
    Ok(db)
}
