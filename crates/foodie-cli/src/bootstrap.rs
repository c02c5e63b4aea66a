use foodie_config::FoodieConfig;

/// Resolve configuration from `.env`, TOML files, and `FOODIE_*` variables.
pub fn load_config() -> anyhow::Result<FoodieConfig> {
    let config = FoodieConfig::load_with_dotenv()?;
    tracing::debug!(
        addr = %config.server.socket_addr(),
        database = %config.database.path,
        "configuration loaded"
    );
    Ok(config)
}
