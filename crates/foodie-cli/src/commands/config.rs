use foodie_config::FoodieConfig;

/// Handle `foodie config`.
pub fn handle(config: &FoodieConfig) -> anyhow::Result<()> {
    println!("{}", render(config)?);
    Ok(())
}

fn render(config: &FoodieConfig) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
