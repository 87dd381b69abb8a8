use std::path::Path;

use anyhow::Context;
use wm_app::presentation::RecipeDetail;
use wm_core::config::AppConfig;
use whattomake::bootstrap::{create_runtime, init_tracing_subscriber, load_config, resolve_settings};

/// `whattomake [CONFIG.toml]`: open the store and print recipes and the latest menu.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => AppConfig::empty(),
    };
    let config = resolve_settings(config, dirs::data_dir())?;
    init_tracing_subscriber(&config.log_dir)?;

    let runtime = create_runtime(config).context("Failed to wire application")?;
    let uc = runtime.usecases();

    let recipes = uc.fetch_recipes().execute().await?;
    println!("{} recipe(s)", recipes.len());
    for recipe in &recipes {
        let detail = RecipeDetail::new(recipe);
        println!("  {} ({})", detail.name(), detail.usage_count_text());
    }

    if let Some(latest) = uc.fetch_menus().execute().await?.first() {
        println!("Latest menu:");
        for (day, selection) in latest.rows() {
            println!("  {day}: {}", selection.recipe_name);
        }
    }

    Ok(())
}
