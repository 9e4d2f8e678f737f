use log::error;
use std::env;

use wprm_parser::{
    fetch_recipe_with_config, parse_recipe, ImportError, OutputFormat, ScraperConfig,
};

#[tokio::main]
async fn main() {
    env_logger::init();

    let Some(source) = env::args().nth(1) else {
        eprintln!("Usage: wprm-parser <URL|FILE>");
        std::process::exit(2);
    };

    if let Err(err) = run(&source).await {
        error!("Failed to import {source}: {err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(source: &str) -> Result<(), ImportError> {
    let config = ScraperConfig::load()?;

    let recipe = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_recipe_with_config(source, &config).await?
    } else {
        let html = tokio::fs::read_to_string(source).await?;
        parse_recipe(&html)?
    };

    match config.output {
        OutputFormat::Text => print!("{}", recipe.to_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recipe)?),
    }

    Ok(())
}
