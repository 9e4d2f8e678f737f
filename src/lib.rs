pub mod config;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod model;
pub mod wprm;

use log::{debug, info};
use scraper::Html;

pub use crate::config::{OutputFormat, ScraperConfig};
pub use crate::error::{ImportError, ListKind, ParseError};
pub use crate::fetch::RequestFetcher;
pub use crate::model::{Ingredient, Recipe};

/// Parse an HTML page and extract its WPRM recipe card
pub fn parse_recipe(html: &str) -> Result<Recipe, ParseError> {
    let document = Html::parse_document(html);
    let recipe = wprm::extract_recipe(dom::document_root(&document))?;
    debug!("{:#?}", recipe);
    Ok(recipe)
}

/// Fetch a recipe page, reading settings from `wprm.toml` and `WPRM__*`
/// environment variables
pub async fn fetch_recipe(url: &str) -> Result<Recipe, ImportError> {
    let config = ScraperConfig::load()?;
    fetch_recipe_with_config(url, &config).await
}

pub async fn fetch_recipe_with_config(
    url: &str,
    config: &ScraperConfig,
) -> Result<Recipe, ImportError> {
    let body = RequestFetcher::new(config)?.fetch(url).await?;
    info!("Fetched {} bytes from {url}", body.len());

    let mut recipe = parse_recipe(&body)?;
    recipe.source_url = Some(url.to_string());
    Ok(recipe)
}
