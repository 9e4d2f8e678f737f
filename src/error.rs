use std::fmt;

use thiserror::Error;

/// Which WPRM list a lookup was searching for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ingredients,
    Instructions,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Ingredients => f.write_str("ingredient"),
            ListKind::Instructions => f.write_str("instructions"),
        }
    }
}

/// Errors raised while locating or reading recipe markup
#[derive(Error, Debug)]
pub enum ParseError {
    /// The page has no list following the WPRM convention
    #[error("{0} list does not exist")]
    ListNotFound(ListKind),

    /// The page has no `div.wprm-recipe-container`
    #[error("recipe card does not exist")]
    RecipeCardNotFound,

    /// An element was found but lacks the structure it should carry
    #[error("malformed recipe markup: {0}")]
    MalformedAssumption(String),

    /// Writing presentation output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while importing a recipe page
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to fetch recipe from URL
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server responded with status {0}")]
    Status(u16),

    /// The page was fetched but holds no usable recipe card
    #[error("Failed to parse recipe: {0}")]
    Parse(#[from] ParseError),

    /// Failed to read a local HTML file
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to serialize the recipe
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
