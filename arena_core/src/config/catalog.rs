//! Market catalog loading

use super::ConfigError;
use crate::market::Product;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for the purchasable products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(rename = "products")]
    pub products: Vec<Product>,
}

/// Load a catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<Vec<Product>, ConfigError> {
    let config: CatalogConfig = super::load_toml(path)?;
    Ok(config.products)
}

/// Load a catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<Vec<Product>, ConfigError> {
    let config: CatalogConfig = super::parse_toml(content)?;
    Ok(config.products)
}

/// Get the default 24-product catalog
pub fn default_catalog() -> Vec<Product> {
    let toml = include_str!("../../config/catalog.toml");
    parse_catalog(toml).unwrap_or_default()
}
