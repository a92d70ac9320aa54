use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{builtin_products, Catalog, Product};
use crate::consts::{DEFAULT_CURRENCY, PLACEHOLDER_CUSTOMER, PLACEHOLDER_OUTFIT, PLACEHOLDER_RESULT};
use crate::error::Result;
use crate::image_ref::ImageRef;

/// Store-level settings: currency label, placeholder images and the
/// product catalog offered for tagging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub placeholders: PlaceholderConfig,
    #[serde(default = "builtin_products")]
    pub catalog: Vec<Product>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            placeholders: PlaceholderConfig::default(),
            catalog: builtin_products(),
        }
    }
}

impl StoreConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(
            "Loaded store config from {} ({} products)",
            path.display(),
            config.catalog.len()
        );
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Validated catalog built from the configured products.
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::new(self.catalog.clone())
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Images used where no real upload or processing happens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    pub customer: ImageRef,
    pub outfit: ImageRef,
    pub result: ImageRef,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            customer: ImageRef::new(PLACEHOLDER_CUSTOMER),
            outfit: ImageRef::new(PLACEHOLDER_OUTFIT),
            result: ImageRef::new(PLACEHOLDER_RESULT),
        }
    }
}
