use std::fs;
use std::path::Path;

use log::info;
use nutriplan_model::food::FoodItem;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog: {0}")]
    Format(#[from] ron::error::SpannedError),
}

/// Read-only food catalog capability. Injected into the composer so the
/// item set can be swapped or versioned independently of the
/// calculation logic.
#[mockall::automock]
pub trait Catalog: Send + Sync {
    /// Items in declaration order; the composer relies on this order
    /// for reproducible tie-breaking.
    fn items(&self) -> Vec<FoodItem>;
}

/// Catalog backed by a RON file, loaded once at startup.
pub struct RonCatalog {
    items: Vec<FoodItem>,
}

impl RonCatalog {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_ron(&contents)?;
        info!("Loaded {} food items from catalog", catalog.items.len());
        Ok(catalog)
    }

    pub fn from_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        Ok(Self {
            items: ron::from_str(contents)?,
        })
    }
}

impl Catalog for RonCatalog {
    fn items(&self) -> Vec<FoodItem> {
        self.items.clone()
    }
}
