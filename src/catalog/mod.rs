// Catalog module - the orderable items each service category offers

pub mod static_catalog;

pub use static_catalog::StaticCatalog;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ItemSelection, ServiceCategory};

/// One orderable item as listed by a service category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub item_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub icon: String,
    pub category: ServiceCategory,
}

impl CatalogItem {
    /// Turn this catalog entry into a cart selection with the given quantity
    pub fn to_selection(&self, quantity: u32) -> ItemSelection {
        ItemSelection {
            item_id: self.item_id.clone(),
            name: self.name.clone(),
            unit_price: self.unit_price,
            quantity,
            icon: self.icon.clone(),
        }
    }
}

/// Trait defining the interface for catalog lookups
pub trait CatalogSource {
    /// All items offered by one category, in display order
    fn items_for(&self, category: ServiceCategory) -> Vec<CatalogItem>;

    /// Find a specific item within a category
    fn find(&self, category: ServiceCategory, item_id: &str) -> Option<CatalogItem>;
}
