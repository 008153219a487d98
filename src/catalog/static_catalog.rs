use rust_decimal::Decimal;
use tracing::debug;

use super::{CatalogItem, CatalogSource};
use crate::models::ServiceCategory;

/// In-memory catalog seeded with the app's static service listings
pub struct StaticCatalog {
    items: Vec<CatalogItem>,
}

impl StaticCatalog {
    /// Create a catalog from an explicit item list
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// The built-in listings the ordering screens display
    pub fn builtin() -> Self {
        let entries: [(&str, &str, i64, &str, ServiceCategory); 13] = [
            ("suit", "Two-piece suit", 1200, "suit", ServiceCategory::DryClean),
            ("dress", "Dress", 800, "dress", ServiceCategory::DryClean),
            ("coat", "Coat", 900, "coat", ServiceCategory::DryClean),
            ("blazer", "Blazer", 700, "blazer", ServiceCategory::DryClean),
            ("tie", "Tie", 150, "tie", ServiceCategory::DryClean),
            ("shirt", "Shirt", 50, "shirt", ServiceCategory::Ironing),
            ("trousers", "Trousers", 60, "trousers", ServiceCategory::Ironing),
            ("dress", "Dress", 80, "dress", ServiceCategory::Ironing),
            ("bedsheet", "Bedsheet", 100, "bedsheet", ServiceCategory::Ironing),
            ("duvet", "Duvet", 500, "duvet", ServiceCategory::WashAndFold),
            ("blanket", "Blanket", 400, "blanket", ServiceCategory::WashAndFold),
            ("curtains", "Curtains", 350, "curtains", ServiceCategory::WashAndFold),
            ("mixed-load", "Mixed load (per kg)", 120, "basket", ServiceCategory::WashAndFold),
        ];

        let items = entries
            .into_iter()
            .map(|(item_id, name, price, icon, category)| CatalogItem {
                item_id: item_id.to_string(),
                name: name.to_string(),
                unit_price: Decimal::new(price, 0),
                icon: icon.to_string(),
                category,
            })
            .collect();

        Self { items }
    }
}

impl CatalogSource for StaticCatalog {
    fn items_for(&self, category: ServiceCategory) -> Vec<CatalogItem> {
        let items: Vec<CatalogItem> = self
            .items
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect();
        debug!(%category, count = items.len(), "Listed catalog items");
        items
    }

    fn find(&self, category: ServiceCategory, item_id: &str) -> Option<CatalogItem> {
        self.items
            .iter()
            .find(|item| item.category == category && item.item_id == item_id)
            .cloned()
    }
}
