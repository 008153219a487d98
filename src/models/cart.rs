use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CartTotals, Pricing, ServiceCategory};

/// Order cart for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
    pricing: Pricing,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Individual priced entry in the cart, scoped to one service category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub icon: String,
    pub category: ServiceCategory,
    pub added_at: DateTime<Utc>,
}

/// Candidate item submitted for a category. Carries no category of its own;
/// the cart tags it when the category's items are replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSelection {
    pub item_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub icon: String,
}

impl Cart {
    /// Create a new empty cart governed by the given pricing rules
    pub fn new(pricing: Pricing) -> Self {
        let now = Utc::now();
        Self {
            items: Vec::new(),
            pricing,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every item of `category` with the given selections.
    ///
    /// Selections with quantity 0 are silently discarded. Items of other
    /// categories are never touched. When one batch carries the same item id
    /// twice, the later occurrence supersedes the earlier so the cart never
    /// holds two items with the same (item id, category) pair. Prices and
    /// names are stored as-is; this layer performs no validation.
    pub fn replace_category_items(
        &mut self,
        category: ServiceCategory,
        selections: Vec<ItemSelection>,
    ) {
        let now = Utc::now();
        self.items.retain(|item| item.category != category);
        for selection in selections {
            if selection.quantity == 0 {
                continue;
            }
            let line = LineItem {
                item_id: selection.item_id,
                name: selection.name,
                unit_price: selection.unit_price,
                quantity: selection.quantity,
                icon: selection.icon,
                category,
                added_at: now,
            };
            if let Some(existing) = self
                .items
                .iter_mut()
                .find(|item| item.category == category && item.item_id == line.item_id)
            {
                *existing = line;
            } else {
                self.items.push(line);
            }
        }
        self.updated_at = now;
    }

    /// Overwrite the quantity of the matching (item id, category) item.
    ///
    /// Quantity 0 removes the item entirely. Returns `false` when no item
    /// matches; the cart neither inserts nor errors in that case, leaving the
    /// caller to decide. Relative ordering of untouched items is preserved.
    pub fn update_item_quantity(
        &mut self,
        item_id: &str,
        category: ServiceCategory,
        new_quantity: u32,
    ) -> bool {
        if new_quantity == 0 {
            return self.remove_item(item_id, category);
        }
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.category == category && item.item_id == item_id)
        {
            item.quantity = new_quantity;
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }

    /// Remove the matching (item id, category) item
    pub fn remove_item(&mut self, item_id: &str, category: ServiceCategory) -> bool {
        let original_len = self.items.len();
        self.items
            .retain(|item| !(item.category == category && item.item_id == item_id));
        let removed = self.items.len() != original_len;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// Clear all items regardless of category
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = Utc::now();
    }

    /// All stored items, in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Items belonging to one category, in insertion order
    pub fn items_in_category(&self, category: ServiceCategory) -> Vec<&LineItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Get a specific item from the cart
    pub fn get_item(&self, item_id: &str, category: ServiceCategory) -> Option<&LineItem> {
        self.items
            .iter()
            .find(|item| item.category == category && item.item_id == item_id)
    }

    /// Check if a specific item is in the cart
    pub fn contains_item(&self, item_id: &str, category: ServiceCategory) -> bool {
        self.get_item(item_id, category).is_some()
    }

    /// Get the stored quantity of a specific item, 0 when absent
    pub fn item_quantity(&self, item_id: &str, category: ServiceCategory) -> u32 {
        self.get_item(item_id, category)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    /// Check if the cart is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of garments in the cart (sum of quantities)
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of unit price x quantity over all items
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.unit_price * Decimal::from(item.quantity))
            .sum()
    }

    /// Flat delivery fee, zero while the cart is empty
    pub fn delivery_fee(&self) -> Decimal {
        if self.subtotal() > Decimal::ZERO {
            self.pricing.delivery_fee
        } else {
            Decimal::ZERO
        }
    }

    /// Tax on the subtotal
    pub fn tax(&self) -> Decimal {
        self.subtotal() * self.pricing.tax_rate
    }

    /// Subtotal plus delivery fee plus tax
    pub fn total(&self) -> Decimal {
        self.totals().total
    }

    /// Snapshot of all derived totals with no discount applied
    pub fn totals(&self) -> CartTotals {
        self.totals_with_discount(Decimal::ZERO)
    }

    /// Snapshot of all derived totals with `discount` subtracted before totaling
    pub fn totals_with_discount(&self, discount: Decimal) -> CartTotals {
        CartTotals::compute(self.subtotal(), &self.pricing, discount)
    }

    /// The pricing rules this cart was created with
    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }
}

impl LineItem {
    /// Line total for this item (unit price x quantity)
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}


// SUMMARY & CHECKOUT MODELS

/// Display view of one line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemView {
    pub item_id: String,
    pub name: String,
    pub icon: String,
    pub category: ServiceCategory,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            item_id: item.item_id.clone(),
            name: item.name.clone(),
            icon: item.icon.clone(),
            category: item.category,
            quantity: item.quantity,
            unit_price: item.unit_price,
            line_total: item.line_total(),
        }
    }
}

/// Response model for cart reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub session_id: String,
    pub items: Vec<LineItemView>,
    pub total_items: u32,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// Response model for a checkout quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderQuote {
    pub quote_id: String,
    pub session_id: String,
    pub items: Vec<LineItemView>,
    pub total_items: u32,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}
