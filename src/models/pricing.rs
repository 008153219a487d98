use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing rules applied to every cart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    /// Flat delivery fee, charged only when the cart is non-empty
    pub delivery_fee: Decimal,
    /// Tax rate applied to the subtotal (0.16 = 16%)
    pub tax_rate: Decimal,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            delivery_fee: Decimal::new(300, 0),
            tax_rate: Decimal::new(16, 2),
        }
    }
}

/// Snapshot of the derived monetary totals for a cart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    /// Assemble totals from a subtotal, the pricing rules, and a discount.
    ///
    /// The delivery fee applies only when the subtotal is positive; the
    /// discount is subtracted before totaling.
    pub fn compute(subtotal: Decimal, pricing: &Pricing, discount: Decimal) -> Self {
        let delivery_fee = if subtotal > Decimal::ZERO {
            pricing.delivery_fee
        } else {
            Decimal::ZERO
        };
        let tax = subtotal * pricing.tax_rate;
        Self {
            subtotal,
            delivery_fee,
            tax,
            discount,
            total: subtotal + delivery_fee + tax - discount,
        }
    }
}
