use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use laundry_cart::catalog::StaticCatalog;
use laundry_cart::models::{ItemSelection, Pricing, ServiceCategory};
use laundry_cart::services::CartService;

/// Default pricing used across the integration suite
pub static TEST_PRICING: Lazy<Pricing> = Lazy::new(|| Pricing {
    delivery_fee: dec!(300),
    tax_rate: dec!(0.16),
});

pub fn selection(item_id: &str, price: Decimal, quantity: u32) -> ItemSelection {
    ItemSelection {
        item_id: item_id.to_string(),
        name: item_id.to_string(),
        unit_price: price,
        quantity,
        icon: "hanger".to_string(),
    }
}

/// A service over the built-in catalog with an already-started session
pub fn started_service(session_id: &str) -> CartService {
    let mut service = CartService::new(Box::new(StaticCatalog::builtin()), *TEST_PRICING);
    service
        .start_session(session_id)
        .expect("session should start");
    service
}

/// The three categories, for tests that sweep all of them
pub fn all_categories() -> [ServiceCategory; 3] {
    ServiceCategory::ALL
}
