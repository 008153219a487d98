use anyhow::Context;
use rust_decimal_macros::dec;
use tracing::info;

use laundry_cart::catalog::StaticCatalog;
use laundry_cart::models::ServiceCategory;
use laundry_cart::services::CartService;
use laundry_cart::{init_telemetry, AppConfig};

/// Walk one ordering session end to end against the built-in catalog.
fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    init_telemetry(&config.telemetry.service_name, config.telemetry.json_logging)
        .context("Failed to initialize telemetry")?;

    info!("Starting {} demo session", config.telemetry.service_name);

    let catalog = StaticCatalog::builtin();
    let mut service = CartService::new(Box::new(catalog), config.pricing.into());

    service.start_session("demo-session")?;

    let summary = service
        .replace_category_from_catalog(ServiceCategory::DryClean, &[("suit", 2)])?;
    info!(
        subtotal = %summary.subtotal,
        delivery_fee = %summary.delivery_fee,
        tax = %summary.tax,
        total = %summary.total,
        "Dry cleaning confirmed"
    );

    let summary = service
        .replace_category_from_catalog(ServiceCategory::Ironing, &[("shirt", 3)])?;
    info!(
        subtotal = %summary.subtotal,
        total_items = summary.total_items,
        "Ironing confirmed"
    );

    let summary = service.update_item_quantity(ServiceCategory::DryClean, "suit", 0)?;
    info!(subtotal = %summary.subtotal, "Suit removed from the order");

    let quote = service.checkout(Some(dec!(20)))?;
    info!(
        quote_id = %quote.quote_id,
        subtotal = %quote.subtotal,
        discount = %quote.discount,
        total = %quote.total,
        "Order quoted"
    );

    service.clear()?;
    service.end_session()?;

    info!("Demo session complete");
    Ok(())
}
