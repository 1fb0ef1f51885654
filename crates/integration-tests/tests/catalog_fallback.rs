//! Startup behavior when the catalog resource is unavailable.
//!
//! These run fully offline: the fetch targets a reserved TEST-NET-1
//! address with a short timeout, so the fallback path is exercised without
//! any server.

use std::time::Duration;

use golden_fork_widget::{App, RecordingTarget, Region, WidgetConfig, fallback_catalog};
use rust_decimal::Decimal;

fn unreachable_config() -> WidgetConfig {
    WidgetConfig {
        catalog_url: "http://192.0.2.1/product.json".to_string(),
        fetch_timeout: Duration::from_millis(200),
        ..WidgetConfig::default()
    }
}

#[tokio::test]
async fn test_rejected_fetch_installs_literal_fallback() {
    let mut app = App::new(unreachable_config(), RecordingTarget::new())
        .expect("config is valid");
    app.start().await;

    let catalog = app.catalog();
    assert_eq!(catalog.len(), 8);
    let ids: Vec<i32> = catalog.iter().map(|p| p.id.as_i32()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(catalog, fallback_catalog());

    let prices: Vec<String> = catalog.iter().map(|p| p.price.to_string()).collect();
    assert_eq!(
        prices,
        vec!["$9.67", "$10.99", "$13.45", "$7.50", "$6.99", "$16.45", "$7.65", "$9.31"]
    );
}

#[tokio::test]
async fn test_fallback_prices_positive_with_two_decimals() {
    let mut app = App::new(unreachable_config(), RecordingTarget::new())
        .expect("config is valid");
    app.start().await;

    for product in app.catalog() {
        assert!(product.price.amount() > Decimal::ZERO);
        let display = product.price.to_string();
        let (_, decimals) = display.split_once('.').expect("decimal point");
        assert_eq!(decimals.len(), 2, "{display} should show two decimals");
    }
}

#[tokio::test]
async fn test_first_render_happens_even_on_failure() {
    let mut app = App::new(unreachable_config(), RecordingTarget::new())
        .expect("config is valid");
    app.start().await;

    // The UI is never empty: grid holds the fallback cards, the cart shows
    // its empty state, and the totals are zeroed
    let grid = app
        .target()
        .region_html(Region::ProductGrid)
        .expect("grid rendered");
    assert_eq!(grid.matches("order-card").count(), 8);
    assert!(grid.contains("Italian Spaghetti"));

    let cart = app
        .target()
        .region_html(Region::CartItems)
        .expect("cart rendered");
    assert!(cart.contains("Your cart is empty. Add some delicious food!"));
    assert_eq!(
        app.target().texts.get(&Region::CartCount).map(String::as_str),
        Some("0")
    );
}
