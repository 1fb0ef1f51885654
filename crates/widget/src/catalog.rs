//! Catalog loading and the built-in fallback list.
//!
//! The catalog is a read-only JSON array fetched once per session. Prices
//! arrive as currency-formatted strings (`"$9.67"`) and are normalized to
//! [`Price`] here, the only place that parsing ever happens. Any fetch or
//! decode failure is logged and absorbed by substituting the fallback
//! catalog: availability over correctness of the exact list, and the UI is
//! never empty.

use std::str::FromStr;
use std::time::Duration;

use golden_fork_core::{Price, PriceParseError, Product, ProductId};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while retrieving or decoding the catalog.
///
/// Never escapes [`CatalogLoader::load`]; every variant ends in the
/// fallback catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (network error or timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not a valid product array.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A product carried a malformed price string.
    #[error("invalid price for product {id}: {source}")]
    Price {
        id: ProductId,
        source: PriceParseError,
    },
}

/// Wire form of a catalog entry, before price normalization.
#[derive(Debug, Deserialize)]
struct RawProduct {
    id: i32,
    name: String,
    price: String,
    image: String,
}

impl TryFrom<RawProduct> for Product {
    type Error = CatalogError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let id = ProductId::new(raw.id);
        let price = Price::from_str(&raw.price)
            .map_err(|source| CatalogError::Price { id, source })?;
        Ok(Self::new(id, raw.name, price, raw.image))
    }
}

/// Decode a catalog JSON document into products.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the document is not a JSON array of
/// products or any price string fails to parse.
pub fn parse_catalog(body: &str) -> Result<Vec<Product>, CatalogError> {
    let raw: Vec<RawProduct> = serde_json::from_str(body)?;
    raw.into_iter().map(Product::try_from).collect()
}

/// The built-in catalog used whenever the fetch fails.
#[must_use]
pub fn fallback_catalog() -> Vec<Product> {
    const ITEMS: [(i32, &str, i64, &str); 8] = [
        (1, "Double Beef Burger", 967, "images/burger.png"),
        (2, "Veggie Pizza", 1099, "images/pizza.png"),
        (3, "Fried Chicken", 1345, "images/fried-chicken.png"),
        (4, "Chicken Roll", 750, "images/chicken-roll.png"),
        (5, "Sub Sandwich", 699, "images/sandwich.png"),
        (6, "Chicken Lasagna", 1645, "images/lasagna.png"),
        (7, "Italian Spaghetti", 765, "images/spaghetti.png"),
        (8, "Spring Roll", 931, "images/spring-roll.png"),
    ];

    ITEMS
        .into_iter()
        .map(|(id, name, cents, image)| {
            Product::new(
                ProductId::new(id),
                name.to_string(),
                Price::from_cents(cents),
                image.to_string(),
            )
        })
        .collect()
}

/// Fetches the catalog resource, falling back on any failure.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    client: reqwest::Client,
    url: String,
}

impl CatalogLoader {
    /// Create a loader with a bounded fetch timeout.
    ///
    /// If the client cannot be built the loader degrades to fallback-only
    /// and logs why.
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("failed to build catalog HTTP client: {e}");
                reqwest::Client::new()
            });
        Self {
            client,
            url: url.into(),
        }
    }

    /// Load the catalog.
    ///
    /// Infallible by design: any retrieval or decode failure is logged at
    /// `warn` and the fallback catalog is returned instead. No retry.
    pub async fn load(&self) -> Vec<Product> {
        match self.fetch().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "catalog loaded");
                products
            }
            Err(e) => {
                tracing::warn!("catalog fetch failed, using fallback: {e}");
                fallback_catalog()
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }
        let body = response.text().await?;
        parse_catalog(&body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_catalog_normalizes_prices() {
        let body = r#"[
            {"id": 1, "name": "Double Beef Burger", "price": "$9.67", "image": "images/burger.png"},
            {"id": 2, "name": "Veggie Pizza", "price": "$10.99", "image": "images/pizza.png"}
        ]"#;
        let products = parse_catalog(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price, Price::from_cents(967));
        assert_eq!(products[1].price, Price::from_cents(1099));
    }

    #[test]
    fn test_parse_catalog_rejects_malformed_json() {
        assert!(matches!(
            parse_catalog("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_catalog_rejects_bad_price() {
        let body = r#"[{"id": 1, "name": "Burger", "price": "cheap", "image": "x.png"}]"#;
        let err = parse_catalog(body).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Price { id, .. } if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_fallback_catalog_shape() {
        let products = fallback_catalog();
        assert_eq!(products.len(), 8);
        let ids: Vec<i32> = products.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(products[0].name, "Double Beef Burger");
        assert_eq!(products[0].price, Price::from_cents(967));
        assert_eq!(products[7].image, "images/spring-roll.png");
    }

    #[test]
    fn test_fallback_prices_positive_two_decimals() {
        for product in fallback_catalog() {
            assert!(product.price.amount() > Decimal::ZERO);
            // Display precision is exactly two decimal digits
            let display = product.price.to_string();
            let (_, decimals) = display.split_once('.').unwrap();
            assert_eq!(decimals.len(), 2);
        }
    }

    #[tokio::test]
    async fn test_load_falls_back_on_unreachable_url() {
        // Reserved TEST-NET-1 address, nothing listens there
        let loader = CatalogLoader::new(
            "http://192.0.2.1/product.json",
            Duration::from_millis(200),
        );
        let products = loader.load().await;
        assert_eq!(products, fallback_catalog());
    }
}
