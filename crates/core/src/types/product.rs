//! The catalog product entity.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A purchasable product from the catalog.
///
/// Products are created by the catalog loader and immutable afterwards; the
/// whole list is replaced if the catalog is ever reloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price, normalized at load time.
    pub price: Price,
    /// Path to the product image resource.
    pub image: String,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub const fn new(id: ProductId, name: String, price: Price, image: String) -> Self {
        Self {
            id,
            name,
            price,
            image,
        }
    }
}
