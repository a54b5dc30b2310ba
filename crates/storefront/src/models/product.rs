//! Catalog product model.

use penguin_shop_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// A document in the `products` collection.
///
/// Products are created out of band by the admin backend; the storefront
/// only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
    /// Image reference resolved against the configured uploads base URL.
    #[serde(default)]
    pub image_path: String,
    /// Only active products are offered on the home page.
    #[serde(default)]
    pub is_active: bool,
}
