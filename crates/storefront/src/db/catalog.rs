//! Catalog repository (read-only).

use bson::doc;
use futures::TryStreamExt;
use mongodb::Collection;
use penguin_shop_core::ProductId;

use super::{OP_TIMEOUT, RepositoryError, with_timeout};
use crate::models::Product;

/// Repository for catalog reads.
pub struct CatalogRepository<'a> {
    products: &'a Collection<Product>,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(products: &'a Collection<Product>) -> Self {
        Self { products }
    }

    /// All active products, in the database's natural order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails, a document cannot be
    /// decoded, or the read exceeds its time budget.
    pub async fn list_active(&self) -> Result<Vec<Product>, RepositoryError> {
        with_timeout(OP_TIMEOUT, async {
            let cursor = self.products.find(doc! { "is_active": true }).await?;
            cursor.try_collect().await
        })
        .await
    }

    /// Look up a single product by id.
    ///
    /// Used at checkout to resolve the trusted name and unit price for a
    /// line item; the client-supplied form never carries prices.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on query/decode failure or timeout.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        with_timeout(OP_TIMEOUT, async {
            self.products
                .find_one(doc! { "_id": id.as_object_id() })
                .await
        })
        .await
    }
}
