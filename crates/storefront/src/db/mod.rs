//! Database access for the storefront MongoDB.
//!
//! # Database: `penguin_shop`
//!
//! ## Collections
//!
//! - `products` - Catalog, written by the admin backend; read-only here
//! - `orders` - Live orders; created by checkout, edited while `new`
//! - `deliveries` - Archive of delivered orders, written by the external
//!   delivery process; read-only here
//!
//! Every operation is bounded by a short timeout derived from the request,
//! so a hung database call surfaces as an error instead of wedging the
//! worker. Handles are acquired once at startup and injected into handlers
//! through [`crate::state::AppState`]; no global mutable state.

use std::future::Future;
use std::time::Duration;

use bson::doc;
use mongodb::{Client, Collection, Database};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::StorefrontConfig;
use crate::models::{DeliveryRecord, Order, Product};

pub mod catalog;
pub mod deliveries;
pub mod orders;

pub use catalog::CatalogRepository;
pub use deliveries::DeliveryRepository;
pub use orders::OrderRepository;

/// Timeout for the initial connection handshake.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for read and single-document update operations.
pub(crate) const OP_TIMEOUT: Duration = Duration::from_secs(3);

/// Timeout for the checkout insert path.
pub(crate) const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors surfaced by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Driver-level query, decode, or write failure.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The operation exceeded its per-request time budget.
    #[error("database operation timed out after {0:?}")]
    Timeout(Duration),

    /// A stored document did not have the shape this code relies on.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Open a client, select the database, and verify the server responds.
///
/// # Errors
///
/// Returns `RepositoryError` if the URI is invalid, the handshake fails, or
/// the ping does not come back within [`CONNECT_TIMEOUT`].
pub async fn connect(config: &StorefrontConfig) -> Result<Database, RepositoryError> {
    let client = Client::with_uri_str(config.mongo_uri.expose_secret()).await?;
    let database = client.database(&config.database);
    with_timeout(CONNECT_TIMEOUT, async {
        database.run_command(doc! { "ping": 1 }).await.map(|_| ())
    })
    .await?;
    Ok(database)
}

/// The three collection handles the storefront works with.
///
/// Cheap to clone; safe for concurrent use across request tasks.
#[derive(Clone)]
pub struct Collections {
    products: Collection<Product>,
    orders: Collection<Order>,
    deliveries: Collection<DeliveryRecord>,
}

impl Collections {
    /// Acquire the typed collection handles. Pure resource acquisition,
    /// no I/O.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            products: database.collection("products"),
            orders: database.collection("orders"),
            deliveries: database.collection("deliveries"),
        }
    }

    /// Repository over the `products` collection.
    #[must_use]
    pub const fn catalog(&self) -> CatalogRepository<'_> {
        CatalogRepository::new(&self.products)
    }

    /// Repository over the `orders` collection.
    #[must_use]
    pub const fn orders(&self) -> OrderRepository<'_> {
        OrderRepository::new(&self.orders)
    }

    /// Repository over the `deliveries` archive.
    #[must_use]
    pub const fn deliveries(&self) -> DeliveryRepository<'_> {
        DeliveryRepository::new(&self.deliveries)
    }
}

/// Bound a driver future by a timeout, mapping elapsed time onto
/// [`RepositoryError::Timeout`].
pub(crate) async fn with_timeout<T, F>(limit: Duration, future: F) -> Result<T, RepositoryError>
where
    F: Future<Output = Result<T, mongodb::error::Error>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => Ok(result?),
        Err(_elapsed) => Err(RepositoryError::Timeout(limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn with_timeout_maps_elapsed_to_timeout_error() {
        let slow = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(())
        };
        let result = with_timeout(Duration::from_millis(5), slow).await;
        assert!(matches!(result, Err(RepositoryError::Timeout(_))));
    }

    #[tokio::test]
    async fn with_timeout_passes_through_fast_results() {
        let fast = async { Ok(42) };
        let result = with_timeout(Duration::from_secs(1), fast).await;
        assert!(matches!(result, Ok(42)));
    }
}
