//! Delivery-archive repository (read-only).

use bson::doc;
use mongodb::Collection;
use penguin_shop_core::OrderId;

use super::{OP_TIMEOUT, RepositoryError, with_timeout};
use crate::models::DeliveryRecord;

/// Repository over the `deliveries` archive.
///
/// Written exclusively by the external delivery process; the storefront
/// consults it as the second tier of the status lookup chain.
pub struct DeliveryRepository<'a> {
    deliveries: &'a Collection<DeliveryRecord>,
}

impl<'a> DeliveryRepository<'a> {
    /// Create a new delivery repository.
    #[must_use]
    pub const fn new(deliveries: &'a Collection<DeliveryRecord>) -> Self {
        Self { deliveries }
    }

    /// Find the archive record for a delivered order.
    ///
    /// Archive records are keyed by the original order's id (`order_id`),
    /// not by their own `_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on query/decode failure or timeout.
    pub async fn find_by_order(
        &self,
        id: OrderId,
    ) -> Result<Option<DeliveryRecord>, RepositoryError> {
        with_timeout(OP_TIMEOUT, async {
            self.deliveries
                .find_one(doc! { "order_id": id.as_object_id() })
                .await
        })
        .await
    }
}
