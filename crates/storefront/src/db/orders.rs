//! Order repository.

use bson::doc;
use futures::TryStreamExt;
use mongodb::Collection;
use penguin_shop_core::OrderId;

use super::{CHECKOUT_TIMEOUT, OP_TIMEOUT, RepositoryError, with_timeout};
use crate::models::{NewOrder, Order};

/// Repository for the live `orders` collection.
pub struct OrderRepository<'a> {
    orders: &'a Collection<Order>,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(orders: &'a Collection<Order>) -> Self {
        Self { orders }
    }

    /// Persist a checkout order; the storage layer assigns the id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails, `Timeout`
    /// if it exceeds the write budget, and `DataCorruption` if the server
    /// hands back a non-`ObjectId` insert id.
    pub async fn insert(&self, order: &NewOrder) -> Result<OrderId, RepositoryError> {
        let result = with_timeout(CHECKOUT_TIMEOUT, async {
            self.orders
                .clone_with_type::<NewOrder>()
                .insert_one(order)
                .await
        })
        .await?;

        match result.inserted_id.as_object_id() {
            Some(id) => Ok(OrderId::new(id)),
            None => Err(RepositoryError::DataCorruption(format!(
                "insert returned non-ObjectId id: {}",
                result.inserted_id
            ))),
        }
    }

    /// All orders still in the live collection, natural order.
    ///
    /// Delivered orders have already been migrated out by the external
    /// delivery process, so no filter is needed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on query/decode failure or timeout.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        with_timeout(OP_TIMEOUT, async {
            let cursor = self.orders.find(doc! {}).await?;
            cursor.try_collect().await
        })
        .await
    }

    /// Look up a single live order by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on query/decode failure or timeout.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        with_timeout(OP_TIMEOUT, async {
            self.orders.find_one(doc! { "_id": id.as_object_id() }).await
        })
        .await
    }

    /// Partial update of the editable buyer fields, keyed by order id.
    /// Everything else in the document is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the update fails or times out.
    pub async fn update_contact(
        &self,
        id: OrderId,
        buyer_name: &str,
        address: &str,
    ) -> Result<(), RepositoryError> {
        with_timeout(OP_TIMEOUT, async {
            self.orders
                .update_one(
                    doc! { "_id": id.as_object_id() },
                    contact_update(buyer_name, address),
                )
                .await
                .map(|_| ())
        })
        .await
    }
}

/// The `$set` document for an order edit. Touches buyer name and address
/// and nothing else; status, items, total, and email stay immutable here.
fn contact_update(buyer_name: &str, address: &str) -> bson::Document {
    doc! { "$set": { "buyer_name": buyer_name, "address": address } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_update_sets_only_the_editable_fields() {
        let update = contact_update("Pingu", "Igloo 7");

        let set = update.get_document("$set").unwrap();
        let mut keys: Vec<_> = set.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["address", "buyer_name"]);
        assert_eq!(set.get_str("buyer_name").unwrap(), "Pingu");
        assert_eq!(set.get_str("address").unwrap(), "Igloo 7");

        // The whole update is that one $set; no other operators ride along
        assert_eq!(update.keys().count(), 1);
    }
}
