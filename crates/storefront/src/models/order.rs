//! Order, line-item, and delivery-archive models.

use chrono::{DateTime, Utc};
use penguin_shop_core::{OrderId, OrderStatus, Price, ProductId};
use serde::{Deserialize, Serialize};

/// A single line of an order.
///
/// Name and unit price are snapshots of the catalog at order time, so later
/// catalog edits do not retroactively change order history. The subtotal is
/// always recomputed server-side from quantity and the snapshotted price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Reference back to the catalog product (a snapshot, not ownership).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub name: String,
    pub qty: u32,
    pub unit_price: Price,
    pub subtotal: Price,
}

impl LineItem {
    /// Build a line from a resolved catalog snapshot.
    #[must_use]
    pub fn new(product_id: ProductId, name: String, qty: u32, unit_price: Price) -> Self {
        Self {
            product_id: Some(product_id),
            name,
            qty,
            unit_price,
            subtotal: unit_price.times(qty),
        }
    }
}

/// A document in the `orders` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    pub buyer_name: String,
    pub address: String,
    pub email: String,
    pub status: OrderStatus,
    pub items: Vec<LineItem>,
    pub total: Price,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// An order about to be inserted; the storage layer assigns the `_id`.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub buyer_name: String,
    pub address: String,
    pub email: String,
    pub status: OrderStatus,
    pub items: Vec<LineItem>,
    pub total: Price,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    /// Assemble a checkout order from validated buyer details and resolved
    /// line items. Status is fixed to `new` and the creation timestamp is
    /// server-assigned; the total is the sum of the line subtotals.
    #[must_use]
    pub fn from_checkout(
        buyer_name: String,
        address: String,
        email: String,
        items: Vec<LineItem>,
    ) -> Self {
        let total = Price::sum(items.iter().map(|item| item.subtotal));
        Self {
            buyer_name,
            address,
            email,
            status: OrderStatus::New,
            items,
            total,
            created_at: Utc::now(),
        }
    }
}

/// A document in the `deliveries` collection, written by the external
/// delivery process when an order leaves `orders`. Keyed by the original
/// order's id (`order_id`), not by its own `_id`. Read-only here.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryRecord {
    #[serde(rename = "_id")]
    pub id: bson::oid::ObjectId,
    /// The id the order had while it was live.
    pub order_id: OrderId,
    pub buyer_name: String,
    pub address: String,
    pub email: String,
    pub items: Vec<LineItem>,
    pub total: Price,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub delivered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_id(hex: &str) -> ProductId {
        ProductId::parse(hex).unwrap()
    }

    #[test]
    fn line_item_recomputes_subtotal() {
        let item = LineItem::new(
            product_id("507f1f77bcf86cd799439011"),
            "Frozen Fish".to_owned(),
            3,
            Price::from_cents(450),
        );
        assert_eq!(item.subtotal, Price::from_cents(1350));
    }

    #[test]
    fn checkout_order_totals_its_lines() {
        let items = vec![
            LineItem::new(
                product_id("507f1f77bcf86cd799439011"),
                "Frozen Fish".to_owned(),
                2,
                Price::from_cents(450),
            ),
            LineItem::new(
                product_id("507f1f77bcf86cd799439012"),
                "Krill Snacks".to_owned(),
                1,
                Price::from_cents(199),
            ),
        ];

        let order = NewOrder::from_checkout(
            "Pingu".to_owned(),
            "Igloo 7".to_owned(),
            "pingu@example.com".to_owned(),
            items,
        );

        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.total, Price::from_cents(1099));
        assert_eq!(
            order.total,
            Price::sum(order.items.iter().map(|i| i.subtotal))
        );
    }

    #[test]
    fn order_decodes_from_bson() {
        let raw = bson::doc! {
            "_id": bson::oid::ObjectId::new(),
            "buyer_name": "Pingu",
            "address": "Igloo 7",
            "email": "pingu@example.com",
            "status": "preparing",
            "items": [{
                "name": "Frozen Fish",
                "qty": 2_i32,
                "unit_price": 450_i64,
                "subtotal": 900_i64,
            }],
            "total": 900_i64,
            "created_at": bson::DateTime::now(),
        };

        let order: Order = bson::from_document(raw).unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
        assert!(order.items[0].product_id.is_none());
    }
}
