//! Order status route handler.
//!
//! An order's canonical storage location changes over its life: while it is
//! being worked it lives in `orders`; once delivered, the external delivery
//! process moves it into the `deliveries` archive keyed by the original
//! order id. Resolution is a two-tier lookup chain, first hit wins.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use penguin_shop_core::OrderId;

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::{DeliveryRecord, LineItem, Order};
use crate::state::AppState;

/// One line of the order as shown on the status page.
#[derive(Clone)]
pub struct StatusItemView {
    pub name: String,
    pub qty: u32,
    /// Subtotal in cents; formatted with the `money` filter.
    pub subtotal: i64,
}

impl From<&LineItem> for StatusItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            qty: item.qty,
            subtotal: item.subtotal.as_cents(),
        }
    }
}

/// Order status template.
///
/// `auto_refresh` tells the page to poll again: true while the order is
/// live and may still change state, false once it is delivered (terminal).
#[derive(Template, WebTemplate)]
#[template(path = "order_status.html")]
pub struct StatusTemplate {
    pub order_id: String,
    pub status: String,
    pub auto_refresh: bool,
    pub items: Vec<StatusItemView>,
    /// Total in cents; formatted with the `money` filter.
    pub total: i64,
    pub buyer_name: String,
    pub address: String,
    pub email: String,
}

impl StatusTemplate {
    /// View over a live order: current status, keep polling.
    #[must_use]
    pub fn live(order: &Order) -> Self {
        Self {
            order_id: order.id.to_hex(),
            status: order.status.label().to_owned(),
            auto_refresh: true,
            items: order.items.iter().map(StatusItemView::from).collect(),
            total: order.total.as_cents(),
            buyer_name: order.buyer_name.clone(),
            address: order.address.clone(),
            email: order.email.clone(),
        }
    }

    /// View over an archived order: status forced to delivered, polling off.
    #[must_use]
    pub fn delivered(record: &DeliveryRecord) -> Self {
        Self {
            order_id: record.order_id.to_hex(),
            status: "delivered".to_owned(),
            auto_refresh: false,
            items: record.items.iter().map(StatusItemView::from).collect(),
            total: record.total.as_cents(),
            buyer_name: record.buyer_name.clone(),
            address: record.address.clone(),
            email: record.email.clone(),
        }
    }
}

/// Display live or archived status for one order.
///
/// GET /status/{id}
///
/// 400 on an unparseable id, 404 when the order is in neither collection.
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusTemplate> {
    let order_id =
        OrderId::parse(&id).map_err(|_| AppError::BadRequest("invalid order id".to_owned()))?;

    // Lookup chain: live orders first, then the delivered archive
    if let Some(order) = state.collections().orders().get(order_id).await? {
        return Ok(StatusTemplate::live(&order));
    }
    if let Some(record) = state
        .collections()
        .deliveries()
        .find_by_order(order_id)
        .await?
    {
        return Ok(StatusTemplate::delivered(&record));
    }

    Err(AppError::NotFound(format!("order {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use penguin_shop_core::{OrderStatus, Price, ProductId};

    fn sample_order(status: OrderStatus) -> Order {
        Order {
            id: OrderId::parse("507f1f77bcf86cd799439011").unwrap(),
            buyer_name: "Pingu".to_owned(),
            address: "Igloo 7".to_owned(),
            email: "pingu@example.com".to_owned(),
            status,
            items: vec![LineItem::new(
                ProductId::parse("507f1f77bcf86cd799439012").unwrap(),
                "Frozen Fish".to_owned(),
                2,
                Price::from_cents(450),
            )],
            total: Price::from_cents(900),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn live_orders_keep_polling() {
        let view = StatusTemplate::live(&sample_order(OrderStatus::Preparing));
        assert!(view.auto_refresh);
        assert_eq!(view.status, "preparing");
        assert_eq!(view.order_id, "507f1f77bcf86cd799439011");
        assert_eq!(view.total, 900);
    }

    #[test]
    fn archived_orders_are_terminal() {
        let order = sample_order(OrderStatus::EnRoute);
        let record = DeliveryRecord {
            id: bson::oid::ObjectId::new(),
            order_id: order.id,
            buyer_name: order.buyer_name,
            address: order.address,
            email: order.email,
            items: order.items,
            total: order.total,
            delivered_at: Utc::now(),
        };

        let view = StatusTemplate::delivered(&record);
        assert!(!view.auto_refresh);
        assert_eq!(view.status, "delivered");
        // Keyed by the original order id, not the archive's own _id
        assert_eq!(view.order_id, "507f1f77bcf86cd799439011");
    }
}
