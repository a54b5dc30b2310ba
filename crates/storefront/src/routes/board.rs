//! Public order board route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::error::Result;
use crate::filters;
use crate::models::Order;
use crate::state::AppState;

/// One line of an order as shown on the board.
#[derive(Clone)]
pub struct BoardItemView {
    pub name: String,
    pub qty: u32,
}

/// Order display data for the board.
#[derive(Clone)]
pub struct OrderSummaryView {
    /// Full hex id, used for the status/edit links.
    pub id: String,
    /// Last 4 hex characters, the friendly display id.
    pub short_id: String,
    pub buyer_name: String,
    pub status: &'static str,
    pub items: Vec<BoardItemView>,
    /// Total in cents; formatted with the `money` filter.
    pub total: i64,
}

impl From<&Order> for OrderSummaryView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_hex(),
            short_id: order.id.short(),
            buyer_name: order.buyer_name.clone(),
            status: order.status.label(),
            items: order
                .items
                .iter()
                .map(|item| BoardItemView {
                    name: item.name.clone(),
                    qty: item.qty,
                })
                .collect(),
            total: order.total.as_cents(),
        }
    }
}

/// Order board template.
#[derive(Template, WebTemplate)]
#[template(path = "orders_board.html")]
pub struct BoardTemplate {
    pub orders: Vec<OrderSummaryView>,
}

/// Display every order still in the live collection.
///
/// GET /orders
///
/// Delivered orders have already been migrated to the archive by the
/// external delivery process, so they disappear from the board naturally.
pub async fn index(State(state): State<AppState>) -> Result<BoardTemplate> {
    let orders = state.collections().orders().list().await?;

    Ok(BoardTemplate {
        orders: orders.iter().map(OrderSummaryView::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use penguin_shop_core::{OrderId, OrderStatus, Price};

    #[test]
    fn summary_derives_short_id_and_labels() {
        let order = Order {
            id: OrderId::parse("507f1f77bcf86cd799439011").unwrap(),
            buyer_name: "Pingu".to_owned(),
            address: "Igloo 7".to_owned(),
            email: "pingu@example.com".to_owned(),
            status: OrderStatus::EnRoute,
            items: vec![],
            total: Price::from_cents(900),
            created_at: Utc::now(),
        };

        let view = OrderSummaryView::from(&order);
        assert_eq!(view.short_id, "9011");
        assert_eq!(view.id, "507f1f77bcf86cd799439011");
        assert_eq!(view.status, "en route");
        assert_eq!(view.total, 900);
    }
}
