//! Order edit route handlers.
//!
//! Buyer name and address may be corrected while an order is still `new`;
//! the moment fulfillment picks it up the order is frozen. Email and items
//! are immutable after creation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use penguin_shop_core::OrderId;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::Order;
use crate::state::AppState;

/// Query parameters for both edit routes.
#[derive(Debug, Deserialize)]
pub struct EditParams {
    pub id: Option<String>,
}

/// Editable fields of the edit form.
#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub buyer_name: String,
    pub address: String,
}

/// Edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "edit_order.html")]
pub struct EditTemplate {
    pub order_id: String,
    pub buyer_name: String,
    pub address: String,
    pub email: String,
    /// Total in cents; formatted with the `money` filter.
    pub total: i64,
}

impl From<&Order> for EditTemplate {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id.to_hex(),
            buyer_name: order.buyer_name.clone(),
            address: order.address.clone(),
            email: order.email.clone(),
            total: order.total.as_cents(),
        }
    }
}

/// Display the edit form for a still-editable order.
///
/// GET /edit?id={id}
pub async fn form(State(state): State<AppState>, Query(params): Query<EditParams>) -> Result<EditTemplate> {
    let order = load_editable_order(&state, params.id.as_deref()).await?;
    Ok(EditTemplate::from(&order))
}

/// Apply the edit and redirect back to the board.
///
/// POST /edit?id={id}
///
/// Only buyer name and address are updated; every other field is left
/// untouched. Responds 302 Found to `/orders` on success.
pub async fn submit(
    State(state): State<AppState>,
    Query(params): Query<EditParams>,
    Form(form): Form<EditForm>,
) -> Result<Response> {
    let order = load_editable_order(&state, params.id.as_deref()).await?;

    let buyer_name = form.buyer_name.trim();
    let address = form.address.trim();
    if buyer_name.is_empty() || address.is_empty() {
        return Err(AppError::BadRequest(
            "name and address must not be empty".to_owned(),
        ));
    }

    state
        .collections()
        .orders()
        .update_contact(order.id, buyer_name, address)
        .await?;
    tracing::info!(order_id = %order.id, "order contact details updated");

    Ok(redirect_found("/orders"))
}

/// Resolve the id parameter and enforce the editable-state precondition.
async fn load_editable_order(state: &AppState, id: Option<&str>) -> Result<Order> {
    let id = id.ok_or_else(|| AppError::BadRequest("missing id parameter".to_owned()))?;
    let order_id =
        OrderId::parse(id).map_err(|_| AppError::BadRequest("invalid order id".to_owned()))?;

    let order = state
        .collections()
        .orders()
        .get(order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    if !order.status.is_editable() {
        return Err(AppError::BadRequest(
            "only orders with status 'new' can be edited".to_owned(),
        ));
    }

    Ok(order)
}

/// A 302 Found redirect (axum's `Redirect` helpers only cover 303/307/308).
fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_found_sets_status_and_location() {
        let response = redirect_found("/orders");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/orders"
        );
    }
}
