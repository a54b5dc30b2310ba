//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /            - Catalog + checkout form
//! POST /checkout    - Create order from form body, 303 to /orders
//! GET  /orders      - Public order board
//! GET  /status/{id} - Live or archived status for one order
//! GET  /edit?id=..  - Edit form for a still-new order
//! POST /edit?id=..  - Apply the edit, 302 to /orders
//! GET  /healthz     - Liveness probe (in main)
//! ```

pub mod board;
pub mod checkout;
pub mod edit;
pub mod home;
pub mod status;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/checkout", post(checkout::submit))
        .route("/orders", get(board::index))
        .route("/status/{id}", get(status::show))
        .route("/edit", get(edit::form).post(edit::submit))
}
