//! Document models mapping the MongoDB collections.
//!
//! These structs mirror the documents the external admin backend writes;
//! unknown fields in stored documents are ignored on decode.

pub mod order;
pub mod product;

pub use order::{DeliveryRecord, LineItem, NewOrder, Order};
pub use product::Product;
