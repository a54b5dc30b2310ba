//! Checkout route handler: turns the posted form into a persisted order.
//!
//! Line items arrive as `qty_<product-id-hex>` fields next to the buyer
//! fields. Name and unit price are re-resolved server-side per line, so a
//! tampered form cannot submit an arbitrary price.

use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use penguin_shop_core::ProductId;

use crate::error::{AppError, Result};
use crate::models::{LineItem, NewOrder};
use crate::state::AppState;

/// Buyer fields of the checkout form, trimmed and validated non-empty.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct BuyerDetails {
    pub buyer_name: String,
    pub address: String,
    pub email: String,
}

/// Create an order from the checkout form.
///
/// POST /checkout
///
/// Responds 303 See Other to `/orders` on success (redirect-after-post, so
/// a refresh cannot resubmit), 400 on validation failure, 500 on storage
/// failure.
pub async fn submit(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let buyer = parse_buyer(&fields)?;
    let candidates = parse_quantities(&fields);

    let catalog = state.collections().catalog();
    let mut items = Vec::new();
    for (product_id, qty) in candidates {
        // An id that resolves to no product is skipped, same as a bad qty
        let Some(product) = catalog.get(product_id).await? else {
            continue;
        };
        items.push(LineItem::new(product_id, product.name, qty, product.price));
    }

    if items.is_empty() {
        return Err(AppError::BadRequest(
            "select at least one product".to_owned(),
        ));
    }

    let order = NewOrder::from_checkout(buyer.buyer_name, buyer.address, buyer.email, items);
    let order_id = state.collections().orders().insert(&order).await?;
    tracing::info!(order_id = %order_id, total = %order.total, "order created");

    Ok(Redirect::to("/orders"))
}

/// Extract and validate the buyer fields.
///
/// All three are required non-empty after trimming surrounding whitespace.
fn parse_buyer(fields: &[(String, String)]) -> Result<BuyerDetails> {
    let value = |name: &str| {
        fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, v)| v.trim())
            .unwrap_or_default()
    };

    let buyer_name = value("buyer_name");
    let address = value("address");
    let email = value("email");
    if buyer_name.is_empty() || address.is_empty() || email.is_empty() {
        return Err(AppError::BadRequest(
            "fill in name, address, and email".to_owned(),
        ));
    }

    Ok(BuyerDetails {
        buyer_name: buyer_name.to_owned(),
        address: address.to_owned(),
        email: email.to_owned(),
    })
}

/// Collect the `qty_<id>` candidates from the form.
///
/// Best-effort by design: a non-positive or non-numeric quantity skips the
/// line, as does an id that is not a valid `ObjectId` hex string. A product
/// id repeated across several `qty_` fields keeps its first valid quantity,
/// so one product yields at most one line. Client input never contributes
/// anything beyond the id and the quantity.
fn parse_quantities(fields: &[(String, String)]) -> Vec<(ProductId, u32)> {
    let mut candidates: Vec<(ProductId, u32)> = Vec::new();
    for (key, value) in fields {
        let Some(id_hex) = key.strip_prefix("qty_") else {
            continue;
        };
        let Some(qty) = value.trim().parse::<u32>().ok().filter(|&q| q > 0) else {
            continue;
        };
        let Ok(product_id) = ProductId::parse(id_hex) else {
            continue;
        };
        if candidates.iter().any(|(id, _)| *id == product_id) {
            continue;
        }
        candidates.push((product_id, qty));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use penguin_shop_core::Price;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    const FISH: &str = "507f1f77bcf86cd799439011";
    const KRILL: &str = "507f1f77bcf86cd799439012";

    #[test]
    fn buyer_fields_are_trimmed() {
        let form = fields(&[
            ("buyer_name", "  Pingu "),
            ("address", "Igloo 7"),
            ("email", " pingu@example.com"),
        ]);
        let buyer = parse_buyer(&form).unwrap();
        assert_eq!(buyer.buyer_name, "Pingu");
        assert_eq!(buyer.email, "pingu@example.com");
    }

    #[test]
    fn whitespace_only_buyer_fields_fail_validation() {
        let form = fields(&[
            ("buyer_name", "Pingu"),
            ("address", "   "),
            ("email", "pingu@example.com"),
            (&format!("qty_{FISH}"), "2"),
        ]);
        assert!(matches!(
            parse_buyer(&form),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn missing_buyer_field_fails_validation() {
        let form = fields(&[("buyer_name", "Pingu"), ("email", "pingu@example.com")]);
        assert!(parse_buyer(&form).is_err());
    }

    #[test]
    fn quantities_keep_only_valid_lines() {
        let form = fields(&[
            ("buyer_name", "Pingu"),
            (&format!("qty_{FISH}"), "2"),
            (&format!("qty_{KRILL}"), "0"),      // non-positive: skipped
            ("qty_not-hex", "3"),                // bad id: skipped
            (&format!("qty_{KRILL}"), "many"),   // non-numeric: skipped
        ]);

        let candidates = parse_quantities(&form);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].0, ProductId::parse(FISH).unwrap());
        assert_eq!(candidates[0].1, 2);
    }

    #[test]
    fn repeated_product_keys_keep_the_first_valid_quantity() {
        let form = fields(&[
            (&format!("qty_{FISH}"), "2"),
            (&format!("qty_{FISH}"), "9"),
            (&format!("qty_{KRILL}"), "0"),
            (&format!("qty_{KRILL}"), "1"),
        ]);

        let candidates = parse_quantities(&form);
        assert_eq!(
            candidates,
            vec![
                (ProductId::parse(FISH).unwrap(), 2),
                (ProductId::parse(KRILL).unwrap(), 1),
            ]
        );
    }

    #[test]
    fn negative_quantities_are_skipped() {
        let form = fields(&[(&format!("qty_{FISH}"), "-1")]);
        assert!(parse_quantities(&form).is_empty());
    }

    #[test]
    fn client_supplied_prices_are_ignored() {
        // A hostile form can post any extra fields it likes; only the id
        // and quantity survive parsing, so prices always come from the
        // catalog snapshot.
        let form = fields(&[
            (&format!("qty_{FISH}"), "2"),
            ("unit_price", "1"),
            (&format!("price_{FISH}"), "1"),
        ]);
        let candidates = parse_quantities(&form);
        assert_eq!(candidates.len(), 1);

        let item = LineItem::new(
            candidates[0].0,
            "Frozen Fish".to_owned(),
            candidates[0].1,
            Price::from_cents(450),
        );
        assert_eq!(item.subtotal, Price::from_cents(900));
    }
}
