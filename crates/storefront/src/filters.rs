//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Formats an amount in cents as a price string.
///
/// Usage in templates: `{{ order.total|money }}`
#[askama::filter_fn]
pub fn money(cents: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let cents = cents.to_string().parse::<i64>().unwrap_or(0);
    Ok(penguin_shop_core::Price::from_cents(cents).display())
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    use askama::Template;

    use crate::filters;

    #[derive(Template)]
    #[template(source = "{{ cents|money }}", ext = "txt")]
    struct MoneyTemplate {
        cents: i64,
    }

    #[test]
    fn money_formats_cents() {
        assert_eq!(MoneyTemplate { cents: 1999 }.render().unwrap(), "$19.99");
        assert_eq!(MoneyTemplate { cents: 5 }.render().unwrap(), "$0.05");
    }
}
