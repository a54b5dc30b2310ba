//! Order lifecycle status.

use serde::{Deserialize, Serialize};

/// Status of an order while it lives in the `orders` collection.
///
/// Only `new` is set by the storefront itself (at checkout). The later
/// states are applied by the fulfillment process. `delivered` never appears
/// as a stored status here: delivery moves the whole document into the
/// `deliveries` archive, and the status page derives "delivered" from the
/// document's location instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    New,
    Preparing,
    EnRoute,
    Delivered,
}

impl OrderStatus {
    /// Whether buyer details may still be edited.
    ///
    /// Orders are frozen the moment fulfillment picks them up.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::New)
    }

    /// Human-readable label for templates.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Preparing => "preparing",
            Self::EnRoute => "en route",
            Self::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Preparing => write!(f, "preparing"),
            Self::EnRoute => write!(f, "en_route"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "preparing" => Ok(Self::Preparing),
            "en_route" => Ok(Self::EnRoute),
            "delivered" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_new_orders_are_editable() {
        assert!(OrderStatus::New.is_editable());
        assert!(!OrderStatus::Preparing.is_editable());
        assert!(!OrderStatus::EnRoute.is_editable());
        assert!(!OrderStatus::Delivered.is_editable());
    }

    #[test]
    fn round_trips_through_str() {
        for status in [
            OrderStatus::New,
            OrderStatus::Preparing,
            OrderStatus::EnRoute,
            OrderStatus::Delivered,
        ] {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn serializes_snake_case() {
        let raw = bson::to_bson(&OrderStatus::EnRoute).unwrap();
        assert_eq!(raw, bson::Bson::String("en_route".to_owned()));
    }
}
