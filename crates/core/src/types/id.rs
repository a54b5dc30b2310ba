//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Each wraps a BSON
//! `ObjectId` (the `_id` the storage layer assigns on insert) and knows how
//! to round-trip through the 24-character hex form used in URLs and forms.

use thiserror::Error;

/// Error parsing an identifier from its hex text form.
#[derive(Debug, Error)]
#[error("invalid identifier: {0}")]
pub struct ParseIdError(#[from] bson::oid::Error);

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `bson::oid::ObjectId` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]` (stored as a
///   native `ObjectId`, not a string)
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - `parse()` from the canonical 24-char hex form
/// - `to_hex()` and a derived `short()` display form (last 4 hex chars)
/// - `Display` and `FromStr` via the hex form
/// - `From<ObjectId>` and `Into<ObjectId>` implementations
///
/// # Example
///
/// ```rust
/// # use penguin_shop_core::define_id;
/// define_id!(ProductId);
/// define_id!(OrderId);
///
/// let order_id: OrderId = "507f1f77bcf86cd799439011".parse().unwrap();
/// assert_eq!(order_id.short(), "9011");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::bson::oid::ObjectId);

        impl $name {
            /// Create an ID from an existing `ObjectId`.
            #[must_use]
            pub const fn new(id: ::bson::oid::ObjectId) -> Self {
                Self(id)
            }

            /// Parse an ID from its canonical 24-character hex form.
            ///
            /// # Errors
            ///
            /// Returns [`ParseIdError`](crate::types::id::ParseIdError) if
            /// the text is not a valid `ObjectId` hex string.
            pub fn parse(hex: &str) -> ::core::result::Result<Self, $crate::types::id::ParseIdError> {
                Ok(Self(::bson::oid::ObjectId::parse_str(hex)?))
            }

            /// Get the underlying `ObjectId`.
            #[must_use]
            pub const fn as_object_id(&self) -> ::bson::oid::ObjectId {
                self.0
            }

            /// Canonical hex text form (24 characters).
            #[must_use]
            pub fn to_hex(&self) -> ::std::string::String {
                self.0.to_hex()
            }

            /// Short display form: the last 4 characters of the hex form,
            /// or the whole form if it is shorter than 4 characters.
            #[must_use]
            pub fn short(&self) -> ::std::string::String {
                let hex = self.to_hex();
                let cut = hex.len().saturating_sub(4);
                hex.get(cut..).map_or(hex.clone(), ::std::borrow::ToOwned::to_owned)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0.to_hex())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::ParseIdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<::bson::oid::ObjectId> for $name {
            fn from(id: ::bson::oid::ObjectId) -> Self {
                Self(id)
            }
        }

        impl From<$name> for ::bson::oid::ObjectId {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_through_hex() {
        let id = OrderId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn parse_rejects_malformed_hex() {
        assert!(OrderId::parse("not-an-object-id").is_err());
        assert!(OrderId::parse("").is_err());
        // Too short
        assert!(OrderId::parse("507f1f77").is_err());
    }

    #[test]
    fn short_is_last_four_hex_chars() {
        let id = OrderId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.short(), "9011");
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = ProductId::parse("507f1f77bcf86cd799439011").unwrap();
        let raw = bson::to_bson(&id).unwrap();
        assert_eq!(raw, bson::Bson::ObjectId(id.as_object_id()));
    }
}
