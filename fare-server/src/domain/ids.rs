//! Identifier newtypes.
//!
//! GTFS feeds are loose about identifier types: the same column may hold
//! `"101"` in one feed and `101` in another. Wrapping identifiers in
//! string newtypes forces every comparison through string equality, so a
//! numeric-looking stop id can never fail to match its fare rule.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id! {
    /// A GTFS stop identifier (also used for fare-rule zone references).
    StopId
}

string_id! {
    /// A GTFS route identifier.
    RouteId
}

string_id! {
    /// A GTFS fare identifier, shared between fare rules and attributes.
    FareId
}
