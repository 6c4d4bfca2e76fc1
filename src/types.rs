//! Re-exported types from external crates for convenience.
//!
//! Request and response types use these in their public fields, so they are re-exported here
//! and callers don't need to add the crates to their `Cargo.toml`.

/// Calendar and UTC types used by date-bearing requests and by the [`crate::time`] wrappers.
pub use chrono::{FixedOffset, NaiveDate, Utc};
/// Secret holder for the API key and bearer token.
pub use secrecy::{ExposeSecret, SecretString};

pub use crate::time::{DateTime, LongMonthDate, OffsetDateTime};
