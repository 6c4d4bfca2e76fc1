//! Operations served by the single dispatch endpoint.
//!
//! These calls set no path: every request goes to the configured
//! [`connect_host`](crate::Client::connect_host) and names its operation in the `r` query
//! parameter.
//!
//! | `r` | Method | Description |
//! |-----|--------|-------------|
//! | `gameid` | [`game_id_for_hash`](crate::Client::game_id_for_hash) | Resolve a ROM hash to a game |
//! | `hashlibrary` | [`hash_library`](crate::Client::hash_library) | Every known hash of a console |

mod client;
pub mod types;
