//! Request and response types for the dispatch endpoint.

use std::collections::HashMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct GameIdRequest {
    /// MD5 of the ROM, as computed by the emulator
    pub hash: String,
}

#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct HashLibraryRequest {
    pub console_id: u32,
}

/// Result of a hash lookup. An unknown hash resolves to game `0`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GameIdResponse {
    pub success: bool,
    #[serde(rename = "GameID")]
    pub game_id: u64,
}

impl GameIdResponse {
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.success && self.game_id != 0
    }
}

/// Every hash known for one console, keyed by hash.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct HashLibrary {
    pub success: bool,
    #[serde(rename = "MD5List", default)]
    #[builder(default)]
    pub md5_list: HashMap<String, u64>,
}

impl HashLibrary {
    /// Returns the game a hash belongs to.
    #[must_use]
    pub fn game_for(&self, hash: &str) -> Option<u64> {
        self.md5_list.get(hash).copied()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_hash_resolves_to_zero() {
        let response: GameIdResponse =
            serde_json::from_value(json!({ "Success": true, "GameID": 0 })).unwrap();

        assert!(!response.is_known());
    }

    #[test]
    fn hash_library_should_deserialize() {
        let library: HashLibrary = serde_json::from_value(json!({
            "Success": true,
            "MD5List": {
                "1bc674be034e43c96b86487ac69d9293": 1,
                "1b1d9ac862c387367e904036114c4825": 1,
                "0f7a2e5b1d0e5a3b8c9a1e2c7a4b6d8f": 2
            }
        }))
        .unwrap();

        assert_eq!(library.md5_list.len(), 3);
        assert_eq!(library.game_for("0f7a2e5b1d0e5a3b8c9a1e2c7a4b6d8f"), Some(2));
        assert_eq!(library.game_for("missing"), None);
    }
}
