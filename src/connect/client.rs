use super::types::{GameIdRequest, GameIdResponse, HashLibrary, HashLibraryRequest};
use crate::detail::{self, key};
use crate::{Client, Result};

const GAME_ID: &str = "gameid";
const HASH_LIBRARY: &str = "hashlibrary";

#[allow(
    clippy::multiple_inherent_impl,
    reason = "operations are grouped by API surface"
)]
impl Client {
    /// Resolves a ROM hash to the game it belongs to.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use retroachievements_client::Client;
    /// use retroachievements_client::connect::types::GameIdRequest;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("my-web-api-key")?;
    /// let request = GameIdRequest::builder()
    ///     .hash("1bc674be034e43c96b86487ac69d9293")
    ///     .build();
    ///
    /// if let Some(response) = client.game_id_for_hash(&request).await? {
    ///     println!("game {}", response.game_id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn game_id_for_hash(&self, request: &GameIdRequest) -> Result<Option<GameIdResponse>> {
        let request = self
            .connect(GAME_ID)
            .with(detail::param(key::HASH, &request.hash));

        self.object(request).await
    }

    pub async fn hash_library(&self, request: &HashLibraryRequest) -> Result<Option<HashLibrary>> {
        let request = self
            .connect(HASH_LIBRARY)
            .with(detail::param(key::CONSOLE, request.console_id));

        self.object(request).await
    }
}
