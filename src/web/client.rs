use super::types::request::{
    AchievementUnlocksRequest, AchievementsEarnedOnDayRequest, CommentsRequest, ConsoleIdsRequest,
    GameListRequest, GameRequest, RecentGameAwardsRequest, UserProfileRequest,
    UserRecentAchievementsRequest,
};
use super::types::response::{
    AchievementUnlocks, Claim, Comments, Console, Game, GameListEntry, RecentAchievement,
    RecentGameAwards, UserProfile,
};
use crate::detail::{self, key};
use crate::{Client, Result};

#[allow(
    clippy::multiple_inherent_impl,
    reason = "operations are grouped by API surface"
)]
impl Client {
    /// Lists consoles known to the site.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use retroachievements_client::Client;
    /// use retroachievements_client::web::types::request::ConsoleIdsRequest;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("my-web-api-key")?;
    /// let request = ConsoleIdsRequest::builder().only_game_systems(true).build();
    ///
    /// for console in client.console_ids(&request).await? {
    ///     println!("{}: {}", console.id, console.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn console_ids(&self, request: &ConsoleIdsRequest) -> Result<Vec<Console>> {
        let request = self
            .web("API_GetConsoleIDs.php")
            .maybe(request.only_active.then(|| detail::flag(key::ACTIVE, true)))
            .maybe(
                request
                    .only_game_systems
                    .then(|| detail::flag(key::GAME_SYSTEMS, true)),
            );

        self.list(request).await
    }

    /// Returns `None` when the user does not exist.
    pub async fn user_profile(&self, request: &UserProfileRequest) -> Result<Option<UserProfile>> {
        let request = self
            .web("API_GetUserProfile.php")
            .with(detail::username(request.username.as_str()));

        self.object(request).await
    }

    pub async fn user_recent_achievements(
        &self,
        request: &UserRecentAchievementsRequest,
    ) -> Result<Vec<RecentAchievement>> {
        let request = self
            .web("API_GetUserRecentAchievements.php")
            .with(detail::username(request.username.as_str()))
            .maybe(request.minutes.map(detail::minutes));

        self.list(request).await
    }

    /// Returns `None` when no game has the requested ID.
    pub async fn game(&self, request: &GameRequest) -> Result<Option<Game>> {
        let request = self
            .web("API_GetGame.php")
            .with(detail::id(request.game_id));

        self.object(request).await
    }

    pub async fn game_list(&self, request: &GameListRequest) -> Result<Vec<GameListEntry>> {
        let request = self
            .web("API_GetGameList.php")
            .with(detail::id(request.console_id))
            .maybe(
                request
                    .only_with_achievements
                    .then(|| detail::flag(key::FILTER, true)),
            )
            .maybe(request.with_hashes.then(|| detail::flag(key::HASHES, true)))
            .maybe(request.offset.map(detail::offset))
            .maybe(request.count.map(detail::count));

        self.list(request).await
    }

    pub async fn achievement_unlocks(
        &self,
        request: &AchievementUnlocksRequest,
    ) -> Result<Option<AchievementUnlocks>> {
        let request = self
            .web("API_GetAchievementUnlocks.php")
            .with(detail::achievement_id(request.achievement_id))
            .maybe(request.offset.map(detail::offset))
            .maybe(request.count.map(detail::count));

        self.object(request).await
    }

    /// Fetches the comments attached to a game, an achievement or a user wall.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use retroachievements_client::Client;
    /// use retroachievements_client::web::types::{CommentSort, CommentTarget};
    /// use retroachievements_client::web::types::request::CommentsRequest;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("my-web-api-key")?;
    /// let request = CommentsRequest::builder()
    ///     .target(CommentTarget::Game(14402))
    ///     .sort(CommentSort::SubmittedDescending)
    ///     .build();
    ///
    /// if let Some(page) = client.comments(&request).await? {
    ///     for comment in page.results {
    ///         println!("{} at {}: {}", comment.user, comment.submitted, comment.comment_text);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn comments(&self, request: &CommentsRequest) -> Result<Option<Comments>> {
        let request = self
            .web("API_GetComments.php")
            .with(detail::comment_target(&request.target))
            .maybe(request.offset.map(detail::offset))
            .maybe(request.count.map(detail::count))
            .maybe(request.sort.map(|sort| detail::param(key::SORT, sort)));

        self.object(request).await
    }

    pub async fn recent_game_awards(
        &self,
        request: &RecentGameAwardsRequest,
    ) -> Result<Option<RecentGameAwards>> {
        let request = self
            .web("API_GetRecentGameAwards.php")
            .maybe(request.starting_date.map(detail::date))
            .maybe(request.offset.map(detail::offset))
            .maybe(request.count.map(detail::count))
            .with(detail::flags(key::KINDS, request.kinds.selected()));

        self.object(request).await
    }

    pub async fn active_claims(&self) -> Result<Vec<Claim>> {
        self.list(self.web("API_GetActiveClaims.php")).await
    }

    pub async fn achievements_earned_on_day(
        &self,
        request: &AchievementsEarnedOnDayRequest,
    ) -> Result<Vec<RecentAchievement>> {
        let request = self
            .web("API_GetAchievementsEarnedOnDay.php")
            .with(detail::username(request.username.as_str()))
            .with(detail::date(request.date));

        self.list(request).await
    }
}
