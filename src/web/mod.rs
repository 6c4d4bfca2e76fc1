//! RetroAchievements Web API operations and types.
//!
//! Every operation issues one `GET` under the `/API/` namespace of the configured host, with the
//! Web API key sent as the `y` query parameter.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `API_GetConsoleIDs.php` | [`console_ids`](crate::Client::console_ids) | List consoles |
//! | `API_GetUserProfile.php` | [`user_profile`](crate::Client::user_profile) | Get a user's profile |
//! | `API_GetUserRecentAchievements.php` | [`user_recent_achievements`](crate::Client::user_recent_achievements) | Achievements a user unlocked recently |
//! | `API_GetGame.php` | [`game`](crate::Client::game) | Get a game summary |
//! | `API_GetGameList.php` | [`game_list`](crate::Client::game_list) | List the games of a console |
//! | `API_GetAchievementUnlocks.php` | [`achievement_unlocks`](crate::Client::achievement_unlocks) | Users who unlocked an achievement |
//! | `API_GetComments.php` | [`comments`](crate::Client::comments) | Comments on a game, achievement or user wall |
//! | `API_GetRecentGameAwards.php` | [`recent_game_awards`](crate::Client::recent_game_awards) | Site-wide award feed |
//! | `API_GetActiveClaims.php` | [`active_claims`](crate::Client::active_claims) | Open set-development claims |
//! | `API_GetAchievementsEarnedOnDay.php` | [`achievements_earned_on_day`](crate::Client::achievements_earned_on_day) | Achievements a user unlocked on one day |
//!
//! Pagination is exposed as plain `offset`/`count` fields on the request types and is never
//! walked automatically.
//!
//! # Example
//!
//! ```no_run
//! use retroachievements_client::Client;
//! use retroachievements_client::web::types::request::GameListRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("my-web-api-key")?;
//!
//! let request = GameListRequest::builder()
//!     .console_id(1)
//!     .only_with_achievements(true)
//!     .build();
//!
//! for game in client.game_list(&request).await? {
//!     println!("{} ({} achievements)", game.title, game.num_achievements);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod types;
