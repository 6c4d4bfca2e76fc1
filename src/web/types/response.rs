//! Response types for the RetroAchievements Web API.
//!
//! Field names follow the service's `PascalCase` JSON; acronyms (`ID`, `ULID`, `URL`) are renamed
//! explicitly. Integer-coded booleans are decoded with [`BoolFromInt`].

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::{BoolFromInt, serde_as};

use super::{AchievementType, AwardKind, ClaimSetType, ClaimStatus, ClaimType};
use crate::time::{DateTime, LongMonthDate, OffsetDateTime};

/// One console from `API_GetConsoleIDs.php`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct Console {
    #[serde(rename = "ID")]
    pub id: u32,
    pub name: String,
    #[serde(rename = "IconURL")]
    pub icon_url: String,
    pub active: bool,
    pub is_game_system: bool,
}

/// A user's public profile.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct UserProfile {
    pub user: String,
    #[serde(rename = "ULID")]
    pub ulid: String,
    pub user_pic: String,
    pub member_since: DateTime,
    #[serde(default)]
    pub rich_presence_msg: Option<String>,
    #[serde(rename = "LastGameID", default)]
    pub last_game_id: Option<u64>,
    pub contrib_count: u32,
    pub contrib_yield: u32,
    pub total_points: u32,
    pub total_softcore_points: u32,
    pub total_true_points: u32,
    pub permissions: i32,
    #[serde_as(as = "BoolFromInt")]
    pub untracked: bool,
    #[serde(rename = "ID")]
    pub id: u64,
    pub user_wall_active: bool,
    #[serde(default)]
    pub motto: String,
}

/// An achievement a user unlocked, as listed by the recent-unlocks and per-day endpoints.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct RecentAchievement {
    pub date: DateTime,
    #[serde_as(as = "BoolFromInt")]
    pub hardcore_mode: bool,
    #[serde(rename = "AchievementID")]
    pub achievement_id: u64,
    pub title: String,
    pub description: String,
    pub badge_name: String,
    pub points: u32,
    #[serde(default)]
    pub true_ratio: u32,
    #[serde(rename = "Type", default)]
    pub achievement_type: Option<AchievementType>,
    pub author: String,
    pub game_title: String,
    pub game_icon: String,
    #[serde(rename = "GameID")]
    pub game_id: u64,
    pub console_name: String,
    #[serde(rename = "BadgeURL")]
    pub badge_url: String,
    #[serde(rename = "GameURL")]
    pub game_url: String,
}

/// Summary of one game.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct Game {
    pub title: String,
    #[serde(rename = "ConsoleID")]
    pub console_id: u32,
    #[serde(rename = "ForumTopicID", default)]
    pub forum_topic_id: Option<u64>,
    #[serde(default)]
    pub flags: Option<u32>,
    pub image_icon: String,
    pub image_title: String,
    pub image_ingame: String,
    pub image_box_art: String,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub released: Option<LongMonthDate>,
    pub console_name: String,
}

/// One game from a console's game list.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct GameListEntry {
    pub title: String,
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "ConsoleID")]
    pub console_id: u32,
    pub console_name: String,
    pub image_icon: String,
    pub num_achievements: u32,
    pub num_leaderboards: u32,
    pub points: u32,
    #[serde(default)]
    pub date_modified: Option<DateTime>,
    #[serde(rename = "ForumTopicID", default)]
    pub forum_topic_id: Option<u64>,
    /// Present only when hashes were requested
    #[serde(default)]
    #[builder(default)]
    pub hashes: Vec<String>,
}

/// Users who unlocked one achievement, with the achievement's context.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct AchievementUnlocks {
    pub achievement: UnlockedAchievement,
    pub console: ConsoleRef,
    pub game: GameRef,
    pub unlocks_count: u32,
    pub unlocks_hardcore_count: u32,
    pub total_players: u32,
    #[builder(default)]
    pub unlocks: Vec<Unlock>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct UnlockedAchievement {
    #[serde(rename = "ID")]
    pub id: u64,
    pub title: String,
    pub description: String,
    pub points: u32,
    #[serde(default)]
    pub true_ratio: u32,
    pub author: String,
    pub date_created: DateTime,
    pub date_modified: DateTime,
    #[serde(rename = "Type", default)]
    pub achievement_type: Option<AchievementType>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct ConsoleRef {
    #[serde(rename = "ID")]
    pub id: u32,
    pub title: String,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct GameRef {
    #[serde(rename = "ID")]
    pub id: u64,
    pub title: String,
}

#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct Unlock {
    pub user: String,
    #[serde(rename = "ULID")]
    pub ulid: String,
    #[serde(rename = "RAPoints")]
    pub ra_points: u32,
    #[serde(rename = "RASoftcorePoints")]
    pub ra_softcore_points: u32,
    pub date_awarded: DateTime,
    #[serde_as(as = "BoolFromInt")]
    pub hardcore_mode: bool,
}

/// One page of comments.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct Comments {
    pub count: u32,
    pub total: u32,
    #[builder(default)]
    pub results: Vec<Comment>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct Comment {
    pub user: String,
    #[serde(rename = "ULID")]
    pub ulid: String,
    pub submitted: OffsetDateTime,
    pub comment_text: String,
}

/// One page of the site-wide award feed.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct RecentGameAwards {
    pub count: u32,
    pub total: u32,
    #[builder(default)]
    pub results: Vec<GameAward>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct GameAward {
    pub user: String,
    #[serde(rename = "ULID")]
    pub ulid: String,
    pub award_kind: AwardKind,
    pub award_date: OffsetDateTime,
    #[serde(rename = "GameID")]
    pub game_id: u64,
    pub game_title: String,
    #[serde(rename = "ConsoleID")]
    pub console_id: u32,
    pub console_name: String,
}

/// An open set-development claim.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct Claim {
    #[serde(rename = "ID")]
    pub id: u64,
    pub user: String,
    #[serde(rename = "ULID")]
    pub ulid: String,
    #[serde(rename = "GameID")]
    pub game_id: u64,
    pub game_title: String,
    pub game_icon: String,
    #[serde(rename = "ConsoleID")]
    pub console_id: u32,
    pub console_name: String,
    pub claim_type: ClaimType,
    pub set_type: ClaimSetType,
    pub status: ClaimStatus,
    /// Number of times the claim was extended
    pub extension: u32,
    #[serde_as(as = "BoolFromInt")]
    pub special: bool,
    pub created: DateTime,
    pub done_time: DateTime,
    pub updated: DateTime,
    #[serde_as(as = "BoolFromInt")]
    pub user_is_jr_dev: bool,
    pub minutes_left: i64,
}
