//! Request types for the RetroAchievements Web API.
//!
//! Optional fields that are `None` (or flags that are `false`) are left out of the query string
//! entirely, so the service applies its own defaults.

use bon::Builder;
use chrono::NaiveDate;

use super::{AwardKind, CommentSort, CommentTarget};

/// Request for the list of consoles.
///
/// # Example
///
/// ```
/// use retroachievements_client::web::types::request::ConsoleIdsRequest;
///
/// let request = ConsoleIdsRequest::builder()
///     .only_active(true)
///     .only_game_systems(true)
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Default, Builder)]
pub struct ConsoleIdsRequest {
    /// Only consoles the site currently accepts sets for
    #[builder(default)]
    pub only_active: bool,
    /// Exclude hubs, events and other non-game pseudo-consoles
    #[builder(default)]
    pub only_game_systems: bool,
}

#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct UserProfileRequest {
    /// Username or ULID
    pub username: String,
}

#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct UserRecentAchievementsRequest {
    pub username: String,
    /// Lookback window in minutes. The service defaults to 60.
    pub minutes: Option<u32>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct GameRequest {
    pub game_id: u64,
}

/// Request for every game on one console.
///
/// Hash lists are large; only ask for them with `with_hashes` when needed.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct GameListRequest {
    pub console_id: u32,
    #[builder(default)]
    pub only_with_achievements: bool,
    #[builder(default)]
    pub with_hashes: bool,
    pub offset: Option<u32>,
    pub count: Option<u32>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct AchievementUnlocksRequest {
    pub achievement_id: u64,
    pub offset: Option<u32>,
    pub count: Option<u32>,
}

/// Request for the comments attached to a game, an achievement or a user wall.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct CommentsRequest {
    pub target: CommentTarget,
    pub offset: Option<u32>,
    pub count: Option<u32>,
    pub sort: Option<CommentSort>,
}

/// Award kinds to filter recent game awards by.
///
/// Every selected kind is sent; when none is selected the service returns all kinds.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct AwardKinds {
    #[builder(default)]
    pub beaten_softcore: bool,
    #[builder(default)]
    pub beaten_hardcore: bool,
    #[builder(default)]
    pub completed: bool,
    #[builder(default)]
    pub mastered: bool,
}

impl AwardKinds {
    /// Returns the selected kinds in the order the service documents them.
    #[must_use]
    pub fn selected(&self) -> Vec<AwardKind> {
        [
            (self.beaten_softcore, AwardKind::BeatenSoftcore),
            (self.beaten_hardcore, AwardKind::BeatenHardcore),
            (self.completed, AwardKind::Completed),
            (self.mastered, AwardKind::Mastered),
        ]
        .into_iter()
        .filter_map(|(enabled, kind)| enabled.then_some(kind))
        .collect()
    }
}

/// Request for the site-wide feed of recent game awards.
///
/// # Example
///
/// ```
/// use retroachievements_client::web::types::request::{AwardKinds, RecentGameAwardsRequest};
///
/// let request = RecentGameAwardsRequest::builder()
///     .kinds(AwardKinds::builder().completed(true).mastered(true).build())
///     .count(10)
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct RecentGameAwardsRequest {
    /// Only awards earned on or before this day
    pub starting_date: Option<NaiveDate>,
    pub offset: Option<u32>,
    pub count: Option<u32>,
    #[builder(default)]
    pub kinds: AwardKinds,
}

#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct AchievementsEarnedOnDayRequest {
    pub username: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_kinds_selected_by_default() {
        assert!(AwardKinds::default().selected().is_empty());
    }

    #[test]
    fn every_kind_is_checked_independently() {
        let cases = [
            (
                AwardKinds::builder().beaten_softcore(true).build(),
                vec![AwardKind::BeatenSoftcore],
            ),
            (
                AwardKinds::builder().beaten_hardcore(true).build(),
                vec![AwardKind::BeatenHardcore],
            ),
            (
                AwardKinds::builder().completed(true).build(),
                vec![AwardKind::Completed],
            ),
            (
                AwardKinds::builder().mastered(true).build(),
                vec![AwardKind::Mastered],
            ),
        ];

        for (kinds, expected) in cases {
            assert_eq!(kinds.selected(), expected, "for {kinds:?}");
        }
    }

    #[test]
    fn selected_kinds_keep_documented_order() {
        let kinds = AwardKinds::builder()
            .mastered(true)
            .beaten_softcore(true)
            .completed(true)
            .build();

        assert_eq!(
            kinds.selected(),
            vec![
                AwardKind::BeatenSoftcore,
                AwardKind::Completed,
                AwardKind::Mastered,
            ]
        );
    }

    #[test]
    fn console_ids_defaults_to_no_filters() {
        let request = ConsoleIdsRequest::builder().build();

        assert!(!request.only_active);
        assert!(!request.only_game_systems);
    }
}
