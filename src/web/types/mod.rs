//! Types for the RetroAchievements Web API.
//!
//! - **Common types**: enums shared by requests and responses, and the polymorphic
//!   [`CommentTarget`].
//!
//! - **Request types**: builder-pattern structs for each operation
//!   (e.g. [`request::GameListRequest`], [`request::CommentsRequest`]).
//!
//! - **Response types**: structs mirroring the JSON payloads
//!   (e.g. [`response::UserProfile`], [`response::Game`]).
//!
//! # Request Building
//!
//! All request types use the builder pattern via the [`bon`](https://docs.rs/bon) crate:
//!
//! ```
//! use retroachievements_client::web::types::CommentTarget;
//! use retroachievements_client::web::types::request::{CommentsRequest, GameListRequest};
//!
//! let games = GameListRequest::builder()
//!     .console_id(1)
//!     .only_with_achievements(true)
//!     .build();
//!
//! let comments = CommentsRequest::builder()
//!     .target(CommentTarget::User("MaxMilyin".to_owned()))
//!     .count(25)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

pub mod request;
pub mod response;

/// What a comment thread is attached to.
///
/// Each variant carries the identifier it contributes to the request; the
/// [kind](CommentTarget::kind) travels alongside it as a discriminant.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    /// Comments on a game page, by game ID
    Game(u64),
    /// Comments on an achievement page, by achievement ID
    Achievement(u64),
    /// Comments on a user wall, by username or ULID
    User(String),
}

impl CommentTarget {
    #[must_use]
    pub fn kind(&self) -> CommentKind {
        match self {
            CommentTarget::Game(_) => CommentKind::Game,
            CommentTarget::Achievement(_) => CommentKind::Achievement,
            CommentTarget::User(_) => CommentKind::User,
        }
    }
}

/// Discriminant the service uses for [`CommentTarget`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum CommentKind {
    Game = 1,
    Achievement = 2,
    User = 3,
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
pub enum CommentSort {
    /// Oldest first
    #[serde(rename = "submitted")]
    #[strum(serialize = "submitted")]
    Submitted,
    /// Newest first
    #[serde(rename = "-submitted")]
    #[strum(serialize = "-submitted")]
    SubmittedDescending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[non_exhaustive]
pub enum AwardKind {
    BeatenSoftcore,
    BeatenHardcore,
    Completed,
    Mastered,
    /// Unknown award kind from the API (captures the raw value for debugging).
    #[serde(untagged)]
    #[strum(to_string = "{0}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum AchievementType {
    Progression,
    WinCondition,
    Missable,
    /// Unknown achievement type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    #[strum(to_string = "{0}")]
    Unknown(String),
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ClaimType {
    Primary = 0,
    Collaboration = 1,
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ClaimSetType {
    NewSet = 0,
    Revision = 1,
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ClaimStatus {
    Active = 0,
    Complete = 1,
    Dropped = 2,
    InReview = 3,
}
