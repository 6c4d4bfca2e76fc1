//! Request details: deferred mutations applied in order to an [`OutgoingRequest`].
//!
//! Every function here returns a closure that sets one piece of the outgoing call. Endpoint
//! methods chain them with [`OutgoingRequest::with`] and [`OutgoingRequest::maybe`], so they
//! never touch the request structure directly. Details that write the same key overwrite each
//! other; the one applied last wins.
//!
//! ```
//! use retroachievements_client::detail;
//! use retroachievements_client::request::OutgoingRequest;
//!
//! let request = OutgoingRequest::new("https://retroachievements.org")
//!     .with(detail::token("a"))
//!     .with(detail::token("b"));
//!
//! assert_eq!(request.parameter("y"), Some("b"));
//! ```
//!
//! No detail validates its input; ranges and identifiers are passed through as given.

use std::fmt::Display;

use reqwest::Method;
use secrecy::{ExposeSecret as _, SecretString};

use crate::request::OutgoingRequest;
use crate::web::types::CommentTarget;

/// Header carrying the bearer token.
pub const AUTHORIZATION: &str = "Authorization";

/// Query parameter names understood by the service.
///
/// The service reuses single letters across operations, so several names share a value.
pub mod key {
    /// Static API token
    pub const TOKEN: &str = "y";
    /// Username or ULID
    pub const USERNAME: &str = "u";
    /// Identifier of the primary resource
    pub const ID: &str = "i";
    pub const COUNT: &str = "c";
    pub const OFFSET: &str = "o";
    /// Calendar date, `YYYY-MM-DD`
    pub const DATE: &str = "d";
    /// Comment target kind discriminant
    pub const TYPE: &str = "t";
    pub const ACHIEVEMENT: &str = "a";
    /// Only active consoles
    pub const ACTIVE: &str = "a";
    /// Only game systems
    pub const GAME_SYSTEMS: &str = "g";
    /// Only games with achievements
    pub const FILTER: &str = "f";
    /// Comma-joined list of kinds
    pub const KINDS: &str = "k";
    /// Lookback window in minutes
    pub const MINUTES: &str = "m";
    pub const HASHES: &str = "h";
    /// Operation name on the dispatch endpoint
    pub const OPERATION: &str = "r";
    /// ROM hash on the dispatch endpoint
    pub const HASH: &str = "m";
    /// Console identifier on the dispatch endpoint
    pub const CONSOLE: &str = "c";
    pub const SORT: &str = "sort";
}

pub fn method(method: Method) -> impl FnOnce(&mut OutgoingRequest) {
    move |request| request.set_method(method)
}

pub fn path<S: Into<String>>(path: S) -> impl FnOnce(&mut OutgoingRequest) {
    let path = path.into();
    move |request| request.set_path(path)
}

/// Sets an arbitrary query parameter.
pub fn param<V: Display>(key: &'static str, value: V) -> impl FnOnce(&mut OutgoingRequest) {
    let value = value.to_string();
    move |request| request.set_parameter(key, value)
}

/// Sets a `1`/`0` query parameter.
pub fn flag(key: &'static str, enabled: bool) -> impl FnOnce(&mut OutgoingRequest) {
    param(key, u8::from(enabled))
}

/// Sets `key` to the comma-joined `values`, or leaves it unset when there are none.
pub fn flags<I, V>(key: &'static str, values: I) -> impl FnOnce(&mut OutgoingRequest)
where
    I: IntoIterator<Item = V>,
    V: Display,
{
    let joined = values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",");
    move |request| {
        if !joined.is_empty() {
            request.set_parameter(key, joined);
        }
    }
}

pub fn header<N: Into<String>, V: Into<String>>(
    name: N,
    value: V,
) -> impl FnOnce(&mut OutgoingRequest) {
    let name = name.into();
    let value = value.into();
    move |request| request.set_header(name, value)
}

/// Sets the static API token parameter.
pub fn token<S: Into<String>>(token: S) -> impl FnOnce(&mut OutgoingRequest) {
    let token = token.into();
    move |request| request.set_parameter(key::TOKEN, token)
}

pub(crate) fn api_key(api_key: &SecretString) -> impl FnOnce(&mut OutgoingRequest) {
    token(api_key.expose_secret())
}

/// Sets `Authorization: Bearer <token>`.
pub fn bearer<S: Display>(token: S) -> impl FnOnce(&mut OutgoingRequest) {
    header(AUTHORIZATION, format!("Bearer {token}"))
}

pub(crate) fn bearer_token(token: &SecretString) -> impl FnOnce(&mut OutgoingRequest) {
    bearer(token.expose_secret())
}

pub fn username<S: Into<String>>(username: S) -> impl FnOnce(&mut OutgoingRequest) {
    let username = username.into();
    move |request| request.set_parameter(key::USERNAME, username)
}

pub fn id<V: Display>(id: V) -> impl FnOnce(&mut OutgoingRequest) {
    param(key::ID, id)
}

pub fn count(count: u32) -> impl FnOnce(&mut OutgoingRequest) {
    param(key::COUNT, count)
}

pub fn offset(offset: u32) -> impl FnOnce(&mut OutgoingRequest) {
    param(key::OFFSET, offset)
}

pub fn achievement_id(id: u64) -> impl FnOnce(&mut OutgoingRequest) {
    param(key::ACHIEVEMENT, id)
}

pub fn minutes(minutes: u32) -> impl FnOnce(&mut OutgoingRequest) {
    param(key::MINUTES, minutes)
}

pub fn date(date: chrono::NaiveDate) -> impl FnOnce(&mut OutgoingRequest) {
    param(key::DATE, date.format("%Y-%m-%d"))
}

/// Names the operation on the dispatch endpoint.
pub fn operation(operation: &'static str) -> impl FnOnce(&mut OutgoingRequest) {
    param(key::OPERATION, operation)
}

/// Sets the comment target: the kind discriminant under `t` and the kind-specific
/// identifier under `i`.
pub fn comment_target(target: &CommentTarget) -> impl FnOnce(&mut OutgoingRequest) {
    let kind = target.kind() as u8;
    let identifier = match target {
        CommentTarget::Game(game_id) => game_id.to_string(),
        CommentTarget::Achievement(achievement_id) => achievement_id.to_string(),
        CommentTarget::User(username) => username.clone(),
    };

    move |request| {
        request.set_parameter(key::TYPE, kind.to_string());
        request.set_parameter(key::ID, identifier);
    }
}
