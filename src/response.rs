//! Classification and decoding of raw responses.
//!
//! Every call ends in one of two entry points, [`decode_object`] or [`decode_list`]. Both look
//! at the status code alone, checked in the order `200`, `404`, `401`, anything else:
//!
//! | status | object | list |
//! |--------|--------|------|
//! | `200` | JSON object, or `None` when the body is `[]` | JSON array |
//! | `404` | `None` | empty list |
//! | `401` | [`Kind::Authorization`] | [`Kind::Authorization`] |
//! | other | [`Kind::Status`] | [`Kind::Status`] |
//!
//! [`Kind::Authorization`]: crate::error::Kind::Authorization
//! [`Kind::Status`]: crate::error::Kind::Status

use std::any::type_name;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;
use crate::error::Error;
use crate::serde_helpers::deserialize_with_warnings;

/// Status code and fully read body of one call.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
    /// Path or dispatched operation the response belongs to, for error context
    pub endpoint: String,
}

impl RawResponse {
    pub fn new<B: Into<Bytes>, S: Into<String>>(status: StatusCode, body: B, endpoint: S) -> Self {
        Self {
            status,
            body: body.into(),
            endpoint: endpoint.into(),
        }
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The service renders "nothing found" as an empty array, even for single objects.
    fn is_empty_array(&self) -> bool {
        self.body.trim_ascii() == b"[]"
    }
}

/// The decode mode a response was read in.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    Object,
    List,
}

/// The service's JSON error shape.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

impl ErrorEnvelope {
    /// Renders every contained error as `[status] title`, comma separated.
    #[must_use]
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|error| format!("[{}] {}", error.status, error.title))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub status: u16,
    pub code: String,
    pub title: String,
}

/// Decodes `response` as a single `T`.
///
/// Returns `Ok(None)` for `404` and for a `200` whose body is an empty array.
pub fn decode_object<T: DeserializeOwned>(response: &RawResponse) -> Result<Option<T>> {
    match response.status {
        StatusCode::OK if response.is_empty_array() => Ok(None),
        StatusCode::OK => decode_body(response, Shape::Object).map(Some),
        StatusCode::NOT_FOUND => {
            #[cfg(feature = "tracing")]
            tracing::debug!(endpoint = %response.endpoint, "API resource not found");
            Ok(None)
        }
        _ => Err(rejection(response)),
    }
}

/// Decodes `response` as a list of `T`.
///
/// Returns an empty list for `404`.
pub fn decode_list<T: DeserializeOwned>(response: &RawResponse) -> Result<Vec<T>> {
    match response.status {
        StatusCode::OK => decode_body(response, Shape::List),
        StatusCode::NOT_FOUND => {
            #[cfg(feature = "tracing")]
            tracing::debug!(endpoint = %response.endpoint, "API resource not found");
            Ok(Vec::new())
        }
        _ => Err(rejection(response)),
    }
}

fn decode_body<T: DeserializeOwned>(response: &RawResponse, shape: Shape) -> Result<T> {
    let value: Value = serde_json::from_slice(&response.body)
        .map_err(|e| Error::decode(shape, type_name::<T>(), e))?;

    deserialize_with_warnings(value).map_err(|e| Error::decode(shape, type_name::<T>(), e))
}

fn rejection(response: &RawResponse) -> Error {
    let body = response.text();

    #[cfg(feature = "tracing")]
    tracing::warn!(
        status = %response.status,
        endpoint = %response.endpoint,
        message = %body,
        "API request failed"
    );

    if response.status == StatusCode::UNAUTHORIZED {
        let envelope = serde_json::from_slice::<ErrorEnvelope>(&response.body).ok();
        Error::authorization(envelope, body)
    } else {
        Error::unknown_status(response.status, response.endpoint.clone(), body)
    }
}
