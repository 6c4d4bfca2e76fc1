use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;

use crate::response::{ErrorEnvelope, Shape};

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Error building the request URL, performing the call or reading the response body
    Transport,
    /// Error related to a response body that does not match the expected JSON shape
    Decode,
    /// The service answered `401 Unauthorized`
    Authorization,
    /// The service answered with a status other than 200, 404 or 401
    Status,
    /// Invalid client configuration or internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn transport<S: StdError + Send + Sync + 'static>(
        method: Method,
        endpoint: String,
        source: S,
    ) -> Self {
        Transport {
            method,
            endpoint,
            source: Box::new(source),
        }
        .into()
    }

    #[must_use]
    pub fn decode(shape: Shape, type_name: &'static str, source: serde_json::Error) -> Self {
        Decode {
            shape,
            type_name,
            source,
        }
        .into()
    }

    pub fn authorization<S: Into<String>>(envelope: Option<ErrorEnvelope>, body: S) -> Self {
        Authorization {
            envelope,
            body: body.into(),
        }
        .into()
    }

    pub fn unknown_status<S: Into<String>>(
        status_code: StatusCode,
        endpoint: String,
        body: S,
    ) -> Self {
        UnknownStatus {
            status_code,
            endpoint,
            body: body.into(),
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// The request never produced a complete response: the URL could not be built, the call
/// failed, or the body could not be read.
#[non_exhaustive]
#[derive(Debug)]
pub struct Transport {
    pub method: Method,
    pub endpoint: String,
    pub source: Box<dyn StdError + Send + Sync + 'static>,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calling endpoint {} {}: {}",
            self.method, self.endpoint, self.source
        )
    }
}

impl StdError for Transport {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Decode {
    pub shape: Shape,
    pub type_name: &'static str,
    pub source: serde_json::Error,
}

impl fmt::Display for Decode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parsing response {} into {}: {}",
            self.shape, self.type_name, self.source
        )
    }
}

impl StdError for Decode {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

/// The service rejected the call with `401 Unauthorized`.
///
/// `envelope` is present when the body decoded as the service's error envelope, otherwise
/// only the raw `body` is available.
#[non_exhaustive]
#[derive(Debug)]
pub struct Authorization {
    pub envelope: Option<ErrorEnvelope>,
    pub body: String,
}

impl fmt::Display for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.envelope {
            Some(envelope) if !envelope.errors.is_empty() => {
                write!(f, "unauthorized: error responses: {}", envelope.summary())
            }
            Some(envelope) => write!(f, "unauthorized: {}", envelope.message),
            None => write!(f, "unauthorized: {}", self.body),
        }
    }
}

impl StdError for Authorization {}

#[non_exhaustive]
#[derive(Debug)]
pub struct UnknownStatus {
    pub status_code: StatusCode,
    pub endpoint: String,
    pub body: String,
}

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected status {} calling {}: {}",
            self.status_code, self.endpoint, self.body
        )
    }
}

impl StdError for UnknownStatus {}

/// Text that could not be parsed with one of the service's timestamp layouts.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct TimeFormat {
    pub input: String,
    /// Reference rendering of the expected layout, e.g. `2006-01-02 15:04:05`
    pub layout: &'static str,
    pub source: chrono::ParseError,
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parsing time \"{}\" as \"{}\": {}",
            self.input, self.layout, self.source
        )
    }
}

impl StdError for TimeFormat {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<Transport> for Error {
    fn from(err: Transport) -> Self {
        Error::with_source(Kind::Transport, err)
    }
}

impl From<Decode> for Error {
    fn from(err: Decode) -> Self {
        Error::with_source(Kind::Decode, err)
    }
}

impl From<Authorization> for Error {
    fn from(err: Authorization) -> Self {
        Error::with_source(Kind::Authorization, err)
    }
}

impl From<UnknownStatus> for Error {
    fn from(err: UnknownStatus) -> Self {
        Error::with_source(Kind::Status, err)
    }
}

impl From<TimeFormat> for Error {
    fn from(err: TimeFormat) -> Self {
        Error::with_source(Kind::Decode, err)
    }
}
