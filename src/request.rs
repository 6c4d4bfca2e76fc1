//! Outgoing request description and the transport call that executes it.
//!
//! An [`OutgoingRequest`] starts from a base host and is shaped by applying
//! [details](crate::detail) in order. Each call builds a fresh request, hands it to
//! [`execute`], and drops it once the [`RawResponse`] is back.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as ReqwestClient, Method};
use url::Url;

use crate::Result;
use crate::detail::{AUTHORIZATION, key};
use crate::error::Error;
use crate::response::RawResponse;

/// One fully-specified API call before transmission.
///
/// Parameters and headers are keyed maps, so applying two details that target the same key
/// keeps whichever was applied last.
#[derive(Clone)]
pub struct OutgoingRequest {
    host: String,
    path: Option<String>,
    method: Method,
    parameters: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
}

impl OutgoingRequest {
    /// Starts a `GET` request against `host` with no path, parameters or headers.
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            host: host.into(),
            path: None,
            method: Method::GET,
            parameters: BTreeMap::new(),
            headers: BTreeMap::new(),
        }
    }

    /// Applies `detail` to this request.
    ///
    /// # Example
    ///
    /// ```
    /// use retroachievements_client::detail;
    /// use retroachievements_client::request::OutgoingRequest;
    ///
    /// let request = OutgoingRequest::new("https://retroachievements.org")
    ///     .with(detail::path("/API/API_GetGame.php"))
    ///     .with(detail::id(1))
    ///     .with(detail::count(10));
    ///
    /// assert_eq!(request.parameter("i"), Some("1"));
    /// assert_eq!(request.url(), "https://retroachievements.org/API/API_GetGame.php");
    /// ```
    #[must_use]
    pub fn with<D: FnOnce(&mut Self)>(mut self, detail: D) -> Self {
        detail(&mut self);
        self
    }

    /// Applies `detail` when present, leaving the request untouched otherwise.
    #[must_use]
    pub fn maybe<D: FnOnce(&mut Self)>(self, detail: Option<D>) -> Self {
        match detail {
            Some(detail) => self.with(detail),
            None => self,
        }
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub fn set_path<S: Into<String>>(&mut self, path: S) {
        self.path = Some(path.into());
    }

    pub fn set_parameter<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.parameters.insert(key.into(), value.into());
    }

    pub fn set_header<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.headers.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// The target URL without query string: host and path when a path was set, the host
    /// alone otherwise (the dispatch endpoint).
    #[must_use]
    pub fn url(&self) -> String {
        match &self.path {
            Some(path) => format!("{}{path}", self.host),
            None => self.host.clone(),
        }
    }

    /// Short name of the call for logs and error context: the path, or the dispatched
    /// operation when no path was set.
    #[must_use]
    pub fn endpoint(&self) -> String {
        match (&self.path, self.parameter(key::OPERATION)) {
            (Some(path), _) => path.clone(),
            (None, Some(operation)) => format!("{}?{}={operation}", self.host, key::OPERATION),
            (None, None) => self.host.clone(),
        }
    }

    fn to_url(&self) -> std::result::Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.url())?;
        if !self.parameters.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.parameters);
        }
        Ok(url)
    }

    fn to_header_map(&self) -> Result<HeaderMap> {
        let invalid = |e: &dyn fmt::Display| {
            Error::transport(
                self.method.clone(),
                self.endpoint(),
                InvalidHeader(e.to_string()),
            )
        };

        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(&e))?;
            let value = HeaderValue::from_str(value).map_err(|e| invalid(&e))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

impl fmt::Debug for OutgoingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |(name, value): (&String, &String)| {
            let secret = name == key::TOKEN || name.eq_ignore_ascii_case(AUTHORIZATION);
            (name.clone(), if secret { "[REDACTED]".to_owned() } else { value.clone() })
        };

        f.debug_struct("OutgoingRequest")
            .field("host", &self.host)
            .field("path", &self.path)
            .field("method", &self.method)
            .field(
                "parameters",
                &self.parameters.iter().map(redact).collect::<BTreeMap<_, _>>(),
            )
            .field(
                "headers",
                &self.headers.iter().map(redact).collect::<BTreeMap<_, _>>(),
            )
            .finish()
    }
}

/// Performs exactly one round trip for `request` and returns the status code together with the
/// fully read body.
///
/// Query parameters are URL-encoded; headers are sent verbatim. Any failure while building the
/// URL or headers, sending the call or reading the body is reported as
/// [`Kind::Transport`](crate::error::Kind::Transport).
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            endpoint = %request.endpoint(),
            status_code
        )
    )
)]
pub async fn execute(client: &ReqwestClient, request: OutgoingRequest) -> Result<RawResponse> {
    let method = request.method.clone();
    let endpoint = request.endpoint();

    let url = request
        .to_url()
        .map_err(|e| Error::transport(method.clone(), endpoint.clone(), e))?;
    let headers = request.to_header_map()?;

    let response = client
        .request(method.clone(), url)
        .headers(headers)
        .send()
        .await
        // The URL carries the API token
        .map_err(|e| Error::transport(method.clone(), endpoint.clone(), e.without_url()))?;
    let status = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status.as_u16());

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::transport(method, endpoint.clone(), e.without_url()))?;

    Ok(RawResponse {
        status,
        body,
        endpoint,
    })
}

#[derive(Debug)]
struct InvalidHeader(String);

impl fmt::Display for InvalidHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid header: {}", self.0)
    }
}

impl std::error::Error for InvalidHeader {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail;

    const HOST: &str = "https://retroachievements.org";

    #[test]
    fn new_request_is_a_bare_get() {
        let request = OutgoingRequest::new(HOST);

        assert_eq!(*request.method(), Method::GET);
        assert_eq!(request.path(), None);
        assert!(request.parameters().is_empty());
        assert!(request.headers().is_empty());
    }

    #[test]
    fn url_joins_host_and_path() {
        let request = OutgoingRequest::new(HOST).with(detail::path("/API/API_GetConsoleIDs.php"));

        assert_eq!(
            request.url(),
            "https://retroachievements.org/API/API_GetConsoleIDs.php"
        );
        assert_eq!(request.endpoint(), "/API/API_GetConsoleIDs.php");
    }

    #[test]
    fn url_without_path_uses_host_alone() {
        let request = OutgoingRequest::new("https://retroachievements.org/dorequest.php")
            .with(detail::operation("gameid"));

        assert_eq!(request.url(), "https://retroachievements.org/dorequest.php");
        assert_eq!(
            request.endpoint(),
            "https://retroachievements.org/dorequest.php?r=gameid"
        );
    }

    #[test]
    fn maybe_skips_absent_details() {
        let request = OutgoingRequest::new(HOST)
            .maybe(Some(10).map(detail::count))
            .maybe(None::<u32>.map(detail::offset));

        assert_eq!(request.parameter("c"), Some("10"));
        assert_eq!(request.parameter("o"), None);
    }

    #[test]
    fn query_string_is_url_encoded() {
        let request = OutgoingRequest::new(HOST)
            .with(detail::path("/API/API_GetUserProfile.php"))
            .with(detail::username("Some User&Co"));

        let url = request.to_url().unwrap();

        assert_eq!(url.query(), Some("u=Some+User%26Co"));
    }

    #[test]
    fn invalid_header_is_rejected() {
        let request = OutgoingRequest::new(HOST).with(detail::header("X-Bad", "line\nbreak"));

        let err = request.to_header_map().unwrap_err();

        assert_eq!(err.kind(), crate::error::Kind::Transport);
    }

    #[test]
    fn debug_does_not_expose_secrets() {
        let request = OutgoingRequest::new(HOST)
            .with(detail::token("my_super_secret_token"))
            .with(detail::bearer("my_super_secret_bearer"));

        let debug_output = format!("{request:?}");

        assert!(
            !debug_output.contains("my_super_secret"),
            "Debug output should NOT contain secrets. Got: {debug_output}"
        );
    }
}
