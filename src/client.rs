//! The API client and its configuration.

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use url::Url;

use crate::request::{OutgoingRequest, execute};
use crate::response::{decode_list, decode_object};
use crate::{DEFAULT_CONNECT_HOST, DEFAULT_HOST, Result, detail};

/// Client configuration.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use retroachievements_client::Config;
///
/// let http_client = reqwest::Client::builder()
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// let config = Config::builder()
///     .host("https://staging.retroachievements.org")
///     .http_client(http_client)
///     .build();
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// Base host for the Web API. Defaults to `https://retroachievements.org`.
    #[builder(into, default = DEFAULT_HOST.to_owned())]
    host: String,
    /// Dispatch endpoint for connect operations. Defaults to
    /// `https://retroachievements.org/dorequest.php`.
    #[builder(into, default = DEFAULT_CONNECT_HOST.to_owned())]
    connect_host: String,
    /// Transport used for every call. Timeouts and proxies are configured here. When absent, a
    /// client with the crate's default headers is built.
    http_client: Option<ReqwestClient>,
    /// When present, every request carries `Authorization: Bearer <token>`.
    #[builder(into)]
    bearer_token: Option<SecretString>,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

/// Client for the RetroAchievements API.
///
/// The client holds only immutable configuration; every call builds its own request and response
/// and the client can be cloned and shared freely.
///
/// # Example
///
/// ```no_run
/// use retroachievements_client::Client;
/// use retroachievements_client::web::types::request::UserProfileRequest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("my-web-api-key")?;
///
/// let request = UserProfileRequest::builder().username("MaxMilyin").build();
/// if let Some(profile) = client.user_profile(&request).await? {
///     println!("{} joined {}", profile.user, profile.member_since);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: String,
    connect_host: String,
    api_key: SecretString,
    bearer_token: Option<SecretString>,
    client: ReqwestClient,
}

#[allow(
    clippy::multiple_inherent_impl,
    reason = "operations are grouped by API surface"
)]
impl Client {
    /// Creates a client for the production service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new<S: Into<String>>(api_key: S) -> Result<Client> {
        Self::with_config(api_key, Config::default())
    }

    /// Creates a client with a custom [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if either host is not a valid URL or the HTTP client fails to build.
    pub fn with_config<S: Into<String>>(api_key: S, config: Config) -> Result<Client> {
        let client = match config.http_client {
            Some(client) => client,
            None => {
                let mut headers = HeaderMap::new();

                headers.insert(
                    "User-Agent",
                    HeaderValue::from_static(concat!(
                        "retroachievements-client/",
                        env!("CARGO_PKG_VERSION")
                    )),
                );
                headers.insert("Accept", HeaderValue::from_static("application/json"));
                ReqwestClient::builder().default_headers(headers).build()?
            }
        };

        Ok(Self {
            host: normalize_host(&config.host)?,
            connect_host: normalize_host(&config.connect_host)?,
            api_key: SecretString::from(api_key.into()),
            bearer_token: config.bearer_token,
            client,
        })
    }

    /// Returns the Web API host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the connect dispatch endpoint.
    #[must_use]
    pub fn connect_host(&self) -> &str {
        &self.connect_host
    }

    /// Starts a Web API request for `/API/<name>`.
    pub(crate) fn web(&self, name: &str) -> OutgoingRequest {
        self.authenticated(OutgoingRequest::new(self.host.as_str()))
            .with(detail::path(format!("/API/{name}")))
    }

    /// Starts a request on the dispatch endpoint; the operation travels as a parameter and no
    /// path is set.
    pub(crate) fn connect(&self, operation: &'static str) -> OutgoingRequest {
        self.authenticated(OutgoingRequest::new(self.connect_host.as_str()))
            .with(detail::operation(operation))
    }

    fn authenticated(&self, request: OutgoingRequest) -> OutgoingRequest {
        request
            .with(detail::method(Method::GET))
            .with(detail::api_key(&self.api_key))
            .maybe(self.bearer_token.as_ref().map(detail::bearer_token))
    }

    pub(crate) async fn object<T: DeserializeOwned>(
        &self,
        request: OutgoingRequest,
    ) -> Result<Option<T>> {
        let response = execute(&self.client, request).await?;
        decode_object(&response)
    }

    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        request: OutgoingRequest,
    ) -> Result<Vec<T>> {
        let response = execute(&self.client, request).await?;
        decode_list(&response)
    }
}

/// Validates `host` and strips any trailing `/` so paths can be appended verbatim.
fn normalize_host(host: &str) -> Result<String> {
    Url::parse(host)?;
    Ok(host.trim_end_matches('/').to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    #[test]
    fn default_config_targets_production() {
        let client = Client::new("key").unwrap();

        assert_eq!(client.host(), "https://retroachievements.org");
        assert_eq!(
            client.connect_host(),
            "https://retroachievements.org/dorequest.php"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = Config::builder().host("http://localhost:8080/").build();
        let client = Client::with_config("key", config).unwrap();

        assert_eq!(client.host(), "http://localhost:8080");
    }

    #[test]
    fn invalid_host_should_fail() {
        let config = Config::builder().host("not a url").build();
        let err = Client::with_config("key", config).unwrap_err();

        assert_eq!(err.kind(), Kind::Internal);
    }

    #[test]
    fn web_request_carries_path_and_token() {
        let client = Client::new("key").unwrap();
        let request = client.web("API_GetGame.php");

        assert_eq!(request.path(), Some("/API/API_GetGame.php"));
        assert_eq!(request.parameter("y"), Some("key"));
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn connect_request_has_no_path() {
        let client = Client::new("key").unwrap();
        let request = client.connect("gameid");

        assert_eq!(request.path(), None);
        assert_eq!(request.url(), "https://retroachievements.org/dorequest.php");
        assert_eq!(request.parameter("r"), Some("gameid"));
        assert_eq!(request.parameter("y"), Some("key"));
    }

    #[test]
    fn bearer_token_is_attached_to_every_request() {
        let config = Config::builder()
            .bearer_token("session".to_owned())
            .build();
        let client = Client::with_config("key", config).unwrap();

        assert_eq!(
            client.web("API_GetGame.php").header("Authorization"),
            Some("Bearer session")
        );
        assert_eq!(
            client.connect("gameid").header("Authorization"),
            Some("Bearer session")
        );
    }

    #[test]
    fn debug_does_not_expose_secrets() {
        let config = Config::builder()
            .bearer_token("my_super_secret_bearer".to_owned())
            .build();
        let client = Client::with_config("my_super_secret_key", config).unwrap();

        let debug_output = format!("{client:?}");

        assert!(
            !debug_output.contains("my_super_secret"),
            "Debug output should NOT contain secrets. Got: {debug_output}"
        );
    }
}
