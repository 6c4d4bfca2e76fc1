#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Not every test binary uses every helper"
)]

use httpmock::MockServer;
use retroachievements_client::{Client, Config};

pub const API_KEY: &str = "test-web-api-key";
pub const BEARER_TOKEN: &str = "test-bearer-token";

/// Path the mock server serves connect operations on.
pub const DISPATCH_PATH: &str = "/dorequest.php";

pub const USERNAME: &str = "MaxMilyin";
pub const ULID: &str = "00003EMFWR7XB8SDPEHB3K56ZQ";

pub fn create_client(server: &MockServer) -> anyhow::Result<Client> {
    let config = Config::builder()
        .host(server.base_url())
        .connect_host(server.url(DISPATCH_PATH))
        .build();

    Ok(Client::with_config(API_KEY, config)?)
}

pub fn create_client_with_bearer(server: &MockServer) -> anyhow::Result<Client> {
    let config = Config::builder()
        .host(server.base_url())
        .connect_host(server.url(DISPATCH_PATH))
        .bearer_token(BEARER_TOKEN.to_owned())
        .build();

    Ok(Client::with_config(API_KEY, config)?)
}
