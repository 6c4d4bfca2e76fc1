#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod client;
pub mod connect;
pub mod detail;
pub mod error;
pub mod request;
pub mod response;
pub(crate) mod serde_helpers;
pub mod time;
pub mod types;
pub mod web;

pub use client::{Client, Config};

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Production host for the Web API
pub const DEFAULT_HOST: &str = "https://retroachievements.org";

/// Production dispatch endpoint for connect operations
pub const DEFAULT_CONNECT_HOST: &str = "https://retroachievements.org/dorequest.php";
