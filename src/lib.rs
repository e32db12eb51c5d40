//! Typed client for the Prosper lending marketplace REST API.

pub mod auth;
pub mod client;
pub mod core;
pub mod interval;
pub mod thin;
pub mod types;
mod utils;

pub use self::{
    auth::ClientCredentials,
    client::Client,
    utils::{ServerError, DEFAULT_BASE_URL},
};
