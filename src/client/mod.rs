//! The typed Prosper client.
//!
//! [`Client`] sits on top of a [`RawApi`] and converts its minimally parsed
//! responses into the values in [`crate::types`]. Any wire value that does
//! not map onto a domain value fails the whole call with a [`ParseError`].

mod account;
#[cfg(test)]
pub(crate) mod mock;
mod notes;
mod orders;
mod parse_time;
mod search;

pub use self::search::{SearchFilter, SearchParams};
pub use crate::types::ParseError;
use crate::{
    auth::{ClientCredentials, PasswordGrant, TokenManager},
    thin::{self, RawApi},
    utils::DEFAULT_BASE_URL,
};

#[derive(Debug, thiserror::Error)]
pub enum Error<ApiError> {
    #[error("api: {0}")]
    Api(#[source] ApiError),
    #[error("parse: {0}")]
    Parse(#[from] ParseError),
}

/// The thin client as wired up by [`Client::new`].
pub type DefaultRawApi = thin::Client<TokenManager<PasswordGrant>>;

pub struct Client<R = DefaultRawApi> {
    raw: R,
}

impl Client {
    /// A client for the production Prosper API that signs in with the given
    /// credentials on first use.
    pub fn new(credentials: ClientCredentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Like [`Client::new`], with both the token endpoint and the REST
    /// endpoints rooted at `base_url`.
    pub fn with_base_url(credentials: ClientCredentials, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let http = reqwest::Client::new();
        let authenticator =
            PasswordGrant::new(http.clone(), credentials).with_base_url(base_url.clone());
        let raw = thin::Client::new(http, TokenManager::new(authenticator)).with_base_url(base_url);
        Self::from_raw(raw)
    }
}

impl<R> Client<R>
where
    R: RawApi,
{
    pub fn from_raw(raw: R) -> Self {
        Self { raw }
    }
}
