//! Authorization logic.
//!
//! [`PasswordGrant`] exchanges the user's credentials for a raw OAuth
//! response, and [`TokenManager`] caches the resulting token until it expires.

pub mod clock;
#[cfg(test)]
pub(crate) mod mock;
pub mod password_grant;
pub mod token_manager;

use chrono::{DateTime, Utc};
use serde::Deserialize;

pub use self::{
    clock::{Clock, SystemClock},
    password_grant::{ClientCredentials, PasswordGrant},
    token_manager::TokenManager,
};

/// Performs the network exchange that yields a fresh token.
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    type Error: Send + Sync;

    async fn authenticate(&self) -> Result<OAuthResponse, Self::Error>;
}

/// Hands out a currently valid bearer token.
#[async_trait::async_trait]
pub trait TokenProvider: Send + Sync {
    type Error: Send + Sync;

    async fn token(&self) -> Result<OAuthToken, Self::Error>;
}

/// The token endpoint's response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OAuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
}

/// An access token that is usable while the current time is strictly before
/// `expiration`.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthToken {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: String,
    pub expiration: DateTime<Utc>,
}

impl OAuthToken {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expiration
    }
}

impl Default for OAuthToken {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            token_type: String::new(),
            refresh_token: String::new(),
            expiration: DateTime::<Utc>::MIN_UTC,
        }
    }
}

impl std::fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthToken")
            .field("token_type", &self.token_type)
            .field("expiration", &self.expiration)
            .finish_non_exhaustive()
    }
}
