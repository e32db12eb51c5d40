use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{Authenticator, Clock, OAuthResponse, OAuthToken, SystemClock, TokenProvider};

/// Caches the OAuth token issued by an [`Authenticator`] and re-authenticates
/// once it expires.
///
/// The validity check and the refresh happen under one lock, so callers that
/// arrive while a refresh is in flight wait for it instead of starting their
/// own.
pub struct TokenManager<A, C = SystemClock> {
    authenticator: A,
    clock: C,
    cached_token: Mutex<OAuthToken>,
}

impl<A> TokenManager<A>
where
    A: Authenticator,
{
    pub fn new(authenticator: A) -> Self {
        Self::with_clock(authenticator, SystemClock)
    }
}

impl<A, C> TokenManager<A, C>
where
    A: Authenticator,
    C: Clock,
{
    pub fn with_clock(authenticator: A, clock: C) -> Self {
        Self {
            authenticator,
            clock,
            cached_token: Mutex::new(OAuthToken::default()),
        }
    }

    async fn fetch_new_token(&self) -> Result<OAuthToken, A::Error> {
        let OAuthResponse {
            access_token,
            token_type,
            refresh_token,
            expires_in,
        } = self.authenticator.authenticate().await?;
        let expiration = expiration_after(self.clock.now(), expires_in);
        Ok(OAuthToken {
            access_token,
            token_type,
            refresh_token,
            expiration,
        })
    }

    /// Returns a valid token, authenticating again if the cached one has
    /// expired. A failed refresh leaves the cached token as it was.
    pub async fn token(&self) -> Result<OAuthToken, A::Error> {
        let mut cached_token = self.cached_token.lock().await;

        if cached_token.is_valid_at(self.clock.now()) {
            debug!(
                message = "Using preexisting token",
                token_expires_at = %cached_token.expiration
            );
            return Ok(cached_token.clone());
        }

        info!(
            message = "No active token found, about to get a new one",
            token_is_stale = cached_token.expiration != DateTime::<Utc>::MIN_UTC,
        );

        let new_token = self.fetch_new_token().await?;
        *cached_token = new_token.clone();

        debug!(message = "Got new token", token_expires_at = %new_token.expiration);

        Ok(new_token)
    }
}

fn expiration_after(now: DateTime<Utc>, expires_in: i64) -> DateTime<Utc> {
    Duration::try_seconds(expires_in)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .unwrap_or(if expires_in < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

#[async_trait::async_trait]
impl<A, C> TokenProvider for TokenManager<A, C>
where
    A: Authenticator,
    C: Clock,
{
    type Error = A::Error;

    async fn token(&self) -> Result<OAuthToken, Self::Error> {
        TokenManager::token(self).await
    }
}
