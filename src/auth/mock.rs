//! Test doubles for the authorization seams.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use chrono::{DateTime, Utc};

use super::{Authenticator, Clock, OAuthResponse, OAuthToken, TokenProvider};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("mock auth error: {0}")]
pub struct MockAuthError(pub &'static str);

pub struct MockAuthenticator {
    result: Mutex<Result<OAuthResponse, MockAuthError>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockAuthenticator {
    pub fn new(result: Result<OAuthResponse, MockAuthError>) -> Self {
        Self {
            result: Mutex::new(result),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_result(&self, result: Result<OAuthResponse, MockAuthError>) {
        *self.result.lock().unwrap() = result;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Authenticator for MockAuthenticator {
    type Error = MockAuthError;

    async fn authenticate(&self) -> Result<OAuthResponse, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let result = self.result.lock().unwrap().clone();
        result
    }
}

/// A clock that only moves when told to.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(now)))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().unwrap() = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Always hands out the same access token.
pub struct StaticTokenProvider(pub &'static str);

#[async_trait::async_trait]
impl TokenProvider for StaticTokenProvider {
    type Error = MockAuthError;

    async fn token(&self) -> Result<OAuthToken, Self::Error> {
        Ok(OAuthToken {
            access_token: self.0.to_owned(),
            token_type: "bearer".into(),
            refresh_token: String::new(),
            expiration: DateTime::<Utc>::MAX_UTC,
        })
    }
}

/// Fails every request for a token.
pub struct FailingTokenProvider;

#[async_trait::async_trait]
impl TokenProvider for FailingTokenProvider {
    type Error = MockAuthError;

    async fn token(&self) -> Result<OAuthToken, Self::Error> {
        Err(MockAuthError("token unavailable"))
    }
}
