//! Authorize using the resource owner password credentials flow.

use tracing::debug;

use super::{Authenticator, OAuthResponse};
use crate::utils::{check_status, ServerError, DEFAULT_BASE_URL};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("server: {0}")]
    Server(#[from] ServerError),
    #[error("encode: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

/// The user's secret credentials for the Prosper API.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

pub struct PasswordGrant {
    pub client: reqwest::Client,
    pub base_url: String,
    pub credentials: ClientCredentials,
}

impl PasswordGrant {
    pub fn new(client: reqwest::Client, credentials: ClientCredentials) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_owned(),
            credentials,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Perform the password grant flow.
    pub async fn perform(&self) -> Result<OAuthResponse, Error> {
        let ClientCredentials {
            client_id,
            client_secret,
            username,
            password,
        } = &self.credentials;
        let params = &[
            ("grant_type", "password"),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("username", username.as_str()),
            ("password", password.as_str()),
        ];
        let params = serde_urlencoded::to_string(params)?;

        let url = format!("{}/security/oauth/token", self.base_url);
        debug!(message = "Requesting OAuth token", %url, client_id = %client_id);

        let req = self
            .client
            .post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(params)
            .build()?;

        let res = self.client.execute(req).await?;
        let res = check_status(res).await?;
        let login_response = res.json().await?;
        Ok(login_response)
    }
}

#[async_trait::async_trait]
impl Authenticator for PasswordGrant {
    type Error = Error;

    async fn authenticate(&self) -> Result<OAuthResponse, Self::Error> {
        self.perform().await
    }
}
