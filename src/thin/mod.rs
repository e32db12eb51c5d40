//! A thin client over the Prosper REST APIs.
//!
//! Responses are decoded into structs that mirror the JSON the server sends,
//! with no conversion of codes or dates. The typed layer in [`crate::client`]
//! builds on top of this through the [`RawApi`] trait.

mod accounts;
mod notes;
mod orders;
mod search;

use std::time::Duration;

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

pub use self::{
    accounts::AccountsResponse,
    notes::{NoteResult, NotesResponse},
    orders::{BidRequest, BidStatus, OrderResponse},
    search::{SearchFilter, SearchParams, SearchResponse, SearchResult},
};
use crate::{
    auth::TokenProvider,
    utils::{check_status, ServerError, DEFAULT_BASE_URL},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum Error<AuthError> {
    #[error("auth: {0}")]
    Auth(#[source] AuthError),
    #[error("reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Server(#[from] ServerError),
    #[error("url: {0}")]
    Url(#[from] url::ParseError),
}

/// The five Prosper endpoints, in minimally parsed form.
#[async_trait::async_trait]
pub trait RawApi: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn accounts(&self) -> Result<AccountsResponse, Self::Error>;
    async fn notes(&self, offset: u32, limit: u32) -> Result<NotesResponse, Self::Error>;
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse, Self::Error>;
    async fn place_bid(&self, bids: &[BidRequest]) -> Result<OrderResponse, Self::Error>;
    async fn order_status(&self, order_id: &str) -> Result<OrderResponse, Self::Error>;
}

pub struct Client<P> {
    pub client: reqwest::Client,
    pub base_url: String,
    pub token_provider: P,
}

impl<T> Client<T>
where
    T: TokenProvider,
{
    pub fn new(client: reqwest::Client, token_provider: T) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_owned(),
            token_provider,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Appends `segment` to `path` as a single escaped path segment.
    fn segment_url(&self, path: &str, segment: &str) -> Result<String, Error<T::Error>> {
        let mut target = url::Url::parse(&self.url(path))?;
        target
            .path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(segment);
        Ok(target.into())
    }

    async fn access_token(&self) -> Result<String, Error<T::Error>> {
        let token = self.token_provider.token().await.map_err(Error::Auth)?;
        Ok(token.access_token)
    }

    fn build_request<B>(
        &self,
        auth_token: &str,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request, Error<T::Error>>
    where
        B: Serialize + ?Sized,
    {
        let builder = self
            .client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, format!("bearer {}", auth_token))
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(REQUEST_TIMEOUT);

        // `json` also sets the JSON content type.
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };

        builder.build().map_err(Error::Reqwest)
    }

    async fn exec(&self, request: reqwest::Request) -> Result<reqwest::Response, Error<T::Error>> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(message = "Sending request", %method, %url);

        let res = self.client.execute(request).await.map_err(|err| {
            warn!(message = "Request failed", %method, %url, error = %err);
            Error::Reqwest(err)
        })?;
        let res = check_status(res).await.map_err(|err| {
            warn!(message = "Server returned an error", %method, %url, status = %err.status);
            err
        })?;
        Ok(res)
    }

    async fn parse_json<R>(res: reqwest::Response) -> Result<R, Error<T::Error>>
    where
        R: DeserializeOwned,
    {
        res.json().await.map_err(Error::Reqwest)
    }

    async fn get<R>(&self, url: &str) -> Result<R, Error<T::Error>>
    where
        R: DeserializeOwned,
    {
        let auth_token = self.access_token().await?;
        let request = self.build_request::<()>(&auth_token, Method::GET, url, None)?;
        let res = self.exec(request).await?;
        Self::parse_json(res).await
    }

    async fn post<B, R>(&self, url: &str, body: &B) -> Result<R, Error<T::Error>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let auth_token = self.access_token().await?;
        let request = self.build_request(&auth_token, Method::POST, url, Some(body))?;
        let res = self.exec(request).await?;
        Self::parse_json(res).await
    }
}

#[async_trait::async_trait]
impl<T> RawApi for Client<T>
where
    T: TokenProvider,
    <T as TokenProvider>::Error: std::error::Error + 'static,
{
    type Error = Error<T::Error>;

    async fn accounts(&self) -> Result<AccountsResponse, Self::Error> {
        Client::accounts(self).await
    }

    async fn notes(&self, offset: u32, limit: u32) -> Result<NotesResponse, Self::Error> {
        Client::notes(self, offset, limit).await
    }

    async fn search(&self, params: &SearchParams) -> Result<SearchResponse, Self::Error> {
        Client::search(self, params).await
    }

    async fn place_bid(&self, bids: &[BidRequest]) -> Result<OrderResponse, Self::Error> {
        Client::place_bid(self, bids).await
    }

    async fn order_status(&self, order_id: &str) -> Result<OrderResponse, Self::Error> {
        Client::order_status(self, order_id).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use wiremock::MockServer;

    use super::Client;
    use crate::auth::mock::StaticTokenProvider;

    pub const MOCK_ACCESS_TOKEN: &str = "mock access token";

    pub fn client(server: &MockServer) -> Client<StaticTokenProvider> {
        Client::new(
            reqwest::Client::new(),
            StaticTokenProvider(MOCK_ACCESS_TOKEN),
        )
        .with_base_url(server.uri())
    }
}
