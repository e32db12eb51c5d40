//! Capabilities of a Prosper client, one trait per operation, so callers can
//! depend on only what they use and substitute fakes in their own tests.

use crate::{
    client::{Client, SearchParams},
    thin::RawApi,
    types::{
        AccountInformation, ListingNumber, NotesResponse, OrderId, OrderResponse, SearchResponse,
    },
};

#[async_trait::async_trait]
pub trait Accounter: Send + Sync {
    async fn account(&self) -> Result<AccountInformation, anyhow::Error>;
}

#[async_trait::async_trait]
pub trait NoteFetcher: Send + Sync {
    async fn notes(&self, offset: u32, limit: u32) -> Result<NotesResponse, anyhow::Error>;
}

#[async_trait::async_trait]
pub trait ListingSearcher: Send + Sync {
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse, anyhow::Error>;
}

#[async_trait::async_trait]
pub trait BidPlacer: Send + Sync {
    async fn place_bid(
        &self,
        listing: ListingNumber,
        amount: f64,
    ) -> Result<OrderResponse, anyhow::Error>;
}

#[async_trait::async_trait]
pub trait OrderStatusQuerier: Send + Sync {
    async fn order_status(&self, order_id: &OrderId) -> Result<OrderResponse, anyhow::Error>;
}

#[async_trait::async_trait]
impl<R> Accounter for Client<R>
where
    R: RawApi,
{
    async fn account(&self) -> Result<AccountInformation, anyhow::Error> {
        Ok(Client::account(self).await?)
    }
}

#[async_trait::async_trait]
impl<R> NoteFetcher for Client<R>
where
    R: RawApi,
{
    async fn notes(&self, offset: u32, limit: u32) -> Result<NotesResponse, anyhow::Error> {
        Ok(Client::notes(self, offset, limit).await?)
    }
}

#[async_trait::async_trait]
impl<R> ListingSearcher for Client<R>
where
    R: RawApi,
{
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse, anyhow::Error> {
        Ok(Client::search(self, params).await?)
    }
}

#[async_trait::async_trait]
impl<R> BidPlacer for Client<R>
where
    R: RawApi,
{
    async fn place_bid(
        &self,
        listing: ListingNumber,
        amount: f64,
    ) -> Result<OrderResponse, anyhow::Error> {
        Ok(Client::place_bid(self, listing, amount).await?)
    }
}

#[async_trait::async_trait]
impl<R> OrderStatusQuerier for Client<R>
where
    R: RawApi,
{
    async fn order_status(&self, order_id: &OrderId) -> Result<OrderResponse, anyhow::Error> {
        Ok(Client::order_status(self, order_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockRawApi;

    async fn balance(accounter: &dyn Accounter) -> Result<f64, anyhow::Error> {
        Ok(accounter.account().await?.available_cash_balance)
    }

    #[tokio::test]
    async fn client_is_usable_through_trait_objects() {
        let client = Client::from_raw(MockRawApi {
            accounts: crate::thin::AccountsResponse {
                available_cash_balance: 72.5,
                ..Default::default()
            },
            ..MockRawApi::default()
        });

        assert_eq!(balance(&client).await.unwrap(), 72.5);
    }

    #[tokio::test]
    async fn errors_keep_their_message() {
        let client = Client::from_raw(MockRawApi::failing());
        let searcher: &dyn ListingSearcher = &client;

        let err = searcher.search(&SearchParams::default()).await.unwrap_err();

        assert_eq!(err.to_string(), "api: mock raw client error");
    }
}
