use std::sync::Mutex;

use crate::thin::{self, RawApi};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("mock raw client error")]
pub struct MockRawError;

/// A call received by [`MockRawApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawCall {
    Accounts,
    Notes { offset: u32, limit: u32 },
    Search(thin::SearchParams),
    PlaceBid(Vec<thin::BidRequest>),
    OrderStatus(String),
}

/// Answers every call with the canned response of its kind, or with
/// [`MockRawError`] when `fail` is set.
#[derive(Default)]
pub struct MockRawApi {
    pub accounts: thin::AccountsResponse,
    pub notes: thin::NotesResponse,
    pub search: thin::SearchResponse,
    pub order: thin::OrderResponse,
    pub fail: bool,
    pub calls: Mutex<Vec<RawCall>>,
}

impl MockRawApi {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn received(&self) -> Vec<RawCall> {
        self.calls.lock().unwrap().clone()
    }

    fn respond<T: Clone>(&self, call: RawCall, response: &T) -> Result<T, MockRawError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(MockRawError);
        }
        Ok(response.clone())
    }
}

#[async_trait::async_trait]
impl RawApi for MockRawApi {
    type Error = MockRawError;

    async fn accounts(&self) -> Result<thin::AccountsResponse, Self::Error> {
        self.respond(RawCall::Accounts, &self.accounts)
    }

    async fn notes(&self, offset: u32, limit: u32) -> Result<thin::NotesResponse, Self::Error> {
        self.respond(RawCall::Notes { offset, limit }, &self.notes)
    }

    async fn search(
        &self,
        params: &thin::SearchParams,
    ) -> Result<thin::SearchResponse, Self::Error> {
        self.respond(RawCall::Search(params.clone()), &self.search)
    }

    async fn place_bid(
        &self,
        bids: &[thin::BidRequest],
    ) -> Result<thin::OrderResponse, Self::Error> {
        self.respond(RawCall::PlaceBid(bids.to_vec()), &self.order)
    }

    async fn order_status(&self, order_id: &str) -> Result<thin::OrderResponse, Self::Error> {
        self.respond(RawCall::OrderStatus(order_id.to_owned()), &self.order)
    }
}
