use super::{parse_time::parse_time, Client, Error};
use crate::{
    thin::{self, RawApi},
    types::{BidRequest, BidStatus, ListingNumber, OrderId, OrderResponse, ParseError},
};

impl<R> Client<R>
where
    R: RawApi,
{
    /// Bids `amount` dollars on a single listing.
    pub async fn place_bid(
        &self,
        listing: ListingNumber,
        amount: f64,
    ) -> Result<OrderResponse, Error<R::Error>> {
        let bids = [thin::BidRequest {
            listing_id: listing.0,
            bid_amount: amount,
        }];
        let raw = self.raw.place_bid(&bids).await.map_err(Error::Api)?;
        Ok(parse_order(raw)?)
    }

    /// The current state of a previously placed order.
    pub async fn order_status(&self, order_id: &OrderId) -> Result<OrderResponse, Error<R::Error>> {
        let raw = self.raw.order_status(order_id.as_str()).await.map_err(Error::Api)?;
        Ok(parse_order(raw)?)
    }
}

fn parse_order(r: thin::OrderResponse) -> Result<OrderResponse, ParseError> {
    let bid_status = r
        .bid_requests
        .into_iter()
        .map(parse_bid_status)
        .collect::<Result<_, _>>()?;
    Ok(OrderResponse {
        order_id: OrderId(r.order_id),
        bid_status,
        order_status: r.order_status.parse()?,
        order_date: parse_time("order_date", &r.order_date)?,
    })
}

fn parse_bid_status(s: thin::BidStatus) -> Result<BidStatus, ParseError> {
    Ok(BidStatus {
        request: BidRequest {
            listing_id: ListingNumber(s.request.listing_id),
            bid_amount: s.request.bid_amount,
        },
        status: s.bid_status.parse()?,
        result: s.bid_result.parse()?,
        bid_amount_placed: s.bid_amount_placed,
    })
}
