use serde::{Deserialize, Serialize};

use super::{Client, Error};
use crate::auth::TokenProvider;

/// An order for a single listing.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidRequest {
    pub listing_id: i64,
    pub bid_amount: f64,
}

#[derive(Serialize)]
struct OrderParams<'a> {
    bid_requests: &'a [BidRequest],
}

/// The state of one bid within an order.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidStatus {
    #[serde(flatten)]
    pub request: BidRequest,
    pub bid_status: String,
    pub bid_result: String,
    pub bid_amount_placed: f64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderResponse {
    pub order_id: String,
    pub bid_requests: Vec<BidStatus>,
    pub order_status: String,
    pub order_date: String,
    pub effective_yield: f64,
    pub estimated_loss: f64,
    pub estimated_return: f64,
    pub source: String,
}

impl<T> Client<T>
where
    T: TokenProvider,
{
    /// Places an order for the given bids.
    ///
    /// <https://developers.prosper.com/docs/investor/orders-api/>
    pub async fn place_bid(&self, bids: &[BidRequest]) -> Result<OrderResponse, Error<T::Error>> {
        let params = OrderParams { bid_requests: bids };
        self.post(&self.url("/orders/"), &params).await
    }

    /// Retrieves a previously placed order.
    pub async fn order_status(&self, order_id: &str) -> Result<OrderResponse, Error<T::Error>> {
        let url = self.segment_url("/orders", order_id)?;
        self.get(&url).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::thin::test_support::client;

    #[tokio::test]
    async fn place_bid_successful_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orders/"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({
                "bid_requests": [{ "listing_id": 215032, "bid_amount": 32.0 }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{
                    "order_id": "067e6162-3b6f-4ae2-a171-2470b63dff00",
                    "bid_requests": [
                        {
                            "listing_id": 215032,
                            "bid_status": "PENDING",
                            "bid_amount": 32
                        }
                    ],
                    "effective_yield": 0.0842,
                    "estimated_loss": 0.0324,
                    "estimated_return": 0.0518,
                    "source": "API",
                    "order_status": "IN_PROGRESS",
                    "order_date": "2015-09-17 19:54:58 +0000"
                }"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let got = client(&server)
            .place_bid(&[BidRequest {
                listing_id: 215032,
                bid_amount: 32.0,
            }])
            .await
            .unwrap();

        assert_eq!(
            got,
            OrderResponse {
                order_id: "067e6162-3b6f-4ae2-a171-2470b63dff00".into(),
                bid_requests: vec![BidStatus {
                    request: BidRequest {
                        listing_id: 215032,
                        bid_amount: 32.0,
                    },
                    bid_status: "PENDING".into(),
                    ..BidStatus::default()
                }],
                order_status: "IN_PROGRESS".into(),
                order_date: "2015-09-17 19:54:58 +0000".into(),
                effective_yield: 0.0842,
                estimated_loss: 0.0324,
                estimated_return: 0.0518,
                source: "API".into(),
            }
        );
    }

    #[tokio::test]
    async fn place_bid_accepts_created_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orders/"))
            .respond_with(ResponseTemplate::new(201).set_body_string(
                r#"{"order_id": "067e6162", "order_status": "IN_PROGRESS"}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let got = client(&server)
            .place_bid(&[BidRequest {
                listing_id: 215032,
                bid_amount: 32.0,
            }])
            .await
            .unwrap();

        assert_eq!(got.order_id, "067e6162");
        assert_eq!(got.order_status, "IN_PROGRESS");
    }

    #[tokio::test]
    async fn place_bid_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orders/"))
            .respond_with(ResponseTemplate::new(500).set_body_string(
                "{\n\t\"code\":\"SYS0001\",\n\t\"message\":\"Application Error\"\n}",
            ))
            .mount(&server)
            .await;

        let err = client(&server)
            .place_bid(&[BidRequest {
                listing_id: 215032,
                bid_amount: 32.0,
            }])
            .await
            .unwrap_err();

        let expected = concat!(
            "request failed: 500 Internal Server Error - ",
            r#"{ "code":"SYS0001", "message":"Application Error" }"#,
        );
        assert_eq!(err.to_string(), expected);
    }

    #[tokio::test]
    async fn order_status_successful_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orders/90cf709d-81d6-416a-89f2-ba6ab8146ef2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{
                    "order_id": "90cf709d-81d6-416a-89f2-ba6ab8146ef2",
                    "bid_requests": [
                        {
                            "listing_id": 2211270,
                            "bid_amount": 100,
                            "bid_status": "INVESTED",
                            "bid_result": "BID_SUCCEEDED",
                            "bid_amount_placed": 100
                        }
                    ],
                    "order_amount": 100,
                    "order_amount_placed": 100,
                    "order_amount_invested": 100,
                    "source": "API",
                    "order_status": "COMPLETED",
                    "order_date": "2015-09-17 19:54:58 +0000"
                }"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let got = client(&server)
            .order_status("90cf709d-81d6-416a-89f2-ba6ab8146ef2")
            .await
            .unwrap();

        assert_eq!(
            got,
            OrderResponse {
                order_id: "90cf709d-81d6-416a-89f2-ba6ab8146ef2".into(),
                bid_requests: vec![BidStatus {
                    request: BidRequest {
                        listing_id: 2211270,
                        bid_amount: 100.0,
                    },
                    bid_status: "INVESTED".into(),
                    bid_result: "BID_SUCCEEDED".into(),
                    bid_amount_placed: 100.0,
                }],
                order_status: "COMPLETED".into(),
                order_date: "2015-09-17 19:54:58 +0000".into(),
                source: "API".into(),
                ..OrderResponse::default()
            }
        );
    }

    #[tokio::test]
    async fn order_status_escapes_order_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orders/a%2Fb%3Fc%23d"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"order_id": "a/b?c#d", "order_status": "COMPLETED"}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let got = client(&server).order_status("a/b?c#d").await.unwrap();

        assert_eq!(got.order_id, "a/b?c#d");
    }
}
