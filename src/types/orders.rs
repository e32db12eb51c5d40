use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{ListingNumber, ParseError};

/// Status of a bid, as in the `bid_status` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BidStatusValue {
    Pending,
    Invested,
    Expired,
}

impl FromStr for BidStatusValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "INVESTED" => Ok(Self::Invested),
            "EXPIRED" => Ok(Self::Expired),
            _ => Err(ParseError::unrecognized("bid status", s)),
        }
    }
}

/// Outcome of a bid, as in the `bid_result` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BidResult {
    NoBidResult,
    AmountBidTooHigh,
    AmountBidTooLow,
    BidFailed,
    BidSucceeded,
    CannotBidOnSelf,
    InsufficientFunds,
    InternalError,
    InvestmentOrderAlreadyProcessed,
    LenderNotEligibleToBid,
    ListingNotBiddable,
    SuitabilityRequirementsNotMet,
    PartialBidSucceeded,
}

impl FromStr for BidResult {
    type Err = ParseError;

    /// Pending bids carry no result, which the server sends as an empty
    /// string or `NONE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let result = match s {
            "" | "NONE" => Self::NoBidResult,
            "AMOUNT_BID_TOO_HIGH" => Self::AmountBidTooHigh,
            "AMOUNT_BID_TOO_LOW" => Self::AmountBidTooLow,
            "BID_FAILED" => Self::BidFailed,
            "BID_SUCCEEDED" => Self::BidSucceeded,
            "CANNOT_BID_ON_SELF" => Self::CannotBidOnSelf,
            "INSUFFICIENT_FUNDS" => Self::InsufficientFunds,
            "INTERNAL_ERROR" => Self::InternalError,
            "INVESTMENT_ORDER_ALREADY_PROCESSED" => Self::InvestmentOrderAlreadyProcessed,
            "LENDER_NOT_ELIGIBLE_TO_BID" => Self::LenderNotEligibleToBid,
            "LISTING_NOT_BIDDABLE" => Self::ListingNotBiddable,
            "SUITABILITY_REQUIREMENTS_NOT_MET" => Self::SuitabilityRequirementsNotMet,
            "PARTIAL_BID_SUCCEEDED" => Self::PartialBidSucceeded,
            _ => return Err(ParseError::unrecognized("bid result", s)),
        };
        Ok(result)
    }
}

/// Status of a whole order, as in the `order_status` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderStatus {
    InProgress,
    Completed,
}

impl FromStr for OrderStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(ParseError::unrecognized("order status", s)),
        }
    }
}

/// Identifies an order placed with Prosper.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BidRequest {
    pub listing_id: ListingNumber,
    pub bid_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BidStatus {
    #[serde(flatten)]
    pub request: BidRequest,
    pub status: BidStatusValue,
    pub result: BidResult,
    pub bid_amount_placed: f64,
}

/// <https://developers.prosper.com/docs/investor/orders-api/>
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderResponse {
    pub order_id: OrderId,
    pub bid_status: Vec<BidStatus>,
    pub order_status: OrderStatus,
    pub order_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_ids_sort() {
        let mut ids: Vec<OrderId> = vec!["id-c".into(), "id-b".into(), "id-a".into()];
        ids.sort();
        assert_eq!(ids, vec![OrderId::from("id-a"), "id-b".into(), "id-c".into()]);
    }

    #[test]
    fn bid_result_treats_missing_as_no_result() {
        assert_eq!("".parse::<BidResult>(), Ok(BidResult::NoBidResult));
        assert_eq!("NONE".parse::<BidResult>(), Ok(BidResult::NoBidResult));
        assert_eq!("BID_SUCCEEDED".parse::<BidResult>(), Ok(BidResult::BidSucceeded));
        assert!("bid_succeeded".parse::<BidResult>().is_err());
    }

    #[test]
    fn unknown_statuses_are_rejected() {
        assert_eq!(
            "CANCELLED".parse::<OrderStatus>().unwrap_err().to_string(),
            r#"unrecognized order status value: "CANCELLED""#
        );
        assert!("pending".parse::<BidStatusValue>().is_err());
    }
}
