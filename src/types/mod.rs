//! Typed domain values returned by [`crate::client::Client`].

mod account;
mod listing;
mod notes;
mod orders;

pub use self::{
    account::AccountInformation,
    listing::{FicoScore, IncomeRange, Listing, ListingNumber, ListingStatus, SearchResponse},
    notes::{DefaultReason, Note, NoteStatus, NotesResponse, ProsperRating},
    orders::{BidRequest, BidResult, BidStatus, BidStatusValue, OrderId, OrderResponse, OrderStatus},
};

/// A wire value that does not map onto a domain value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{kind} out of range: {value}, expected {min}-{max}")]
    OutOfRange {
        kind: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("unrecognized {kind} value: {value:?}")]
    Unrecognized { kind: &'static str, value: String },
    #[error("invalid {kind} {value:?}: {source}")]
    Time {
        kind: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl ParseError {
    fn unrecognized(kind: &'static str, value: impl ToString) -> Self {
        Self::Unrecognized {
            kind,
            value: value.to_string(),
        }
    }
}

fn check_range(kind: &'static str, value: i64, min: i64, max: i64) -> Result<(), ParseError> {
    if value < min || value > max {
        return Err(ParseError::OutOfRange {
            kind,
            value,
            min,
            max,
        });
    }
    Ok(())
}
