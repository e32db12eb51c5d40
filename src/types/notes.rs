use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{check_range, ListingNumber, ParseError};

/// Prosper's credit rating for a loan, as in the `prosper_rating` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProsperRating {
    AA,
    A,
    B,
    C,
    D,
    E,
    HR,
    #[serde(rename = "N/A")]
    NA,
}

impl ProsperRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AA => "AA",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::HR => "HR",
            Self::NA => "N/A",
        }
    }
}

impl fmt::Display for ProsperRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProsperRating {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rating = match s {
            "AA" => Self::AA,
            "A" => Self::A,
            "B" => Self::B,
            "C" => Self::C,
            "D" => Self::D,
            "E" => Self::E,
            "HR" => Self::HR,
            "N/A" => Self::NA,
            _ => return Err(ParseError::unrecognized("Prosper rating", s)),
        };
        Ok(rating)
    }
}

/// Status of an owned note, as in the `note_status` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NoteStatus {
    OriginationDelayed = 0,
    Current = 1,
    Chargeoff = 2,
    Defaulted = 3,
    Completed = 4,
    /// No longer reported by the server.
    FinalPaymentInProgress = 5,
    Cancelled = 6,
}

impl TryFrom<i64> for NoteStatus {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        check_range("note status", value, 0, 6)?;
        let status = match value {
            0 => Self::OriginationDelayed,
            1 => Self::Current,
            2 => Self::Chargeoff,
            3 => Self::Defaulted,
            4 => Self::Completed,
            5 => Self::FinalPaymentInProgress,
            _ => Self::Cancelled,
        };
        Ok(status)
    }
}

/// Why a note went into default, as in the `note_default_reason` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DefaultReason {
    Delinquency = 1,
    Bankruptcy = 2,
    Deceased = 3,
    Repurchased = 4,
    PaidInFull = 5,
    SettledInFull = 6,
    Sold = 7,
}

impl TryFrom<i64> for DefaultReason {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        check_range("default reason", value, 1, 7)?;
        let reason = match value {
            1 => Self::Delinquency,
            2 => Self::Bankruptcy,
            3 => Self::Deceased,
            4 => Self::Repurchased,
            5 => Self::PaidInFull,
            6 => Self::SettledInFull,
            _ => Self::Sold,
        };
        Ok(reason)
    }
}

/// A note the user owns.
///
/// <https://developers.prosper.com/docs/investor/notes-api/>
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub age_in_months: i64,
    pub amount_borrowed: f64,
    pub borrower_rate: f64,
    pub days_past_due: i64,
    pub debt_sale_proceeds_received_pro_rata_share: f64,
    pub interest_paid_pro_rata_share: f64,
    pub is_sold: bool,
    pub late_fees_paid_pro_rata_share: f64,
    pub listing_number: ListingNumber,
    pub loan_note_id: String,
    pub loan_number: i64,
    pub next_payment_due_amount_pro_rata_share: f64,
    pub next_payment_due_date: Option<DateTime<Utc>>,
    pub note_default_reason_description: String,
    pub note_default_reason: Option<DefaultReason>,
    pub note_ownership_amount: f64,
    pub note_sale_fees_paid: f64,
    pub note_sale_gross_amount_received: f64,
    pub note_status_description: String,
    pub note_status: NoteStatus,
    pub origination_date: Option<DateTime<Utc>>,
    pub principal_balance_pro_rata_share: f64,
    pub principal_paid_pro_rata_share: f64,
    pub prosper_fees_paid_pro_rata_share: f64,
    pub prosper_rating: ProsperRating,
    pub service_fees_paid_pro_rata_share: f64,
    pub term: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotesResponse {
    pub result: Vec<Note>,
    pub result_count: i64,
    pub total_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prosper_rating_round_trips_through_wire_strings() {
        for s in ["AA", "A", "B", "C", "D", "E", "HR", "N/A"] {
            assert_eq!(s.parse::<ProsperRating>().unwrap().as_str(), s);
        }
        assert_eq!(
            "Z".parse::<ProsperRating>(),
            Err(ParseError::Unrecognized {
                kind: "Prosper rating",
                value: "Z".into(),
            })
        );
    }

    #[test]
    fn note_status_range() {
        assert_eq!(NoteStatus::try_from(0), Ok(NoteStatus::OriginationDelayed));
        assert_eq!(NoteStatus::try_from(6), Ok(NoteStatus::Cancelled));
        assert_eq!(
            NoteStatus::try_from(7).unwrap_err().to_string(),
            "note status out of range: 7, expected 0-6"
        );
        assert!(NoteStatus::try_from(-1).is_err());
    }

    #[test]
    fn default_reason_range() {
        assert_eq!(DefaultReason::try_from(1), Ok(DefaultReason::Delinquency));
        assert_eq!(DefaultReason::try_from(7), Ok(DefaultReason::Sold));
        assert!(DefaultReason::try_from(0).is_err());
        assert!(DefaultReason::try_from(8).is_err());
    }
}
