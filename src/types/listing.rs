use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{check_range, ParseError, ProsperRating};

/// Identifies a listing, and the loan it becomes once funded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ListingNumber(pub i64);

impl fmt::Display for ListingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The borrower's income bracket, as in the `income_range` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IncomeRange {
    NotDisplayed = 0,
    ZeroIncome = 1,
    Between0And25k = 2,
    Between25kAnd50k = 3,
    Between50kAnd75k = 4,
    Between75kAnd100k = 5,
    Over100k = 6,
    NotEmployed = 7,
}

impl IncomeRange {
    pub fn code(self) -> i8 {
        self as i8
    }
}

impl TryFrom<i64> for IncomeRange {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        check_range("income range", value, 0, 7)?;
        let range = match value {
            0 => Self::NotDisplayed,
            1 => Self::ZeroIncome,
            2 => Self::Between0And25k,
            3 => Self::Between25kAnd50k,
            4 => Self::Between50kAnd75k,
            5 => Self::Between75kAnd100k,
            6 => Self::Over100k,
            _ => Self::NotEmployed,
        };
        Ok(range)
    }
}

/// The borrower's FICO score bracket, as in the `fico_score` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FicoScore {
    Below600,
    Between600And619,
    Between620And639,
    Between640And659,
    Between660And679,
    Between680And699,
    Between700And719,
    Between720And739,
    Between740And759,
    Between760And779,
    Between780And799,
    Between800And819,
    Between820And850,
}

impl FromStr for FicoScore {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let score = match s {
            "<600" => Self::Below600,
            "600-619" => Self::Between600And619,
            "620-639" => Self::Between620And639,
            "640-659" => Self::Between640And659,
            "660-679" => Self::Between660And679,
            "680-699" => Self::Between680And699,
            "700-719" => Self::Between700And719,
            "720-739" => Self::Between720And739,
            "740-759" => Self::Between740And759,
            "760-779" => Self::Between760And779,
            "780-799" => Self::Between780And799,
            "800-819" => Self::Between800And819,
            "820-850" => Self::Between820And850,
            _ => return Err(ParseError::unrecognized("fico score", s)),
        };
        Ok(score)
    }
}

/// Lifecycle state of a listing, as in the `listing_status` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ListingStatus {
    Active = 2,
    Withdrawn = 4,
    Expired = 5,
    Completed = 6,
    Cancelled = 7,
    PendingReviewOrAcceptance = 8,
}

impl ListingStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i64> for ListingStatus {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        check_range("listing status", value, 2, 8)?;
        match value {
            2 => Ok(Self::Active),
            4 => Ok(Self::Withdrawn),
            5 => Ok(Self::Expired),
            6 => Ok(Self::Completed),
            7 => Ok(Self::Cancelled),
            8 => Ok(Self::PendingReviewOrAcceptance),
            _ => Err(ParseError::unrecognized("listing status", value)),
        }
    }
}

/// A loan listing from the search API.
///
/// <https://developers.prosper.com/docs/investor/searchlistings-api/>
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub amount_delinquent: f64,
    pub amount_funded: f64,
    pub amount_participation: f64,
    pub amount_remaining: f64,
    pub bankcard_utilization: f64,
    pub borrower_apr: f64,
    pub borrower_city: String,
    pub borrower_rate: f64,
    pub borrower_state: String,
    pub credit_lines_last7_years: i64,
    pub credit_pull_date: Option<DateTime<Utc>>,
    pub current_credit_lines: i64,
    pub current_delinquencies: i64,
    pub delinquencies_last7_years: i64,
    pub delinquencies_over30_days: i64,
    pub delinquencies_over60_days: i64,
    pub delinquencies_over90_days: i64,
    pub dti_wprosper_loan: f64,
    pub effective_yield: f64,
    pub employment_status_description: String,
    pub estimated_loss_rate: f64,
    pub estimated_return: f64,
    pub fico_score: FicoScore,
    pub first_recorded_credit_line: Option<DateTime<Utc>>,
    pub funding_threshold: f64,
    pub income_range: IncomeRange,
    pub income_range_description: String,
    pub income_verifiable: bool,
    pub inquiries_last6_months: i64,
    pub installment_balance: f64,
    pub investment_type_description: String,
    pub investment_type_id: i64,
    pub is_homeowner: bool,
    pub last_updated_date: Option<DateTime<Utc>>,
    pub lender_indicator: i64,
    pub lender_yield: f64,
    pub listing_amount: f64,
    pub listing_category_id: i64,
    pub listing_creation_date: Option<DateTime<Utc>>,
    pub listing_end_date: Option<DateTime<Utc>>,
    pub listing_monthly_payment: f64,
    pub listing_number: ListingNumber,
    pub listing_start_date: Option<DateTime<Utc>>,
    pub listing_status: ListingStatus,
    pub listing_status_reason: String,
    pub listing_term: i64,
    pub listing_title: String,
    pub max_prior_prosper_loan: f64,
    pub member_key: String,
    pub min_prior_prosper_loan: f64,
    pub monthly_debt: f64,
    pub months_employed: i64,
    pub now_delinquent_derog: i64,
    pub occupation: String,
    /// `None` when the server only says the trade line is older than five or
    /// ten years.
    pub oldest_trade_open_date: Option<DateTime<Utc>>,
    pub open_credit_lines: i64,
    pub partial_funding_indicator: bool,
    pub percent_funded: f64,
    pub prior_prosper_loan_earliest_pay_off: i64,
    pub prior_prosper_loans: i64,
    pub prior_prosper_loans31dpd: i64,
    pub prior_prosper_loans61dpd: i64,
    pub prior_prosper_loans_active: i64,
    pub prior_prosper_loans_balance_outstanding: f64,
    pub prior_prosper_loans_cycles_billed: i64,
    pub prior_prosper_loans_late_cycles: i64,
    pub prior_prosper_loans_late_payments_one_month_plus: i64,
    pub prior_prosper_loans_ontime_payments: i64,
    pub prior_prosper_loans_principal_borrowed: f64,
    pub prior_prosper_loans_principal_outstanding: f64,
    pub prosper_rating: ProsperRating,
    pub prosper_score: i64,
    pub public_records_last10_years: i64,
    pub public_records_last12_months: i64,
    pub real_estate_balance: f64,
    pub real_estate_payment: f64,
    pub revolving_available_percent: f64,
    pub revolving_balance: f64,
    pub satisfactory_accounts: i64,
    pub score_x: String,
    pub score_x_change: String,
    pub stated_monthly_income: f64,
    pub total_inquiries: i64,
    pub total_open_revolving_accounts: i64,
    pub total_trade_items: i64,
    pub verification_stage: i64,
    pub was_delinquent_derog: i64,
    pub whole_loan_end_date: Option<DateTime<Utc>>,
    pub whole_loan_start_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResponse {
    pub results: Vec<Listing>,
    pub result_count: i64,
    pub total_count: i64,
}
