use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Client, Error};
use crate::{auth::TokenProvider, interval::Interval};

/// Restricts which listings a search returns, using raw wire values.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SearchFilter {
    pub estimated_return: Interval<f64>,
    pub income_range: Vec<i8>,
    pub inquiries_last6_months: Interval<i32>,
    pub prior_prosper_loans_late_payments_one_month_plus: Interval<i32>,
    pub prior_prosper_loans_balance_outstanding: Interval<f64>,
    pub dti_wprosper_loan: Interval<f64>,
    pub prosper_rating: Vec<String>,
    pub listing_start_date: Interval<DateTime<Utc>>,
    pub listing_status: Vec<i32>,
}

/// Zero or `false` leaves a parameter out of the query.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub offset: u32,
    pub limit: u32,
    pub exclude_listings_invested: bool,
    pub filter: SearchFilter,
}

impl SearchParams {
    /// Renders the parameters in the form the search endpoint expects. List
    /// values are comma-separated and times use `+` between date and time.
    pub fn to_query_string(&self) -> String {
        let Self {
            offset,
            limit,
            exclude_listings_invested,
            filter,
        } = self;

        let mut clauses = Vec::new();
        if *offset != 0 {
            clauses.push(format!("offset={}", offset));
        }
        if *limit != 0 {
            clauses.push(format!("limit={}", limit));
        }
        if *exclude_listings_invested {
            clauses.push("exclude_listings_invested=true".to_owned());
        }
        if !filter.income_range.is_empty() {
            clauses.push(list_clause("income_range", &filter.income_range));
        }
        if !filter.prosper_rating.is_empty() {
            clauses.push(list_clause("prosper_rating", &filter.prosper_rating));
        }
        if !filter.listing_status.is_empty() {
            clauses.push(list_clause("listing_status", &filter.listing_status));
        }

        let fixed = |v: &f64| format!("{:.4}", v);
        let plain = |v: &i32| v.to_string();
        interval_clauses(&mut clauses, "estimated_return", &filter.estimated_return, fixed);
        interval_clauses(
            &mut clauses,
            "inquiries_last6_months",
            &filter.inquiries_last6_months,
            plain,
        );
        interval_clauses(
            &mut clauses,
            "prior_prosper_loans_late_payments_one_month_plus",
            &filter.prior_prosper_loans_late_payments_one_month_plus,
            plain,
        );
        interval_clauses(
            &mut clauses,
            "prior_prosper_loans_balance_outstanding",
            &filter.prior_prosper_loans_balance_outstanding,
            fixed,
        );
        interval_clauses(&mut clauses, "dti_wprosper_loan", &filter.dti_wprosper_loan, fixed);
        interval_clauses(
            &mut clauses,
            "listing_start_date",
            &filter.listing_start_date,
            |t| t.format("%Y-%m-%d+%H:%M:%S").to_string(),
        );

        clauses.join("&")
    }
}

fn list_clause<V: ToString>(name: &str, values: &[V]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{}={}", name, joined)
}

fn interval_clauses<V>(
    clauses: &mut Vec<String>,
    name: &str,
    interval: &Interval<V>,
    render: impl Fn(&V) -> String,
) {
    if let Some(min) = &interval.min {
        clauses.push(format!("{}_min={}", name, render(min)));
    }
    if let Some(max) = &interval.max {
        clauses.push(format!("{}_max={}", name, render(max)));
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub result: Vec<SearchResult>,
    pub result_count: i64,
    pub total_count: i64,
}

/// One listing as returned by the search endpoint.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
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
    pub credit_pull_date: String,
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
    pub fico_score: String,
    pub first_recorded_credit_line: String,
    pub funding_threshold: f64,
    pub income_range: i64,
    pub income_range_description: String,
    pub income_verifiable: bool,
    pub inquiries_last6_months: i64,
    pub installment_balance: f64,
    pub investment_type_description: String,
    pub investment_typeid: i64,
    pub is_homeowner: bool,
    pub last_updated_date: String,
    pub lender_indicator: i64,
    pub lender_yield: f64,
    pub listing_amount: f64,
    pub listing_category_id: i64,
    pub listing_creation_date: String,
    pub listing_end_date: String,
    pub listing_monthly_payment: f64,
    pub listing_number: i64,
    pub listing_start_date: String,
    pub listing_status: i64,
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
    pub oldest_trade_open_date: String,
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
    pub prosper_rating: String,
    pub prosper_score: i64,
    pub public_records_last10_years: i64,
    pub public_records_last12_months: i64,
    pub real_estate_balance: f64,
    pub real_estate_payment: f64,
    pub revolving_available_percent: f64,
    pub revolving_balance: f64,
    pub satisfactory_accounts: i64,
    pub scorex: String,
    pub scorex_change: String,
    pub stated_monthly_income: f64,
    pub total_inquiries: i64,
    pub total_open_revolving_accounts: i64,
    pub total_trade_items: i64,
    pub verification_stage: i64,
    pub was_delinquent_derog: i64,
    pub whole_loan_end_date: String,
    pub whole_loan_start_date: String,
}

impl<T> Client<T>
where
    T: TokenProvider,
{
    /// Current listings matching `params`.
    ///
    /// <https://developers.prosper.com/docs/investor/searchlistings-api/>
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse, Error<T::Error>> {
        let url = self.url(&format!("/search/listings/?{}", params.to_query_string()));
        self.get(&url).await
    }
}
