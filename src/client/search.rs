use chrono::{DateTime, Utc};
use tracing::warn;

use super::{
    parse_time::{parse_old_date, parse_time},
    Client, Error,
};
use crate::{
    interval::Interval,
    thin::{self, RawApi},
    types::{
        IncomeRange, Listing, ListingNumber, ListingStatus, ParseError, ProsperRating,
        SearchResponse,
    },
};

/// Restricts which listings a search returns. Empty lists and unbounded
/// intervals do not filter.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SearchFilter {
    pub estimated_return: Interval<f64>,
    pub income_range: Vec<IncomeRange>,
    pub inquiries_last6_months: Interval<i32>,
    pub prior_prosper_loans_late_payments_one_month_plus: Interval<i32>,
    pub prior_prosper_loans_balance_outstanding: Interval<f64>,
    pub dti_wprosper_loan: Interval<f64>,
    pub prosper_rating: Vec<ProsperRating>,
    pub listing_start_date: Interval<DateTime<Utc>>,
    pub listing_status: Vec<ListingStatus>,
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub offset: u32,
    pub limit: u32,
    pub exclude_listings_invested: bool,
    pub filter: SearchFilter,
}

impl From<&SearchFilter> for thin::SearchFilter {
    fn from(f: &SearchFilter) -> Self {
        Self {
            estimated_return: f.estimated_return,
            income_range: f.income_range.iter().map(|r| r.code()).collect(),
            inquiries_last6_months: f.inquiries_last6_months,
            prior_prosper_loans_late_payments_one_month_plus: f
                .prior_prosper_loans_late_payments_one_month_plus,
            prior_prosper_loans_balance_outstanding: f.prior_prosper_loans_balance_outstanding,
            dti_wprosper_loan: f.dti_wprosper_loan,
            prosper_rating: f.prosper_rating.iter().map(|r| r.as_str().to_owned()).collect(),
            listing_start_date: f.listing_start_date,
            listing_status: f.listing_status.iter().map(|s| s.code()).collect(),
        }
    }
}

impl From<&SearchParams> for thin::SearchParams {
    fn from(p: &SearchParams) -> Self {
        Self {
            offset: p.offset,
            limit: p.limit,
            exclude_listings_invested: p.exclude_listings_invested,
            filter: (&p.filter).into(),
        }
    }
}

impl<R> Client<R>
where
    R: RawApi,
{
    /// Current listings matching `params`. A listing that fails to parse
    /// fails the whole search.
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse, Error<R::Error>> {
        let raw = self
            .raw
            .search(&thin::SearchParams::from(params))
            .await
            .map_err(Error::Api)?;

        let mut results = Vec::with_capacity(raw.result.len());
        for listing in raw.result {
            let listing_number = listing.listing_number;
            let listing = parse_listing(listing).map_err(|err| {
                warn!(message = "Failed to parse listing", listing_number, error = %err);
                err
            })?;
            results.push(listing);
        }

        Ok(SearchResponse {
            results,
            result_count: raw.result_count,
            total_count: raw.total_count,
        })
    }
}

fn parse_listing(r: thin::SearchResult) -> Result<Listing, ParseError> {
    Ok(Listing {
        amount_delinquent: r.amount_delinquent,
        amount_funded: r.amount_funded,
        amount_participation: r.amount_participation,
        amount_remaining: r.amount_remaining,
        bankcard_utilization: r.bankcard_utilization,
        borrower_apr: r.borrower_apr,
        borrower_city: r.borrower_city,
        borrower_rate: r.borrower_rate,
        borrower_state: r.borrower_state,
        credit_lines_last7_years: r.credit_lines_last7_years,
        credit_pull_date: parse_time("credit_pull_date", &r.credit_pull_date)?,
        current_credit_lines: r.current_credit_lines,
        current_delinquencies: r.current_delinquencies,
        delinquencies_last7_years: r.delinquencies_last7_years,
        delinquencies_over30_days: r.delinquencies_over30_days,
        delinquencies_over60_days: r.delinquencies_over60_days,
        delinquencies_over90_days: r.delinquencies_over90_days,
        dti_wprosper_loan: r.dti_wprosper_loan,
        effective_yield: r.effective_yield,
        employment_status_description: r.employment_status_description,
        estimated_loss_rate: r.estimated_loss_rate,
        estimated_return: r.estimated_return,
        fico_score: r.fico_score.parse()?,
        first_recorded_credit_line: parse_time(
            "first_recorded_credit_line",
            &r.first_recorded_credit_line,
        )?,
        funding_threshold: r.funding_threshold,
        income_range: IncomeRange::try_from(r.income_range)?,
        income_range_description: r.income_range_description,
        income_verifiable: r.income_verifiable,
        inquiries_last6_months: r.inquiries_last6_months,
        installment_balance: r.installment_balance,
        investment_type_description: r.investment_type_description,
        investment_type_id: r.investment_typeid,
        is_homeowner: r.is_homeowner,
        last_updated_date: parse_time("last_updated_date", &r.last_updated_date)?,
        lender_indicator: r.lender_indicator,
        lender_yield: r.lender_yield,
        listing_amount: r.listing_amount,
        listing_category_id: r.listing_category_id,
        listing_creation_date: parse_time("listing_creation_date", &r.listing_creation_date)?,
        listing_end_date: parse_time("listing_end_date", &r.listing_end_date)?,
        listing_monthly_payment: r.listing_monthly_payment,
        listing_number: ListingNumber(r.listing_number),
        listing_start_date: parse_time("listing_start_date", &r.listing_start_date)?,
        listing_status: ListingStatus::try_from(r.listing_status)?,
        listing_status_reason: r.listing_status_reason,
        listing_term: r.listing_term,
        listing_title: r.listing_title,
        max_prior_prosper_loan: r.max_prior_prosper_loan,
        member_key: r.member_key,
        min_prior_prosper_loan: r.min_prior_prosper_loan,
        monthly_debt: r.monthly_debt,
        months_employed: r.months_employed,
        now_delinquent_derog: r.now_delinquent_derog,
        occupation: r.occupation,
        oldest_trade_open_date: parse_old_date(
            "oldest_trade_open_date",
            &r.oldest_trade_open_date,
        )?,
        open_credit_lines: r.open_credit_lines,
        partial_funding_indicator: r.partial_funding_indicator,
        percent_funded: r.percent_funded,
        prior_prosper_loan_earliest_pay_off: r.prior_prosper_loan_earliest_pay_off,
        prior_prosper_loans: r.prior_prosper_loans,
        prior_prosper_loans31dpd: r.prior_prosper_loans31dpd,
        prior_prosper_loans61dpd: r.prior_prosper_loans61dpd,
        prior_prosper_loans_active: r.prior_prosper_loans_active,
        prior_prosper_loans_balance_outstanding: r.prior_prosper_loans_balance_outstanding,
        prior_prosper_loans_cycles_billed: r.prior_prosper_loans_cycles_billed,
        prior_prosper_loans_late_cycles: r.prior_prosper_loans_late_cycles,
        prior_prosper_loans_late_payments_one_month_plus: r
            .prior_prosper_loans_late_payments_one_month_plus,
        prior_prosper_loans_ontime_payments: r.prior_prosper_loans_ontime_payments,
        prior_prosper_loans_principal_borrowed: r.prior_prosper_loans_principal_borrowed,
        prior_prosper_loans_principal_outstanding: r.prior_prosper_loans_principal_outstanding,
        prosper_rating: r.prosper_rating.parse()?,
        prosper_score: r.prosper_score,
        public_records_last10_years: r.public_records_last10_years,
        public_records_last12_months: r.public_records_last12_months,
        real_estate_balance: r.real_estate_balance,
        real_estate_payment: r.real_estate_payment,
        revolving_available_percent: r.revolving_available_percent,
        revolving_balance: r.revolving_balance,
        satisfactory_accounts: r.satisfactory_accounts,
        score_x: r.scorex,
        score_x_change: r.scorex_change,
        stated_monthly_income: r.stated_monthly_income,
        total_inquiries: r.total_inquiries,
        total_open_revolving_accounts: r.total_open_revolving_accounts,
        total_trade_items: r.total_trade_items,
        verification_stage: r.verification_stage,
        was_delinquent_derog: r.was_delinquent_derog,
        whole_loan_end_date: parse_time("whole_loan_end_date", &r.whole_loan_end_date)?,
        whole_loan_start_date: parse_time("whole_loan_start_date", &r.whole_loan_start_date)?,
    })
}
