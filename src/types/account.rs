use chrono::{DateTime, Utc};
use serde::Serialize;

/// Balances and note summaries for the user's account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountInformation {
    pub available_cash_balance: f64,
    pub total_principal_received_on_active_notes: f64,
    pub outstanding_principal_on_active_notes: f64,
    pub last_withdraw_amount: f64,
    pub last_deposit_amount: f64,
    pub last_deposit_date: Option<DateTime<Utc>>,
    pub pending_investments_primary_market: f64,
    pub pending_investments_secondary_market: f64,
    pub pending_quick_invest_orders: f64,
    pub total_amount_invested_on_active_notes: f64,
    pub total_account_value: f64,
    pub inflight_gross: f64,
    pub last_withdraw_date: Option<DateTime<Utc>>,
}
