use serde::{Deserialize, Serialize};

use super::{Client, Error};
use crate::auth::TokenProvider;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountsResponse {
    pub available_cash_balance: f64,
    pub pending_investments_primary_market: f64,
    pub pending_investments_secondary_market: f64,
    pub pending_quick_invest_orders: f64,
    pub total_principal_received_on_active_notes: f64,
    pub total_amount_invested_on_active_notes: f64,
    pub outstanding_principal_on_active_notes: f64,
    pub total_account_value: f64,
    pub inflight_gross: f64,
    pub last_deposit_amount: f64,
    pub last_deposit_date: String,
    pub last_withdraw_amount: f64,
    pub last_withdraw_date: String,
    pub external_user_id: String,
}

impl<T> Client<T>
where
    T: TokenProvider,
{
    /// Balances and note summaries for the user's account.
    ///
    /// <https://developers.prosper.com/docs/investor/accounts-api/>
    pub async fn accounts(&self) -> Result<AccountsResponse, Error<T::Error>> {
        self.get(&self.url("/accounts/prosper/")).await
    }
}
