use super::{parse_time::parse_date, Client, Error};
use crate::{
    thin::{self, RawApi},
    types::{AccountInformation, ParseError},
};

impl<R> Client<R>
where
    R: RawApi,
{
    /// Balances and note summaries for the user's account.
    pub async fn account(&self) -> Result<AccountInformation, Error<R::Error>> {
        let raw = self.raw.accounts().await.map_err(Error::Api)?;
        Ok(parse_account(raw)?)
    }
}

fn parse_account(r: thin::AccountsResponse) -> Result<AccountInformation, ParseError> {
    Ok(AccountInformation {
        available_cash_balance: r.available_cash_balance,
        total_principal_received_on_active_notes: r.total_principal_received_on_active_notes,
        outstanding_principal_on_active_notes: r.outstanding_principal_on_active_notes,
        last_withdraw_amount: r.last_withdraw_amount,
        last_deposit_amount: r.last_deposit_amount,
        last_deposit_date: parse_date("last_deposit_date", &r.last_deposit_date)?,
        pending_investments_primary_market: r.pending_investments_primary_market,
        pending_investments_secondary_market: r.pending_investments_secondary_market,
        pending_quick_invest_orders: r.pending_quick_invest_orders,
        total_amount_invested_on_active_notes: r.total_amount_invested_on_active_notes,
        total_account_value: r.total_account_value,
        inflight_gross: r.inflight_gross,
        last_withdraw_date: parse_date("last_withdraw_date", &r.last_withdraw_date)?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::client::mock::{MockRawApi, MockRawError, RawCall};

    fn raw_account() -> thin::AccountsResponse {
        thin::AccountsResponse {
            available_cash_balance: 1.0,
            total_principal_received_on_active_notes: 2.0,
            outstanding_principal_on_active_notes: 3.0,
            last_withdraw_amount: 4.0,
            last_deposit_amount: 5.0,
            last_deposit_date: "2016-01-14".into(),
            pending_investments_primary_market: 6.0,
            pending_investments_secondary_market: 7.0,
            pending_quick_invest_orders: 8.0,
            total_amount_invested_on_active_notes: 9.0,
            total_account_value: 10.0,
            inflight_gross: 11.0,
            last_withdraw_date: "2016-02-15".into(),
            ..thin::AccountsResponse::default()
        }
    }

    #[tokio::test]
    async fn account_parses_dates() {
        let client = Client::from_raw(MockRawApi {
            accounts: raw_account(),
            ..MockRawApi::default()
        });

        let got = client.account().await.unwrap();

        assert_eq!(
            got,
            AccountInformation {
                available_cash_balance: 1.0,
                total_principal_received_on_active_notes: 2.0,
                outstanding_principal_on_active_notes: 3.0,
                last_withdraw_amount: 4.0,
                last_deposit_amount: 5.0,
                last_deposit_date: Some(Utc.with_ymd_and_hms(2016, 1, 14, 0, 0, 0).unwrap()),
                pending_investments_primary_market: 6.0,
                pending_investments_secondary_market: 7.0,
                pending_quick_invest_orders: 8.0,
                total_amount_invested_on_active_notes: 9.0,
                total_account_value: 10.0,
                inflight_gross: 11.0,
                last_withdraw_date: Some(Utc.with_ymd_and_hms(2016, 2, 15, 0, 0, 0).unwrap()),
            }
        );
        assert_eq!(client.raw.received(), vec![RawCall::Accounts]);
    }

    #[tokio::test]
    async fn account_without_activity_has_no_dates() {
        let client = Client::from_raw(MockRawApi {
            accounts: thin::AccountsResponse {
                available_cash_balance: 25.0,
                ..thin::AccountsResponse::default()
            },
            ..MockRawApi::default()
        });

        let got = client.account().await.unwrap();

        assert_eq!(got.last_deposit_date, None);
        assert_eq!(got.last_withdraw_date, None);
    }

    #[tokio::test]
    async fn account_rejects_malformed_date() {
        let client = Client::from_raw(MockRawApi {
            accounts: thin::AccountsResponse {
                last_deposit_date: "01/14/2016".into(),
                ..raw_account()
            },
            ..MockRawApi::default()
        });

        let err = client.account().await.unwrap_err();

        assert!(
            matches!(err, Error::Parse(ParseError::Time { kind: "last_deposit_date", .. })),
            "unexpected error: {:?}",
            err
        );
    }

    #[tokio::test]
    async fn account_passes_through_api_error() {
        let client = Client::from_raw(MockRawApi::failing());

        let err = client.account().await.unwrap_err();

        assert!(matches!(err, Error::Api(MockRawError)), "unexpected error: {:?}", err);
    }
}
