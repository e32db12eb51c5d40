use serde::{Deserialize, Serialize};

use super::{Client, Error};
use crate::auth::TokenProvider;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesResponse {
    pub result: Vec<NoteResult>,
    pub result_count: i64,
    pub total_count: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteResult {
    pub loan_number: i64,
    pub amount_borrowed: f64,
    pub borrower_rate: f64,
    pub prosper_rating: String,
    pub term: i64,
    pub age_in_months: i64,
    pub origination_date: String,
    pub days_past_due: i64,
    pub principal_balance_pro_rata_share: f64,
    pub service_fees_paid_pro_rata_share: f64,
    pub principal_paid_pro_rata_share: f64,
    pub interest_paid_pro_rata_share: f64,
    pub prosper_fees_paid_pro_rata_share: f64,
    pub late_fees_paid_pro_rata_share: f64,
    pub debt_sale_proceeds_received_pro_rata_share: f64,
    pub next_payment_due_amount_pro_rata_share: f64,
    pub next_payment_due_date: String,
    pub loan_note_id: String,
    pub listing_number: i64,
    pub note_ownership_amount: f64,
    pub note_sale_gross_amount_received: f64,
    pub note_sale_fees_paid: f64,
    pub note_status: i64,
    pub note_status_description: String,
    /// Zero when the note has not defaulted.
    pub note_default_reason: i64,
    pub note_default_reason_description: String,
    pub is_sold: bool,
}

impl<T> Client<T>
where
    T: TokenProvider,
{
    /// A page of the notes the user owns.
    ///
    /// <https://developers.prosper.com/docs/investor/notes-api/>
    pub async fn notes(&self, offset: u32, limit: u32) -> Result<NotesResponse, Error<T::Error>> {
        let url = self.url(&format!("/notes/?offset={}&limit={}", offset, limit));
        self.get(&url).await
    }
}
