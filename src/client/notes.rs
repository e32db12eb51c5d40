use super::{parse_time::parse_date, Client, Error};
use crate::{
    thin::{self, RawApi},
    types::{DefaultReason, ListingNumber, Note, NoteStatus, NotesResponse, ParseError},
};

impl<R> Client<R>
where
    R: RawApi,
{
    /// A page of the notes the user owns, starting at `offset`.
    pub async fn notes(&self, offset: u32, limit: u32) -> Result<NotesResponse, Error<R::Error>> {
        let raw = self.raw.notes(offset, limit).await.map_err(Error::Api)?;
        Ok(parse_notes_response(raw)?)
    }
}

fn parse_notes_response(r: thin::NotesResponse) -> Result<NotesResponse, ParseError> {
    let result = r.result.into_iter().map(parse_note).collect::<Result<_, _>>()?;
    Ok(NotesResponse {
        result,
        result_count: r.result_count,
        total_count: r.total_count,
    })
}

fn parse_note(r: thin::NoteResult) -> Result<Note, ParseError> {
    // Zero means the note has not defaulted.
    let note_default_reason = match r.note_default_reason {
        0 => None,
        reason => Some(DefaultReason::try_from(reason)?),
    };

    Ok(Note {
        age_in_months: r.age_in_months,
        amount_borrowed: r.amount_borrowed,
        borrower_rate: r.borrower_rate,
        days_past_due: r.days_past_due,
        debt_sale_proceeds_received_pro_rata_share: r.debt_sale_proceeds_received_pro_rata_share,
        interest_paid_pro_rata_share: r.interest_paid_pro_rata_share,
        is_sold: r.is_sold,
        late_fees_paid_pro_rata_share: r.late_fees_paid_pro_rata_share,
        listing_number: ListingNumber(r.listing_number),
        loan_note_id: r.loan_note_id,
        loan_number: r.loan_number,
        next_payment_due_amount_pro_rata_share: r.next_payment_due_amount_pro_rata_share,
        next_payment_due_date: parse_date("next_payment_due_date", &r.next_payment_due_date)?,
        note_default_reason_description: r.note_default_reason_description,
        note_default_reason,
        note_ownership_amount: r.note_ownership_amount,
        note_sale_fees_paid: r.note_sale_fees_paid,
        note_sale_gross_amount_received: r.note_sale_gross_amount_received,
        note_status_description: r.note_status_description,
        note_status: NoteStatus::try_from(r.note_status)?,
        origination_date: parse_date("origination_date", &r.origination_date)?,
        principal_balance_pro_rata_share: r.principal_balance_pro_rata_share,
        principal_paid_pro_rata_share: r.principal_paid_pro_rata_share,
        prosper_fees_paid_pro_rata_share: r.prosper_fees_paid_pro_rata_share,
        prosper_rating: r.prosper_rating.parse()?,
        service_fees_paid_pro_rata_share: r.service_fees_paid_pro_rata_share,
        term: r.term,
    })
}
