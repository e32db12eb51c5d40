use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::types::ParseError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
const OLD_DATE_FORMAT: &str = "%m%d%Y";

const OLDER_THAN_FIVE_YEARS: &str = "1";
const OLDER_THAN_TEN_YEARS: &str = "2";

/// Parses a `YYYY-MM-DD` date as midnight UTC.
pub(crate) fn parse_date(
    kind: &'static str,
    value: &str,
) -> Result<Option<DateTime<Utc>>, ParseError> {
    if value.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|source| time_error(kind, value, source))?;
    Ok(Some(midnight(date)))
}

/// Parses a `YYYY-MM-DD HH:MM:SS +0000` timestamp.
pub(crate) fn parse_time(
    kind: &'static str,
    value: &str,
) -> Result<Option<DateTime<Utc>>, ParseError> {
    if value.is_empty() {
        return Ok(None);
    }
    let time = DateTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|source| time_error(kind, value, source))?;
    Ok(Some(time.with_timezone(&Utc)))
}

/// Parses an `MMDDYYYY` date. The server sends `1` or `2` in place of dates
/// older than five or ten years, and those carry no date.
pub(crate) fn parse_old_date(
    kind: &'static str,
    value: &str,
) -> Result<Option<DateTime<Utc>>, ParseError> {
    if value.is_empty() || value == OLDER_THAN_FIVE_YEARS || value == OLDER_THAN_TEN_YEARS {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(value, OLD_DATE_FORMAT)
        .map_err(|source| time_error(kind, value, source))?;
    Ok(Some(midnight(date)))
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

fn time_error(kind: &'static str, value: &str, source: chrono::ParseError) -> ParseError {
    ParseError::Time {
        kind,
        value: value.to_owned(),
        source,
    }
}
