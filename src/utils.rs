//! Converters from the text of a single field to typed values.

use crate::{Date, Decimal, Error, ErrorType, Source};

/// The only accepted date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Only digits and `-`, with a four-digit year. chrono alone would also take a
/// signed or short year and whitespace before each number.
fn has_date_layout(date_str: &str) -> bool {
    date_str.bytes().all(|b| b.is_ascii_digit() || b == b'-')
        && date_str.split('-').next().map_or(false, |year| year.len() == 4)
}

/// Parses a [`Date`](crate::Date) in `YYYY-MM-DD` layout. Month and day may
/// omit the leading zero.
pub fn parse_date(date_str: &str, src: &Source) -> Result<Date, Error> {
    if !has_date_layout(date_str) {
        return Err(Error {
            msg: format!("Invalid date {:?}: expect YYYY-MM-DD.", date_str),
            src: src.clone(),
            r#type: ErrorType::InvalidDate,
        });
    }
    Date::parse_from_str(date_str, DATE_FORMAT).map_err(|e| Error {
        msg: format!("Invalid date {:?}: {}.", date_str, e),
        src: src.clone(),
        r#type: ErrorType::InvalidDate,
    })
}

/// Parses a signed [`Decimal`](crate::Decimal). Scientific notation such as
/// `1.5e3` is accepted as well.
pub fn parse_amount(num_str: &str, src: &Source) -> Result<Decimal, Error> {
    num_str
        .parse::<Decimal>()
        .or_else(|e| {
            if num_str.contains(|c| c == 'e' || c == 'E') {
                Decimal::from_scientific(num_str)
            } else {
                Err(e)
            }
        })
        .map_err(|e| Error {
            msg: format!("Invalid amount {:?}: {}.", num_str, e),
            src: src.clone(),
            r#type: ErrorType::InvalidAmount,
        })
}
