pub use chrono::NaiveDate as Date;
use getset::{CopyGetters, Getters};
pub use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Representing a location, line number and column number, in the input text.
/// Both start from 1 and columns count characters, not bytes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    pub fn advance(&self, width: usize) -> Self {
        Location {
            col: self.col + width,
            line: self.line,
        }
    }
}

impl From<(usize, usize)> for Location {
    fn from(tuple: (usize, usize)) -> Self {
        Location {
            line: tuple.0,
            col: tuple.1,
        }
    }
}

/// A string wrapped in [`Arc`](std::sync::Arc) naming where the input text
/// came from.
pub type SrcFile = Arc<String>;

/// Represents a range in the input text, used for locating errors.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Source {
    pub file: SrcFile,
    pub start: Location,
    pub end: Location,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.start.line, self.start.col)
    }
}

/// Kinds of errors that can stop the parsing of expense lines.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// A non-comment line does not split into exactly three fields.
    MalformedLine,
    /// The date field is not a `YYYY-MM-DD` calendar date.
    InvalidDate,
    /// The amount field is not a number.
    InvalidAmount,
}

/// Contains the full information of an error.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    pub msg: String,
    pub src: Source,
    pub r#type: ErrorType,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}: {}\n  {}:{}:{}",
            self.r#type, self.msg, self.src.file, self.src.start.line, self.src.start.col
        )
    }
}

impl std::error::Error for Error {}

pub type Currency = String;

/// One expense: the date it happened, the signed amount (negative for debits),
/// and the currency code exactly as written.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct ExpenseRecord {
    /// Returns the date of the expense.
    #[getset(get_copy = "pub")]
    date: Date,

    /// Returns the signed amount.
    #[getset(get_copy = "pub")]
    amount: Decimal,

    /// Returns the currency code.
    #[getset(get = "pub")]
    currency: Currency,
}

impl ExpenseRecord {
    pub fn new(date: Date, amount: Decimal, currency: impl Into<Currency>) -> Self {
        ExpenseRecord {
            date,
            amount,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.amount, self.currency)
    }
}

impl From<ExpenseRecord> for (Date, Decimal, Currency) {
    fn from(record: ExpenseRecord) -> Self {
        (record.date, record.amount, record.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_input_format() {
        let record = ExpenseRecord::new(
            Date::from_ymd_opt(2023, 1, 2).unwrap(),
            Decimal::from_str("-34.01").unwrap(),
            "USD",
        );
        assert_eq!(record.to_string(), "2023-01-02 -34.01 USD");
    }

    #[test]
    fn into_triple() {
        let date = Date::from_ymd_opt(2023, 1, 3).unwrap();
        let amount = Decimal::from_str("2.59").unwrap();
        let record = ExpenseRecord::new(date, amount, "DKK");
        let triple: (Date, Decimal, Currency) = record.into();
        assert_eq!(triple, (date, amount, "DKK".to_string()));
    }

    #[test]
    fn error_display_points_at_source() {
        let error = Error {
            msg: "Invalid date: 2023/01/02.".to_string(),
            src: Source {
                file: Arc::new("<input>".to_string()),
                start: (3, 1).into(),
                end: (3, 11).into(),
            },
            r#type: ErrorType::InvalidDate,
        };
        assert_eq!(
            error.to_string(),
            "InvalidDate: Invalid date: 2023/01/02.\n  <input>:3:1"
        );
        assert_eq!(error.src.to_string(), "<input>:3:1");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn record_serde_round_trip() {
        let record = ExpenseRecord::new(
            Date::from_ymd_opt(2023, 1, 3).unwrap(),
            Decimal::from_str("-2.72").unwrap(),
            "EUR",
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.amount().to_string(), "-2.72");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn error_serde_round_trip() {
        let error = Error {
            msg: "Invalid amount \"abc\".".to_string(),
            src: Source {
                file: Arc::new("january.txt".to_string()),
                start: (2, 12).into(),
                end: (2, 15).into(),
            },
            r#type: ErrorType::InvalidAmount,
        };
        let json = serde_json::to_string(&error).unwrap();
        let back: Error = serde_json::from_str(&json).unwrap();
        assert_eq!(back, error);
    }
}
