//! # expenses
//!
//! A library for parsing text-based expense lines. Each line holds a date, a
//! signed amount and a currency code separated by single spaces; lines starting
//! with `#` are comments.
//!
//! ```
//! use expenses::{parse_expenses, Date};
//!
//! let text = "2023-01-02 -34.01 USD\n2023-01-03 2.59 DKK\n2023-01-03 -2.72 EUR";
//! let records = parse_expenses(text).unwrap();
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[1].date(), Date::from_ymd_opt(2023, 1, 3).unwrap());
//! assert_eq!(records[2].amount().to_string(), "-2.72");
//! ```

mod expense;
pub mod parse;
pub mod utils;

pub use expense::*;
pub use parse::parse_expenses;
