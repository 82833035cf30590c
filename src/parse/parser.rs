use super::lexer::{Field, Lexer, Line};
use crate::utils::{parse_amount, parse_date};
use crate::{Error, ErrorType, ExpenseRecord, Location, Source, SrcFile};
use std::sync::Arc;

/// Name given to the input text by [`parse_expenses`].
pub const DEFAULT_SRC_FILE: &str = "<input>";

/// Parses expense lines one by one.
///
/// The parser is an iterator of `Result`s in input order. Comment lines are
/// skipped, and after the first error it yields nothing more, so collecting
/// into `Result<Vec<_>, _>` stops at the first malformed line.
pub struct Parser<'source> {
    lexer: Lexer<'source>,
    file: SrcFile,
    failed: bool,
}

impl<'source> Parser<'source> {
    pub fn new(text: &'source str, file: SrcFile) -> Self {
        Parser {
            lexer: Lexer::new(text),
            file,
            failed: false,
        }
    }

    fn src_from(&self, start: Location, end: Location) -> Source {
        Source {
            file: self.file.clone(),
            start,
            end,
        }
    }

    fn field_src(&self, field: &Field) -> Source {
        self.src_from(field.start, field.end)
    }

    fn parse_line(&self, line: &Line<'source>) -> Result<ExpenseRecord, Error> {
        match line.fields.as_slice() {
            [date, amount, currency] => {
                let date = parse_date(date.text, &self.field_src(date))?;
                let amount = parse_amount(amount.text, &self.field_src(amount))?;
                Ok(ExpenseRecord::new(date, amount, currency.text))
            }
            fields => Err(Error {
                msg: format!(
                    "Expect 3 space-separated fields (date amount currency), found {} in {:?}.",
                    fields.len(),
                    line.text
                ),
                src: self.src_from(line.start, line.end),
                r#type: ErrorType::MalformedLine,
            }),
        }
    }

    /// Parses all remaining lines, stopping at the first error.
    pub fn parse(self) -> Result<Vec<ExpenseRecord>, Error> {
        self.collect()
    }
}

impl<'source> Iterator for Parser<'source> {
    type Item = Result<ExpenseRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while let Some(line) = self.lexer.next() {
            if line.is_comment() {
                log::trace!("{}:{}: skipped comment", self.file, line.start.line);
                continue;
            }
            let result = self.parse_line(&line);
            match &result {
                Ok(record) => log::trace!("{}:{}: {}", self.file, line.start.line, record),
                Err(error) => {
                    log::debug!("{}", error);
                    self.failed = true;
                }
            }
            return Some(result);
        }
        None
    }
}

impl<'source> std::iter::FusedIterator for Parser<'source> {}

/// Parses every line of `text` into an [`ExpenseRecord`], in order.
///
/// Lines starting with `#` are ignored. Any other line must read
/// `YYYY-MM-DD AMOUNT CURRENCY` with single spaces between the fields; the
/// first line that does not is returned as the error.
///
/// ```
/// let records = expenses::parse_expenses("# header\n2023-01-02 -34.01 USD").unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].currency(), "USD");
/// ```
pub fn parse_expenses(text: &str) -> Result<Vec<ExpenseRecord>, Error> {
    let parser = Parser::new(text, Arc::new(DEFAULT_SRC_FILE.to_string()));
    let records = parser.parse()?;
    log::debug!("parsed {} expense records", records.len());
    Ok(records)
}
