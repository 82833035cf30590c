use super::Token;
use crate::Location;
use logos::{Lexer as LogosLexer, Logos};

/// The text between two single spaces of a line. Two adjacent spaces enclose
/// an empty field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'source> {
    pub text: &'source str,
    pub start: Location,
    pub end: Location,
}

/// A line of input without its terminator, split into fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'source> {
    pub text: &'source str,
    pub fields: Vec<Field<'source>>,
    pub start: Location,
    pub end: Location,
}

impl<'source> Line<'source> {
    #[inline]
    pub fn is_comment(&self) -> bool {
        self.text.starts_with('#')
    }
}

/// Splits input into [`Line`]s. A terminator at the very end of the input does
/// not open another line.
pub struct Lexer<'source> {
    llex: LogosLexer<'source, Token>,
    src: &'source str,
    offset: usize,
    location: Location,
}

impl<'source> Lexer<'source> {
    pub fn new(src: &'source str) -> Self {
        Lexer {
            llex: Token::lexer(src),
            src,
            offset: 0,
            location: (1, 1).into(),
        }
    }

    fn field(&self, start_byte: usize, start: Location) -> Field<'source> {
        Field {
            text: &self.src[start_byte..self.offset],
            start,
            end: self.location,
        }
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Line<'source>;

    fn next(&mut self) -> Option<Self::Item> {
        let line_byte = self.offset;
        let line_start = self.location;
        let mut field_byte = self.offset;
        let mut field_start = self.location;
        let mut fields = Vec::new();
        let mut seen = false;
        while let Some(token) = self.llex.next() {
            seen = true;
            let span = self.llex.span();
            match token {
                Token::NewLine => {
                    fields.push(self.field(field_byte, field_start));
                    let line = Line {
                        text: &self.src[line_byte..self.offset],
                        fields,
                        start: line_start,
                        end: self.location,
                    };
                    self.offset = span.end;
                    self.location.line += 1;
                    self.location.col = 1;
                    return Some(line);
                }
                Token::Space => {
                    fields.push(self.field(field_byte, field_start));
                    self.offset = span.end;
                    self.location = self.location.advance(1);
                    field_byte = self.offset;
                    field_start = self.location;
                }
                Token::Text | Token::Error => {
                    self.location = self.location.advance(self.llex.slice().chars().count());
                    self.offset = span.end;
                }
            }
        }
        if !seen {
            return None;
        }
        fields.push(self.field(field_byte, field_start));
        Some(Line {
            text: &self.src[line_byte..self.offset],
            fields,
            start: line_start,
            end: self.location,
        })
    }
}
