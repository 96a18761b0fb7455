//! Quote-aware record tokenizer.
//!
//! Splits CSV text into records while tracking physical line numbers.
//! Quoted fields may span lines and contain the delimiter; a doubled
//! quote inside a quoted field stands for one quote character. Leading
//! and trailing whitespace around a quoted field is ignored.

use std::iter::Peekable;
use std::str::Chars;

use super::options::ParseOptions;
use crate::error::CsvIssue;

/// One tokenized record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    /// 1-based physical line the record starts on.
    pub line: usize,
    /// Field values, trimmed.
    pub fields: Vec<String>,
    /// True for a line with nothing but whitespace on it.
    pub blank_line: bool,
}

/// Structural failure with the line it was detected on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenizeError {
    pub line: usize,
    pub issue: CsvIssue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Only whitespace seen in the current field.
    FieldStart,
    Unquoted,
    Quoted,
    /// Quoted field closed; only whitespace may follow before a separator.
    AfterQuote,
}

pub(crate) struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    delimiter: char,
    quote: char,
    line: usize,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str, options: ParseOptions) -> Self {
        Self {
            chars: text.chars().peekable(),
            delimiter: options.delimiter,
            quote: options.quote,
            line: 1,
            failed: false,
        }
    }

    /// Consumes a line break that started with `c`, folding `\r\n`.
    fn consume_line_break(&mut self, c: char) -> bool {
        match c {
            '\n' => {
                self.line += 1;
                true
            }
            '\r' => {
                if self.chars.peek() == Some(&'\n') {
                    self.chars.next();
                }
                self.line += 1;
                true
            }
            _ => false,
        }
    }

    fn read_record(&mut self) -> Result<Record, TokenizeError> {
        let start_line = self.line;
        let mut quote_line = start_line;
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut state = State::FieldStart;
        let mut any_quoted = false;

        while let Some(c) = self.chars.next() {
            match state {
                State::FieldStart => {
                    if c == self.quote {
                        current.clear();
                        quote_line = self.line;
                        any_quoted = true;
                        state = State::Quoted;
                    } else if c == self.delimiter {
                        fields.push(take_field(&mut current));
                    } else if self.consume_line_break(c) {
                        break;
                    } else {
                        current.push(c);
                        if !c.is_whitespace() {
                            state = State::Unquoted;
                        }
                    }
                }
                State::Unquoted => {
                    if c == self.delimiter {
                        fields.push(take_field(&mut current));
                        state = State::FieldStart;
                    } else if c == self.quote {
                        return Err(self.fail(self.line, CsvIssue::StrayQuote));
                    } else if self.consume_line_break(c) {
                        break;
                    } else {
                        current.push(c);
                    }
                }
                State::Quoted => {
                    if c == self.quote {
                        if self.chars.peek() == Some(&self.quote) {
                            self.chars.next();
                            current.push(c);
                        } else {
                            state = State::AfterQuote;
                        }
                    } else {
                        if c == '\n' || (c == '\r' && self.chars.peek() != Some(&'\n')) {
                            self.line += 1;
                        }
                        current.push(c);
                    }
                }
                State::AfterQuote => {
                    if c == self.delimiter {
                        fields.push(take_field(&mut current));
                        state = State::FieldStart;
                    } else if self.consume_line_break(c) {
                        break;
                    } else if !c.is_whitespace() {
                        return Err(self.fail(self.line, CsvIssue::MalformedTrailingQuote));
                    }
                }
            }
        }

        if state == State::Quoted {
            return Err(self.fail(quote_line, CsvIssue::UnterminatedQuote));
        }
        fields.push(take_field(&mut current));

        let blank_line = !any_quoted && fields.len() == 1 && fields[0].is_empty();
        Ok(Record {
            line: start_line,
            fields,
            blank_line,
        })
    }

    fn fail(&mut self, line: usize, issue: CsvIssue) -> TokenizeError {
        self.failed = true;
        TokenizeError { line, issue }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Record, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.chars.peek()?;
        Some(self.read_record())
    }
}

fn take_field(current: &mut String) -> String {
    let field = current.trim().to_string();
    current.clear();
    field
}
