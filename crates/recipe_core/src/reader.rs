//! Cursor-based reader for the `<item>` records of a recipe section.
//!
//! Each record has the shape
//! `<item><key><string>NAME</string></key><value><int>COUNT</int></value></item>`.
//! The boilerplate tags are checked one by one rather than skipped by length,
//! and ASCII whitespace between tags is accepted.

use std::error::Error;
use std::fmt;

const RECORD_OPEN: [&str; 3] = ["<item>", "<key>", "<string>"];
const NAME_CLOSE: [&str; 4] = ["</string>", "</key>", "<value>", "<int>"];
const VALUE_CLOSE: [&str; 3] = ["</int>", "</value>", "</item>"];
const DELIMITER: char = '<';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    UnexpectedTag {
        offset: usize,
        expected: &'static str,
    },
    UnterminatedField {
        offset: usize,
    },
    InvalidCount {
        name: String,
        value: String,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedTag { offset, expected } => {
                write!(f, "expected `{expected}` at offset {offset}")
            }
            Self::UnterminatedField { offset } => {
                write!(f, "field starting at offset {offset} has no closing tag")
            }
            Self::InvalidCount { name, value } => {
                write!(f, "count '{value}' for '{name}' is not a non-negative integer")
            }
        }
    }
}

impl Error for ScanError {}

/// One record as it appears in the section, before the count is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub offset: usize,
    pub name: &'a str,
    pub value: &'a str,
}

impl RawRecord<'_> {
    /// Digits only; signs and empty values are rejected.
    pub fn count(&self) -> Result<u32, ScanError> {
        let invalid = || ScanError::InvalidCount {
            name: self.name.to_string(),
            value: self.value.to_string(),
        };
        if !self.value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        self.value.parse::<u32>().map_err(|_| invalid())
    }
}

pub struct RecordReader<'a> {
    text: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> RecordReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            failed: false,
        }
    }

    pub fn read_record(&mut self) -> Result<RawRecord<'a>, ScanError> {
        self.skip_whitespace();
        let offset = self.pos;

        self.expect_tags(&RECORD_OPEN)?;
        let name = self.read_field()?;
        self.expect_tags(&NAME_CLOSE)?;
        let value = self.read_field()?;
        self.expect_tags(&VALUE_CLOSE)?;

        Ok(RawRecord {
            offset,
            name,
            value,
        })
    }

    fn expect_tags(&mut self, tags: &[&'static str]) -> Result<(), ScanError> {
        for &tag in tags {
            self.skip_whitespace();
            let text = self.text;
            if !text[self.pos..].starts_with(tag) {
                return Err(ScanError::UnexpectedTag {
                    offset: self.pos,
                    expected: tag,
                });
            }
            self.pos += tag.len();
        }
        Ok(())
    }

    /// Reads up to, not including, the next delimiter and leaves the cursor on it.
    fn read_field(&mut self) -> Result<&'a str, ScanError> {
        let text = self.text;
        let rest = &text[self.pos..];
        let Some(len) = rest.find(DELIMITER) else {
            return Err(ScanError::UnterminatedField { offset: self.pos });
        };
        self.pos += len;
        Ok(&rest[..len])
    }

    fn skip_whitespace(&mut self) {
        let text = self.text;
        let trimmed = text[self.pos..].trim_start_matches(|c: char| c.is_ascii_whitespace());
        self.pos = text.len() - trimmed.len();
    }
}

impl<'a> Iterator for RecordReader<'a> {
    type Item = Result<RawRecord<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.skip_whitespace();
        if self.pos >= self.text.len() {
            return None;
        }

        let record = self.read_record();
        if record.is_err() {
            self.failed = true;
        }
        Some(record)
    }
}
