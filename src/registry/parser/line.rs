use thiserror::Error;

use super::{Category, ParseCategoryError};

/// One `provider | category | value` data line.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordLine {
    pub provider: String,
    pub category: Category,
    pub value: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseRecordError {
    #[error("expected 3 pipe-delimited fields, found {0}")]
    WrongFieldCount(usize),

    #[error("provider and value must not be empty")]
    EmptyField,

    #[error("{0}")]
    UnknownCategory(#[from] ParseCategoryError),
}

fn parse_line(input: &str) -> Result<Option<RecordLine>, ParseRecordError> {
    let line = input.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    let [provider, category, value] = fields.as_slice() else {
        return Err(ParseRecordError::WrongFieldCount(fields.len()));
    };

    if provider.is_empty() || value.is_empty() {
        return Err(ParseRecordError::EmptyField);
    }

    Ok(Some(RecordLine {
        provider: provider.to_string(),
        category: category.parse()?,
        value: value.to_string(),
    }))
}

impl RecordLine {
    /// Returns `Ok(None)` for blank and `#` comment lines.
    pub fn parse(input: &str) -> Result<Option<Self>, ParseRecordError> {
        parse_line(input)
    }
}
