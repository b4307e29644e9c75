use thiserror::Error;

use crate::style::Style;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    #[error("Input must be a valid string. Received: {actual}")]
    InvalidType { actual: String },

    #[error("Input contains invalid characters for {style} (only {} allowed): {input:?}", allowed_of(.style))]
    InvalidCharacters { style: Style, input: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown case style: {0}")]
pub struct ParseStyleError(pub String);

fn allowed_of(style: &Style) -> &'static str {
    style.descriptor().allowed_set
}
