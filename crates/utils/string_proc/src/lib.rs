pub mod converter;
pub mod error;
pub mod macros;
pub mod raw_input;
pub mod style;
pub mod tokenizer;
pub mod word_sequence;

pub use converter::{convert, tokenize, validate};
pub use error::CaseError;
pub use raw_input::RawInput;
pub use style::Style;
