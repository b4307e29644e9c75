use log::trace;

use crate::{error::CaseError, raw_input::RawInput, style::Style, word_sequence::WordSequence};

/// Trimmed, non-empty text that passed the character check of a style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedText<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> ValidatedText<'a> {
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn style(&self) -> Style {
        self.style
    }
}

/// Convert `input` into `style`.
///
/// Input is trimmed first, and text that is empty after trimming converts
/// to an empty string for every style.
///
/// ```
/// use string_proc::{converter::convert, style::Style};
///
/// assert_eq!(convert("helloWorld", Style::Kebab).unwrap(), "hello-world");
/// assert_eq!(convert("hello_world again", Style::Camel).unwrap(), "helloWorldAgain");
/// assert!(convert(123, Style::Dot).is_err());
/// ```
pub fn convert<'a>(input: impl Into<RawInput<'a>>, style: Style) -> Result<String, CaseError> {
    let text = input.into().into_text()?;

    let Some(validated) = validate(&text, style)? else {
        return Ok(String::new());
    };

    Ok(tokenize(validated).to_style(style))
}

/// Trim `text` and check it against the allowed characters of `style`.
/// Returns `None` when nothing is left after trimming.
pub fn validate(text: &str, style: Style) -> Result<Option<ValidatedText<'_>>, CaseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if !style.accepts(trimmed) {
        return Err(CaseError::InvalidCharacters {
            style,
            input: trimmed.to_string(),
        });
    }

    Ok(Some(ValidatedText {
        text: trimmed,
        style,
    }))
}

/// Split validated text into lowercase words with the boundary rule of the
/// style it was validated for
pub fn tokenize(validated: ValidatedText<'_>) -> WordSequence {
    let descriptor = validated.style.descriptor();
    let words: WordSequence = (descriptor.tokenize)(validated.text).into_iter().collect();
    trace!(
        "Tokenized {:?} for {}: {:?}",
        validated.text,
        validated.style,
        words.words()
    );
    words
}

/// Convert to camelCase format (brewCoffee)
pub fn to_camel_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Style::Camel)
}

/// Convert to kebab-case format (brew-coffee)
pub fn to_kebab_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Style::Kebab)
}

/// Convert to dot.case format (brew.coffee)
pub fn to_dot_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Style::Dot)
}

/// Convert to PascalCase format (BrewCoffee)
pub fn to_pascal_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Style::Pascal)
}

/// Convert to snake_case format (brew_coffee)
pub fn to_snake_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Style::Snake)
}
