use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::ParseStyleError, tokenizer};

/// Naming convention a string can be converted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Style {
    /// camelCase (brewCoffee)
    Camel,

    /// kebab-case (brew-coffee)
    Kebab,

    /// dot.case (brew.coffee)
    Dot,

    /// PascalCase (BrewCoffee)
    Pascal,

    /// snake_case (brew_coffee)
    Snake,
}

/// The four rules a style is made of.
///
/// Every conversion runs the same pipeline and only consults the
/// descriptor of the target style.
#[derive(Debug)]
pub struct StyleDescriptor {
    pub style: Style,

    /// Characters accepted in the trimmed input
    pub allowed: fn(char) -> bool,

    /// Human readable form of `allowed`, used in error messages
    pub allowed_set: &'static str,

    /// Splits validated text into raw (not yet lowercased) words
    pub tokenize: for<'a> fn(&'a str) -> Vec<&'a str>,

    /// Formats the lowercase word found at the given position
    pub case_word: fn(usize, &str) -> String,

    /// Placed between formatted words
    pub separator: &'static str,
}

const LETTERS: &str = "letters";
const LETTERS_SPACES_UNDERSCORES: &str = "letters, spaces, or underscores";

static CAMEL: StyleDescriptor = StyleDescriptor {
    style: Style::Camel,
    allowed: is_letter_or_separator,
    allowed_set: LETTERS_SPACES_UNDERSCORES,
    tokenize: tokenizer::split_separators,
    case_word: camel_word,
    separator: "",
};

static KEBAB: StyleDescriptor = StyleDescriptor {
    style: Style::Kebab,
    allowed: is_letter,
    allowed_set: LETTERS,
    tokenize: tokenizer::split_case_transitions,
    case_word: keep_word,
    separator: "-",
};

static DOT: StyleDescriptor = StyleDescriptor {
    style: Style::Dot,
    allowed: is_letter_or_separator,
    allowed_set: LETTERS_SPACES_UNDERSCORES,
    tokenize: tokenizer::split_separators,
    case_word: keep_word,
    separator: ".",
};

static PASCAL: StyleDescriptor = StyleDescriptor {
    style: Style::Pascal,
    allowed: is_letter_or_separator,
    allowed_set: LETTERS_SPACES_UNDERSCORES,
    tokenize: tokenizer::split_separators,
    case_word: pascal_word,
    separator: "",
};

static SNAKE: StyleDescriptor = StyleDescriptor {
    style: Style::Snake,
    allowed: is_letter_or_separator,
    allowed_set: LETTERS_SPACES_UNDERSCORES,
    tokenize: tokenizer::split_separators,
    case_word: keep_word,
    separator: "_",
};

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Camel,
        Style::Kebab,
        Style::Dot,
        Style::Pascal,
        Style::Snake,
    ];

    pub fn descriptor(self) -> &'static StyleDescriptor {
        match self {
            Style::Camel => &CAMEL,
            Style::Kebab => &KEBAB,
            Style::Dot => &DOT,
            Style::Pascal => &PASCAL,
            Style::Snake => &SNAKE,
        }
    }

    /// Name of the style, written in the style itself
    pub fn name(self) -> &'static str {
        match self {
            Style::Camel => "camelCase",
            Style::Kebab => "kebab-case",
            Style::Dot => "dot.case",
            Style::Pascal => "PascalCase",
            Style::Snake => "snake_case",
        }
    }

    /// Check if every character of `text` is in the allowed set of this style
    pub fn accepts(self, text: &str) -> bool {
        text.chars().all(self.descriptor().allowed)
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        let key = key.strip_suffix("case").unwrap_or(&key);

        match key {
            "camel" => Ok(Style::Camel),
            "kebab" => Ok(Style::Kebab),
            "dot" => Ok(Style::Dot),
            "pascal" => Ok(Style::Pascal),
            "snake" => Ok(Style::Snake),
            _ => Err(ParseStyleError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Style {
    type Error = ParseStyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Style> for String {
    fn from(value: Style) -> Self {
        value.name().to_string()
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_letter_or_separator(c: char) -> bool {
    c.is_ascii_alphabetic() || tokenizer::is_separator(c)
}

fn keep_word(_index: usize, word: &str) -> String {
    word.to_string()
}

fn camel_word(index: usize, word: &str) -> String {
    if index == 0 {
        word.to_string()
    } else {
        capitalize(word)
    }
}

fn pascal_word(_index: usize, word: &str) -> String {
    capitalize(word)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            result.push(first.to_ascii_uppercase());
            result.push_str(&chars.as_str().to_ascii_lowercase());
            result
        }
        None => String::new(),
    }
}
