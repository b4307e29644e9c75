use std::path::PathBuf;

use cfg_file::{config::ConfigFile, error::ConfigError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use string_proc::{CaseError, Style};

/// Case file bundled with this crate, kept equal to `CaseFile::sample()`
pub const BUNDLED_CASE_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/cases.toml");

/// List of conversions to demonstrate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    #[serde(default)]
    pub cases: Vec<DemoCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoCase {
    /// Any value, not only text. A missing input is `null`.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub input: Value,

    pub style: Style,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Expectation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    Output(String),
    InvalidType,
    InvalidCharacters,
}

impl Expectation {
    pub fn is_met_by(&self, result: &Result<String, CaseError>) -> bool {
        match (self, result) {
            (Expectation::Output(expected), Ok(output)) => expected == output,
            (Expectation::InvalidType, Err(CaseError::InvalidType { .. })) => true,
            (Expectation::InvalidCharacters, Err(CaseError::InvalidCharacters { .. })) => true,
            _ => false,
        }
    }
}

impl DemoCase {
    pub fn new(input: impl Into<Value>, style: Style, expected: Expectation) -> Self {
        Self {
            input: input.into(),
            style,
            expected: Some(expected),
        }
    }
}

impl ConfigFile for CaseFile {
    fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(PathBuf::from(BUNDLED_CASE_FILE))
    }
}

impl CaseFile {
    /// The usage examples the converters were first written with
    pub fn sample() -> Self {
        use Expectation::*;

        let output = |s: &str| Output(s.to_string());
        Self {
            cases: vec![
                DemoCase::new("helloWorld", Style::Kebab, output("hello-world")),
                DemoCase::new("HelloWorld", Style::Kebab, output("hello-world")),
                DemoCase::new("HELLO", Style::Kebab, output("hello")),
                DemoCase::new("simple", Style::Kebab, output("simple")),
                DemoCase::new("5n2M", Style::Kebab, InvalidCharacters),
                DemoCase::new(123, Style::Kebab, InvalidType),
                DemoCase::new("", Style::Kebab, output("")),
                DemoCase::new("camel case", Style::Camel, output("camelCase")),
                DemoCase::new("hello_world", Style::Camel, output("helloWorld")),
                DemoCase::new("hello_world again", Style::Camel, output("helloWorldAgain")),
                DemoCase::new("SINGLE", Style::Camel, output("single")),
                DemoCase::new("   ", Style::Camel, output("")),
                DemoCase::new(123, Style::Camel, InvalidType),
                DemoCase::new("5n2M", Style::Camel, InvalidCharacters),
                DemoCase::new("dot case", Style::Dot, output("dot.case")),
                DemoCase::new("hello_world again", Style::Dot, output("hello.world.again")),
                DemoCase::new("SINGLE", Style::Dot, output("single")),
                DemoCase::new("   ", Style::Dot, output("")),
                DemoCase::new(123, Style::Dot, InvalidType),
                DemoCase::new(Value::Null, Style::Dot, InvalidType),
                DemoCase::new("5n2M", Style::Dot, InvalidCharacters),
                DemoCase::new("my num value", Style::Pascal, output("MyNumValue")),
            ],
        }
    }
}
