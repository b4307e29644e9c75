use std::borrow::Cow;

use serde_json::Value;

use crate::error::CaseError;

/// Caller supplied value of any type.
///
/// Only text can be converted. Everything else is kept as the name of its
/// runtime type so the failure can say what was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput<'a> {
    Text(Cow<'a, str>),
    NonText(&'static str),
}

impl<'a> RawInput<'a> {
    /// Name of the type the value had when it was supplied
    pub fn type_name(&self) -> &'static str {
        match self {
            RawInput::Text(_) => "string",
            RawInput::NonText(name) => *name,
        }
    }

    pub fn into_text(self) -> Result<Cow<'a, str>, CaseError> {
        match self {
            RawInput::Text(text) => Ok(text),
            RawInput::NonText(name) => Err(CaseError::InvalidType {
                actual: name.to_string(),
            }),
        }
    }
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(value: &'a str) -> Self {
        RawInput::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for RawInput<'a> {
    fn from(value: &'a String) -> Self {
        RawInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for RawInput<'_> {
    fn from(value: String) -> Self {
        RawInput::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for RawInput<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        RawInput::Text(value)
    }
}

/// Absence is reported as `null`
impl<'a, T> From<Option<T>> for RawInput<'a>
where
    T: Into<RawInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => RawInput::NonText("null"),
        }
    }
}

/// JSON values report their JSON type name
impl<'a> From<&'a Value> for RawInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => RawInput::Text(Cow::Borrowed(s.as_str())),
            Value::Null => RawInput::NonText("null"),
            Value::Bool(_) => RawInput::NonText("boolean"),
            Value::Number(_) => RawInput::NonText("number"),
            Value::Array(_) => RawInput::NonText("array"),
            Value::Object(_) => RawInput::NonText("object"),
        }
    }
}

macro_rules! non_text_input {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawInput<'_> {
                fn from(_: $ty) -> Self {
                    RawInput::NonText(std::any::type_name::<$ty>())
                }
            }
        )*
    };
}

non_text_input!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
);
