use serde_json::json;
use string_proc::{CaseError, RawInput, Style, convert};

fn invalid_type(actual: &str) -> Result<String, CaseError> {
    Err(CaseError::InvalidType {
        actual: actual.to_string(),
    })
}

#[test]
fn test_numbers_are_rejected_with_their_type() {
    for style in Style::ALL {
        assert_eq!(convert(123, style), invalid_type("i32"));
        assert_eq!(convert(123_u64, style), invalid_type("u64"));
        assert_eq!(convert(0.5_f32, style), invalid_type("f32"));
    }
}

#[test]
fn test_absence_is_rejected() {
    for style in Style::ALL {
        assert_eq!(convert(None::<String>, style), invalid_type("null"));
        assert_eq!(convert(&json!(null), style), invalid_type("null"));
    }
}

#[test]
fn test_json_values() {
    assert_eq!(convert(&json!(123), Style::Dot), invalid_type("number"));
    assert_eq!(convert(&json!(true), Style::Dot), invalid_type("boolean"));
    assert_eq!(convert(&json!(["a"]), Style::Dot), invalid_type("array"));
    assert_eq!(
        convert(&json!("dot case"), Style::Dot),
        Ok("dot.case".to_string())
    );
}

#[test]
fn test_symbols_and_digits_are_rejected() {
    for style in [Style::Camel, Style::Dot, Style::Pascal, Style::Snake] {
        for input in ["5n2M", "hello-world", "hello.world", "a\tb", "hi!"] {
            assert!(
                matches!(
                    convert(input, style),
                    Err(CaseError::InvalidCharacters { style: s, .. }) if s == style
                ),
                "Expected rejection of '{}' for {}",
                input,
                style
            );
        }
    }
}

#[test]
fn test_blank_input_is_empty_for_every_style() {
    for style in Style::ALL {
        for input in ["", "   ", "\t\n"] {
            assert_eq!(convert(input, style), Ok(String::new()));
        }
    }
}

#[test]
fn test_type_is_checked_before_content() {
    let input = RawInput::NonText("object");
    assert_eq!(convert(input, Style::Kebab), invalid_type("object"));
}
