use string_proc::{CaseError, Style, convert};

use crate::all_strings;

#[test]
fn test_letters_never_fail_kebab() {
    for input in all_strings(&['a', 'b', 'A', 'B'], 5) {
        let result = convert(input.as_str(), Style::Kebab)
            .unwrap_or_else(|e| panic!("'{}' failed: {}", input, e));

        assert!(
            result.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
            "Unexpected output '{}' for '{}'",
            result,
            input
        );
        assert!(!result.starts_with('-') && !result.ends_with('-'));
        assert!(!result.contains("--"));
        assert_eq!(result.replace('-', ""), input.to_lowercase());
    }
}

#[test]
fn test_digit_or_symbol_always_fails_kebab() {
    for input in all_strings(&['a', 'Z', '1', '$', '_'], 4) {
        if input.chars().all(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        assert!(
            matches!(
                convert(input.as_str(), Style::Kebab),
                Err(CaseError::InvalidCharacters { .. })
            ),
            "Expected rejection for: '{}'",
            input
        );
    }
}

#[test]
fn test_separated_styles_keep_letters_in_order() {
    for input in all_strings(&['a', 'B', ' ', '_'], 5) {
        let letters: String = input
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_lowercase();

        let dot = convert(input.as_str(), Style::Dot).unwrap();
        assert_eq!(dot.replace('.', ""), letters);
        assert!(!dot.contains(".."), "Empty word in '{}' for '{}'", dot, input);

        let camel = convert(input.as_str(), Style::Camel).unwrap();
        assert_eq!(camel.to_lowercase(), letters);
        assert!(!camel.starts_with(|c: char| c.is_ascii_uppercase()));
    }
}
