use string_proc::{CaseError, Style, convert, kebab_case};

#[test]
fn test_kebab_scenarios() {
    let test_cases = vec![
        ("helloWorld", "hello-world"),
        ("HelloWorld", "hello-world"),
        ("HELLO", "hello"),
        ("simple", "simple"),
        ("brewCoffeeNow", "brew-coffee-now"),
        ("XMLParser", "xml-parser"),
        ("parseXMLDocument", "parse-xml-document"),
        ("\thelloWorld \n", "hello-world"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            convert(input, Style::Kebab).unwrap(),
            expected,
            "Failed for input: '{}'",
            input
        );
    }
}

#[test]
fn test_kebab_single_word_has_no_hyphen() {
    for input in ["HELLO", "hello", "X", "x"] {
        let result = kebab_case!(input).unwrap();
        assert!(!result.contains('-'), "Unexpected hyphen for: '{}'", input);
        assert_eq!(result, input.to_lowercase());
    }
}

#[test]
fn test_kebab_acronym_rules_as_observed() {
    // A trailing acronym has no following lowercase letter, so it stays glued
    // to the upper run it belongs to
    assert_eq!(convert("parseXML", Style::Kebab).unwrap(), "parse-xml");
    assert_eq!(convert("XMLHTTPRequest", Style::Kebab).unwrap(), "xmlhttp-request");
    assert_eq!(convert("ABc", Style::Kebab).unwrap(), "a-bc");
}

#[test]
fn test_kebab_rejects_non_letters() {
    for input in ["5n2M", "hello world", "hello_world", "hello-world", "caf\u{e9}"] {
        assert_eq!(
            convert(input, Style::Kebab),
            Err(CaseError::InvalidCharacters {
                style: Style::Kebab,
                input: input.to_string(),
            }),
            "Expected rejection for: '{}'",
            input
        );
    }
}
