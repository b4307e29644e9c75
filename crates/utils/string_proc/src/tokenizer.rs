/// Space or underscore
pub fn is_separator(c: char) -> bool {
    c == ' ' || c == '_'
}

/// Split on runs of spaces and underscores (`hello_world again` -> `hello`, `world`, `again`).
/// Consecutive separators never produce empty words.
pub fn split_separators(text: &str) -> Vec<&str> {
    text.split(is_separator)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Split on letter casing transitions, for text that has no separators.
///
/// A boundary is placed:
/// - between a lowercase and an uppercase letter (`helloWorld` -> `hello`, `World`)
/// - before an uppercase letter that follows another uppercase letter and
///   precedes a lowercase one (`XMLParser` -> `XML`, `Parser`)
///
/// Text without any transition (`HELLO`, `simple`) stays one word.
/// Expects ASCII text, as validation guarantees, so byte offsets are char offsets.
pub fn split_case_transitions(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut words = Vec::new();
    let mut start = 0;

    for i in 1..bytes.len() {
        let prev = bytes[i - 1];
        let curr = bytes[i];

        let lower_to_upper = prev.is_ascii_lowercase() && curr.is_ascii_uppercase();
        let acronym_end = prev.is_ascii_uppercase()
            && curr.is_ascii_uppercase()
            && bytes.get(i + 1).is_some_and(|next| next.is_ascii_lowercase());

        if lower_to_upper || acronym_end {
            words.push(&text[start..i]);
            start = i;
        }
    }

    if start < text.len() {
        words.push(&text[start..]);
    }
    words
}
