use crate::style::Style;

/// Ordered lowercase words of a piece of text.
///
/// Never holds an empty word, and keeps the words in the order they
/// appeared in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence {
    content: Vec<String>,
}

impl<'a> FromIterator<&'a str> for WordSequence {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self {
            content: iter
                .into_iter()
                .filter(|word| !word.is_empty())
                .map(|word| word.to_lowercase())
                .collect(),
        }
    }
}

impl WordSequence {
    pub fn words(&self) -> &[String] {
        &self.content
    }

    pub fn into_words(self) -> Vec<String> {
        self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Join the words unchanged with `separator`
    pub fn join(&self, separator: &str) -> String {
        self.content.join(separator)
    }

    /// Format the words with the casing rule and separator of `style`
    pub fn to_style(&self, style: Style) -> String {
        let descriptor = style.descriptor();
        let mut result = String::new();
        for (i, word) in self.content.iter().enumerate() {
            if i > 0 {
                result.push_str(descriptor.separator);
            }
            result.push_str(&(descriptor.case_word)(i, word));
        }
        result
    }
}
