use crate::case::validator::ValidatedString;
use crate::error::CaseError;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    static ref CASE_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    static ref UNDERSCORE_OR_SPACE: Regex = Regex::new(r"[_\s]+").unwrap();
    static ref PUNCTUATION_KEEP_HYPHEN: Regex = Regex::new(r"[^a-zA-Z0-9\s-]").unwrap();
    static ref PUNCTUATION: Regex = Regex::new(r"[^a-zA-Z0-9\s]").unwrap();
    static ref SPACE_OR_HYPHEN_RUN: Regex = Regex::new(r"[\s-]+").unwrap();
    static ref SPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// How `-` is treated while normalizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyphenRule {
    /// Hyphen is an intended word boundary
    Delimit,
    /// Hyphen is punctuation and gets removed
    Strip,
}

impl HyphenRule {
    fn punctuation(&self) -> &'static Regex {
        match self {
            HyphenRule::Delimit => &*PUNCTUATION_KEEP_HYPHEN,
            HyphenRule::Strip => &*PUNCTUATION,
        }
    }

    fn delimiter_run(&self) -> &'static Regex {
        match self {
            HyphenRule::Delimit => &*SPACE_OR_HYPHEN_RUN,
            HyphenRule::Strip => &*SPACE_RUN,
        }
    }
}

/// Ordered, non-empty list of lowercase ASCII alphanumeric words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    words: Vec<String>,
}

impl TokenSequence {
    pub fn first(&self) -> &str {
        &self.words[0]
    }

    pub fn rest(&self) -> &[String] {
        &self.words[1..]
    }

    pub fn join(&self, separator: &str) -> String {
        self.words.join(separator)
    }
}

#[cfg(test)]
impl TokenSequence {
    pub(crate) fn words(&self) -> &[String] {
        &self.words
    }
}

/// Break validated text into words.
///
/// Steps run in a fixed order: camelCase boundaries are split first, then underscores and
/// whitespace collapse, then punctuation is dropped, then remaining delimiters collapse. Each
/// step relies on the output of the previous one.
pub fn tokenize(
    input: ValidatedString<'_>,
    hyphens: HyphenRule,
) -> Result<TokenSequence, CaseError> {
    let text = CASE_BOUNDARY.replace_all(input.as_str(), "${1} ${2}");
    let text = replace(text, &UNDERSCORE_OR_SPACE, " ");
    let text = replace(text, hyphens.punctuation(), "");
    let text = replace(text, hyphens.delimiter_run(), " ");

    let words: Vec<String> = text
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect();

    if words.is_empty() {
        return Err(CaseError::NoAlphanumericContent);
    }

    Ok(TokenSequence { words })
}

fn replace<'a>(text: Cow<'a, str>, pattern: &Regex, with: &str) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => pattern.replace_all(s, with),
        Cow::Owned(s) => Cow::Owned(pattern.replace_all(&s, with).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::validator::validate;

    fn words(input: &str, hyphens: HyphenRule) -> Vec<String> {
        tokenize(validate(input).unwrap(), hyphens)
            .unwrap()
            .words()
            .to_vec()
    }

    #[test]
    fn test_camel_case_splitting() {
        assert_eq!(
            words("camelCaseWord", HyphenRule::Strip),
            vec!["camel", "case", "word"]
        );
        assert_eq!(
            words("PascalCase", HyphenRule::Strip),
            vec!["pascal", "case"]
        );
    }

    #[test]
    fn test_snake_case_splitting() {
        assert_eq!(
            words("snake__case_word", HyphenRule::Strip),
            vec!["snake", "case", "word"]
        );
        assert_eq!(words("SCREEN_NAME", HyphenRule::Strip), vec!["screen", "name"]);
    }

    #[test]
    fn test_punctuation_is_dropped() {
        assert_eq!(
            words("Hello, World!", HyphenRule::Delimit),
            vec!["hello", "world"]
        );
        assert_eq!(words("don't stop", HyphenRule::Strip), vec!["dont", "stop"]);
    }

    #[test]
    fn test_hyphen_rule() {
        assert_eq!(
            words("kebab-case--input", HyphenRule::Delimit),
            vec!["kebab", "case", "input"]
        );
        assert_eq!(
            words("kebab-case--input", HyphenRule::Strip),
            vec!["kebabcaseinput"]
        );
        assert_eq!(words("a - b", HyphenRule::Strip), vec!["a", "b"]);
    }

    #[test]
    fn test_digits() {
        assert_eq!(words("version2Beta", HyphenRule::Strip), vec!["version2", "beta"]);
        assert_eq!(words("html5parser", HyphenRule::Strip), vec!["html5parser"]);
        assert_eq!(words("ABC123", HyphenRule::Strip), vec!["abc123"]);
    }

    #[test]
    fn test_acronyms_are_not_split() {
        assert_eq!(words("XMLHttpRequest", HyphenRule::Strip), vec!["xmlhttp", "request"]);
    }

    #[test]
    fn test_non_ascii_is_stripped() {
        assert_eq!(words("café au lait", HyphenRule::Strip), vec!["caf", "au", "lait"]);
    }

    #[test]
    fn test_no_alphanumeric_content() {
        let validated = validate("!!! ??? ---").unwrap();
        assert_eq!(
            tokenize(validated, HyphenRule::Delimit),
            Err(CaseError::NoAlphanumericContent)
        );
        let validated = validate("___").unwrap();
        assert_eq!(
            tokenize(validated, HyphenRule::Strip),
            Err(CaseError::NoAlphanumericContent)
        );
    }

    #[test]
    fn test_sequence_accessors() {
        let validated = validate("user_id_value").unwrap();
        let tokens = tokenize(validated, HyphenRule::Strip).unwrap();
        assert_eq!(tokens.words().len(), 3);
        assert_eq!(tokens.first(), "user");
        assert_eq!(tokens.rest(), &["id".to_string(), "value".to_string()]);
        assert_eq!(tokens.join("/"), "user/id/value");
    }
}
