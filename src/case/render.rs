use crate::case::tokenizer::TokenSequence;

pub fn kebab(tokens: &TokenSequence) -> String {
    tokens.join("-")
}

pub fn dot(tokens: &TokenSequence) -> String {
    tokens.join(".")
}

/// First word as-is, every later word with its first character uppercased
pub fn lower_camel(tokens: &TokenSequence) -> String {
    let mut result = String::from(tokens.first());

    for word in tokens.rest() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}
