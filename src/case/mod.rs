pub mod render;
pub mod tokenizer;
pub mod validator;

use crate::error::CaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokenizer::{tokenize, HyphenRule, TokenSequence};
use validator::{validate, RawInput};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Kebab,
    Camel,
    Dot,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Kebab, Style::Camel, Style::Dot];

    /// Only kebab output keeps existing hyphens as word boundaries
    pub fn hyphen_rule(&self) -> HyphenRule {
        match self {
            Style::Kebab => HyphenRule::Delimit,
            Style::Camel | Style::Dot => HyphenRule::Strip,
        }
    }

    pub fn render(&self, tokens: &TokenSequence) -> String {
        match self {
            Style::Kebab => render::kebab(tokens),
            Style::Camel => render::lower_camel(tokens),
            Style::Dot => render::dot(tokens),
        }
    }

    pub fn convert<I: RawInput + ?Sized>(&self, input: &I) -> Result<String, CaseError> {
        let validated = validate(input)?;
        let tokens = tokenize(validated, self.hyphen_rule())?;
        Ok(self.render(&tokens))
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kebab" | "kebab-case" => Ok(Style::Kebab),
            "camel" | "camelcase" | "camel-case" => Ok(Style::Camel),
            "dot" | "dot.case" | "dot-case" => Ok(Style::Dot),
            _ => Err(format!("Unknown style: {}", s)),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Kebab => write!(f, "kebab"),
            Style::Camel => write!(f, "camel"),
            Style::Dot => write!(f, "dot"),
        }
    }
}

pub fn convert<I: RawInput + ?Sized>(input: &I, style: Style) -> Result<String, CaseError> {
    style.convert(input)
}

pub fn to_kebab_case<I: RawInput + ?Sized>(input: &I) -> Result<String, CaseError> {
    Style::Kebab.convert(input)
}

pub fn to_camel_case<I: RawInput + ?Sized>(input: &I) -> Result<String, CaseError> {
    Style::Camel.convert(input)
}

pub fn to_dot_case<I: RawInput + ?Sized>(input: &I) -> Result<String, CaseError> {
    Style::Dot.convert(input)
}
