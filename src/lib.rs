pub mod case;
pub mod cli;
pub mod config;
pub mod error;

pub use case::validator::{validate, RawInput};
pub use case::{convert, to_camel_case, to_dot_case, to_kebab_case, Style};
pub use config::Config;
pub use error::{CaseError, ConversionError, Missing, ValueKind};

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub failed_count: usize,
    pub conversions: Vec<Conversion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub outcome: Result<String, ConversionError>,
}
