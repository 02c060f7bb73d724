use crate::{BatchResult, Conversion, ConversionError, Style};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::Value;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// How command-line inputs are interpreted before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Every input is a plain string
    Text,
    /// Every input is a JSON literal (`null`, `[1]`, `"text"`, ...)
    Json,
}

/// Read one input per line, skipping nothing; blank lines still get validated
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}

pub fn read_stdin() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read from stdin")
}

fn parse_input(raw: &str, mode: InputMode) -> Result<Value, ConversionError> {
    match mode {
        InputMode::Text => Ok(Value::String(raw.to_string())),
        InputMode::Json => serde_json::from_str(raw)
            .map_err(|e| ConversionError::InvalidJson(e.to_string())),
    }
}

/// Convert every input, in parallel, keeping input order
pub fn convert_all(inputs: &[String], style: Style, mode: InputMode) -> BatchResult {
    let conversions: Vec<Conversion> = inputs
        .par_iter()
        .map(|raw| Conversion {
            input: raw.clone(),
            outcome: parse_input(raw, mode)
                .and_then(|value| style.convert(&value).map_err(ConversionError::from)),
        })
        .collect();

    let failed_count = conversions.iter().filter(|c| c.outcome.is_err()).count();

    BatchResult {
        failed_count,
        conversions,
    }
}
