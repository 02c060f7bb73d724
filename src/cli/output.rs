use crate::{BatchResult, Style};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    style: Style,
    total: usize,
    failed: usize,
    results: Vec<JsonConversion>,
}

pub fn print_results(
    result: &BatchResult,
    style: Style,
    colored_output: bool,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_results(result, colored_output);
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", render_json(result, style)?);
            Ok(())
        }
    }
}

fn print_text_results(result: &BatchResult, colored_output: bool) {
    for conversion in &result.conversions {
        match &conversion.outcome {
            Ok(output) => println!("{}", output),
            Err(e) => {
                if colored_output {
                    eprintln!(
                        "{} {}: {}",
                        "error:".red().bold(),
                        conversion.input.yellow(),
                        e
                    );
                } else {
                    eprintln!("error: {}: {}", conversion.input, e);
                }
            }
        }
    }
}

pub fn render_json(result: &BatchResult, style: Style) -> anyhow::Result<String> {
    let results = result
        .conversions
        .iter()
        .map(|c| match &c.outcome {
            Ok(output) => JsonConversion {
                input: c.input.clone(),
                output: Some(output.clone()),
                error: None,
                kind: None,
            },
            Err(e) => JsonConversion {
                input: c.input.clone(),
                output: None,
                error: Some(e.to_string()),
                kind: Some(e.kind().to_string()),
            },
        })
        .collect();

    let output = JsonOutput {
        style,
        total: result.conversions.len(),
        failed: result.failed_count,
        results,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn print_summary(result: &BatchResult, colored: bool) {
    if result.failed_count == 0 {
        return;
    }

    let input_word = if result.failed_count == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} of {} {} could not be converted",
            "✗".red().bold(),
            result.failed_count.to_string().red().bold(),
            result.conversions.len(),
            input_word
        );
    } else {
        eprintln!(
            "✗ {} of {} {} could not be converted",
            result.failed_count,
            result.conversions.len(),
            input_word
        );
    }
}
