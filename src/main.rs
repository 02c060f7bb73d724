use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::batch::{self, InputMode};
use recase::cli::output::{self, OutputFormat};
use recase::config::Overrides;
use recase::{Config, Style};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(
    version,
    about = "Convert text into kebab-case, camelCase or dot.case",
    long_about = None
)]
struct Cli {
    /// Strings to convert (reads stdin, one per line, when none are given)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target style (kebab, camel, dot)
    #[arg(short, long)]
    style: Option<Style>,

    /// Read inputs from a file, one per line
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Treat every input as a JSON literal instead of a plain string
    #[arg(long)]
    raw_json: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Config file to use instead of the global one
    #[arg(long, env = "RECASE_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs could not be converted
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(Overrides {
        config_path: cli.config.clone(),
        style: cli.style,
        format: cli.format,
        no_color: cli.no_color,
    })?;

    let mut inputs = cli.inputs.clone();
    if let Some(path) = &cli.file {
        inputs.extend(batch::read_lines(path)?);
    }
    if inputs.is_empty() && cli.file.is_none() {
        inputs = batch::read_stdin()?;
    }
    if inputs.is_empty() {
        anyhow::bail!("No inputs given. Use --help for usage information.");
    }

    let mode = if cli.raw_json {
        InputMode::Json
    } else {
        InputMode::Text
    };

    let result = batch::convert_all(&inputs, config.style, mode);

    output::print_results(&result, config.style, config.color, &config.format)?;
    if config.format == OutputFormat::Text {
        output::print_summary(&result, config.color);
    }

    // Exit with appropriate code
    if result.failed_count > 0 && !cli.no_fail && !config.skip_invalid {
        std::process::exit(1);
    }

    Ok(())
}
