//! Command-line interface for string_grammar
//!
//! Generates the string rules of a grammar and writes them as YAML.
//!
//! Usage:
//!   gen-strings [--output `<path>`] [--language `<name>`] [--max-markers `<n>`] [--indent `<n>`]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use string_grammar::{generate, to_string_with_options, write_file, EmitOptions, GrammarOptions};

#[derive(Parser)]
#[command(name = "gen-strings")]
#[command(version)]
#[command(about = "Generate quoted string rules for a TextMate grammar")]
struct Cli {
    /// File to overwrite with the generated rules (stdout when omitted)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Scope name suffix, as in `string.quoted.single.<language>`
    #[arg(long, short = 'l', default_value = "hitori")]
    language: String,

    /// Largest number of markers combined in one rule
    #[arg(long, value_name = "N", default_value_t = 4)]
    max_markers: usize,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", default_value_t = 2)]
    indent: usize,

    /// Print a summary to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> string_grammar::Result<()> {
    let grammar = GrammarOptions::new()
        .with_language(cli.language)
        .with_max_markers(cli.max_markers);
    let rules = generate(&grammar);

    let emit = EmitOptions::new()
        .with_indent(cli.indent)
        .with_trailing_newline(cli.output.is_none());
    let text = to_string_with_options(&rules, emit)?;

    match &cli.output {
        Some(path) => write_file(path, &text)?,
        None => print!("{}", text),
    }

    if cli.verbose {
        let destination = cli
            .output
            .as_ref()
            .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
        eprintln!("wrote {} string rules to {}", rules.len(), destination);
    }
    Ok(())
}
