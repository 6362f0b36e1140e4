//! Pattern debugging CLI.
//!
//! This binary exposes the patternkit library on the command line so patterns
//! can be checked against sample numbers without writing code.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use patternkit::{keypad_mapping, normalize, parse_mapping, PatternEngine};

/// Pattern matching toolkit
///
/// Run cached, case-insensitive regular expressions against sample text.
#[derive(Parser)]
#[command(name = "patternkit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every match with its byte offsets
    Find {
        /// Regular expression
        pattern: String,

        /// Text to search
        subject: String,
    },

    /// Test whether a pattern matches (exit status 1 when it does not)
    Check {
        /// Regular expression
        pattern: String,

        /// Text to test
        subject: String,

        /// Require the pattern to match the whole subject
        #[arg(long)]
        entire: bool,
    },

    /// Replace matches with a template
    Replace {
        /// Regular expression
        pattern: String,

        /// Text to transform
        subject: String,

        /// Replacement text, inserted verbatim
        #[arg(short, long, default_value = "")]
        template: String,

        /// Replace only the first match
        #[arg(long)]
        first: bool,
    },

    /// Remap characters through a mapping table, dropping unmapped ones
    Normalize {
        /// Text to normalize
        subject: String,

        /// Mapping file of KEY=VALUE lines (defaults to the phone keypad)
        #[arg(short, long, value_name = "FILE")]
        map: Option<PathBuf>,
    },
}

/// Command handler owning the pattern engine.
struct PatternHandler {
    engine: PatternEngine,
    verbose: bool,
}

impl PatternHandler {
    /// Creates a new handler over the shared pattern cache.
    fn new(verbose: bool) -> Self {
        Self {
            engine: PatternEngine::new(),
            verbose,
        }
    }

    /// Prints every match as `start\tend\ttext`.
    fn find(&self, pattern: &str, subject: &str) -> Result<ExitCode> {
        let matches = self
            .engine
            .find_all(pattern, subject)
            .with_context(|| "Pattern search failed")?;

        for m in &matches {
            println!("{}\t{}\t{}", m.start(), m.end(), m.as_str());
        }
        if self.verbose {
            println!("{} match(es)", matches.len());
        }

        Ok(ExitCode::SUCCESS)
    }

    /// Reports whether the pattern matches, anywhere or across the whole subject.
    fn check(&self, pattern: &str, subject: &str, entire: bool) -> ExitCode {
        let matched = if entire {
            self.engine.matches_entirely(Some(pattern), subject)
        } else {
            self.engine.exists(Some(pattern), subject)
        };

        if matched {
            println!("match");
            ExitCode::SUCCESS
        } else {
            println!("no match");
            ExitCode::FAILURE
        }
    }

    /// Replaces all matches, or only the first one.
    fn replace(&self, pattern: &str, subject: &str, template: &str, first: bool) -> ExitCode {
        let result = if first {
            self.engine.replace_first(pattern, subject, template)
        } else {
            self.engine.replace_all(pattern, subject, template)
        };
        println!("{}", result);
        ExitCode::SUCCESS
    }

    /// Normalizes the subject through a mapping file or the keypad table.
    fn normalize(&self, subject: &str, map: Option<&Path>) -> Result<ExitCode> {
        let mapping = match map {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                parse_mapping(&text)
                    .with_context(|| format!("Invalid mapping file {}", path.display()))?
            }
            None => keypad_mapping(),
        };

        if self.verbose {
            println!("Mapping: {} entries", mapping.len());
        }
        println!("{}", normalize(subject, &mapping));

        Ok(ExitCode::SUCCESS)
    }
}

/// Initializes env_logger, honoring `RUST_LOG` over the verbosity default.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let handler = PatternHandler::new(cli.verbose);

    match &cli.command {
        Commands::Find { pattern, subject } => handler.find(pattern, subject),
        Commands::Check {
            pattern,
            subject,
            entire,
        } => Ok(handler.check(pattern, subject, *entire)),
        Commands::Replace {
            pattern,
            subject,
            template,
            first,
        } => Ok(handler.replace(pattern, subject, template, *first)),
        Commands::Normalize { subject, map } => handler.normalize(subject, map.as_deref()),
    }
}
