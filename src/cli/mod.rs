//! CLI module for the `cook` recipe tool
//!
//! ## Commands
//!
//! - `cook <file>` - Parse and print the debug dump
//! - `render <file>` - Render a recipe as HTML
//! - `ingredients <file>...` - Print a shopping list
//! - `metadata <file>` - Print the metadata view as JSON
//! - `check <file>...` - Parse only and report diagnostics
//! - `conformance <corpus>` - Run a conformance corpus
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::RenderConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Parse and render Cooklang-style recipes
#[derive(Parser, Debug)]
#[command(name = "cook")]
#[command(version = VERSION)]
#[command(about = "Parse and render Cooklang-style recipes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Recipe to parse and dump (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse and print the document structure (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a recipe as HTML
    Render {
        /// Recipe file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Write HTML here instead of stdout
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
        /// Duration dialect for timer annotations (en, sv, or "" for symbolic units)
        #[arg(long, default_value = "en")]
        dialect: String,
        /// Prefix for CSS class names
        #[arg(long, default_value = "cook-")]
        class_prefix: String,
        /// Include the metadata header
        #[arg(long)]
        metadata: bool,
        /// Do not annotate timers with data-seconds
        #[arg(long)]
        no_timer_seconds: bool,
    },

    /// Print a shopping list across one or more recipes
    Ingredients {
        /// Recipe files
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the metadata view as JSON
    Metadata {
        /// Recipe file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse recipes and report diagnostics
    Check {
        /// Recipe files
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Run a conformance corpus (JSON)
    Conformance {
        /// Corpus file
        #[arg(value_name = "CORPUS")]
        corpus: PathBuf,
        /// List every failing case with its reasons
        #[arg(short, long)]
        verbose: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file);
    }

    match cli.command {
        Some(Command::Render {
            file,
            out,
            dialect,
            class_prefix,
            metadata,
            no_timer_seconds,
        }) => {
            let config = RenderConfig::new()
                .with_duration_dialect(dialect)
                .with_class_prefix(class_prefix)
                .with_metadata(metadata)
                .with_timer_seconds(!no_timer_seconds);
            commands::render_file(&file, out.as_deref(), config)
        }
        Some(Command::Ingredients { files }) => commands::shopping_list(&files),
        Some(Command::Metadata { file }) => commands::metadata(&file),
        Some(Command::Check { files }) => commands::check_files(&files),
        Some(Command::Conformance { corpus, verbose }) => commands::conformance(&corpus, verbose),
        None => {
            // Default: dump the file if provided
            if let Some(file) = cli.file {
                commands::dump_file(&file)
            } else {
                Err(CliError::failure("no recipe given; see `cook --help`"))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
