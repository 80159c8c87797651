//! Command-line interface definitions
//!
//! One subcommand per xattr operation, plus the shared output/logging group.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::value::{OutputEncoding, ValueInput};

/// Get, set, list and remove file extended attributes
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Output and logging configuration
    #[command(flatten)]
    pub output: OutputConfig,
}

/// The four xattr operations
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the value of an attribute
    Get {
        /// File whose attribute to read
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Attribute name, e.g. `user.comment`
        #[arg(value_name = "NAME")]
        name: String,

        /// How to print the value
        #[arg(long, short, default_value = "auto")]
        encoding: OutputEncoding,
    },

    /// Create or replace an attribute
    Set {
        /// File whose attribute to write
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Attribute name, e.g. `user.comment`
        #[arg(value_name = "NAME")]
        name: String,

        /// Where the value comes from
        #[command(flatten)]
        value: ValueArgs,

        /// Interpret VALUE as hex digits
        #[arg(long, requires = "literal", conflicts_with = "from_file")]
        hex: bool,
    },

    /// Print every attribute name, one per line
    List {
        /// File whose attributes to list
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Delete an attribute
    Remove {
        /// File whose attribute to delete
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Attribute name, e.g. `user.comment`
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Value source for `set`
///
/// Exactly one of a literal value or `--from-file` is required.
#[derive(clap::Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ValueArgs {
    /// Literal value (UTF-8 text, or hex digits with --hex)
    #[arg(value_name = "VALUE")]
    pub literal: Option<String>,

    /// Read the value's raw bytes from a file
    #[arg(long, value_name = "FILE")]
    pub from_file: Option<PathBuf>,
}

impl ValueArgs {
    /// Which input the user picked; `hex` is the `--hex` flag
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one of a literal or a file was given,
    /// or if `hex` is combined with a file; clap's argument rules normally
    /// reject both first.
    pub fn input(&self, hex: bool) -> Result<ValueInput> {
        match (&self.literal, &self.from_file) {
            (Some(text), None) if hex => Ok(ValueInput::Hex(text.clone())),
            (Some(text), None) => Ok(ValueInput::Text(text.clone())),
            (None, Some(_)) if hex => anyhow::bail!("--hex applies only to a literal VALUE"),
            (None, Some(file)) => Ok(ValueInput::File(file.clone())),
            _ => anyhow::bail!("Exactly one of VALUE or --from-file is required"),
        }
    }
}

/// Output and logging configuration
///
/// Used by: `main()` to pick the tracing level
#[derive(clap::Args, Debug, Clone, Default)]
#[command(next_help_heading = "Output Options")]
pub struct OutputConfig {
    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl OutputConfig {
    /// Maximum tracing level for these flags
    #[must_use]
    pub const fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

// ============================================================================
// IMPLEMENTATION: Validation
// ============================================================================

impl Args {
    /// Validate command-line arguments
    ///
    /// # Errors
    ///
    /// This function will return an error if both --quiet and --verbose
    /// options are used.
    pub fn validate(&self) -> Result<()> {
        if self.output.quiet && self.output.verbose > 0 {
            anyhow::bail!("Cannot use both --quiet and --verbose options");
        }

        Ok(())
    }
}
