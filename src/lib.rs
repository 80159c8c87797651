//! fs-xattr - command-line access to file extended attributes
//!
//! The binary is a thin layer over [`compio_fs_xattr`]: it parses a
//! subcommand, runs the matching async operation on a compio runtime, and
//! prints the result or the structured error.
//!
//! # Example
//!
//! ```rust,no_run
//! use fs_xattr::cli::Command;
//! use fs_xattr::commands::execute;
//! use fs_xattr::value::OutputEncoding;
//! use std::path::PathBuf;
//!
//! #[compio::main]
//! async fn main() -> fs_xattr::Result<()> {
//!     let command = Command::Get {
//!         path: PathBuf::from("/tmp/file.txt"),
//!         name: "user.comment".to_string(),
//!         encoding: OutputEncoding::Auto,
//!     };
//!     execute(command, &mut std::io::stdout()).await
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod value;

pub use error::{CliError, Result};
