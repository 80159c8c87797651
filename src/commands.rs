//! Subcommand execution
//!
//! Each subcommand maps to one async xattr operation. Results go to the given
//! writer (stdout in the binary); failures come back as [`CliError`] for
//! `main` to report.

use crate::cli::Command;
use crate::error::{CliError, Result};
use compio_fs_xattr::{
    get_xattr_at_path, list_xattr_at_path, remove_xattr_at_path, set_xattr_at_path,
};
use std::io::Write;
use tracing::{debug, info};

/// Run `command`, writing any result to `out`
///
/// # Errors
///
/// Returns the structured xattr error from the syscall layer, a value decoding
/// error for `set`, or an output error if `out` cannot be written.
pub async fn execute(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Get {
            path,
            name,
            encoding,
        } => {
            let value = get_xattr_at_path(&path, &name).await?;
            debug!("get {} {}: {} bytes", path.display(), name, value.len());
            out.write_all(&encoding.render(&value))
                .map_err(CliError::Output)?;
        }
        Command::Set {
            path,
            name,
            value,
            hex,
        } => {
            let bytes = value
                .input(hex)
                .map_err(|e| CliError::InvalidValue(e.to_string()))?
                .into_bytes()
                .await?;
            set_xattr_at_path(&path, &name, &bytes).await?;
            info!("set {} {} ({} bytes)", path.display(), name, bytes.len());
        }
        Command::List { path } => {
            let names = list_xattr_at_path(&path).await?;
            debug!("list {}: {} names", path.display(), names.len());
            for name in names {
                writeln!(out, "{name}").map_err(CliError::Output)?;
            }
        }
        Command::Remove { path, name } => {
            remove_xattr_at_path(&path, &name).await?;
            info!("removed {} from {}", name, path.display());
        }
    }
    out.flush().map_err(CliError::Output)
}
