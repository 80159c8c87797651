//! Error handling for the command-line tool

use compio_fs_xattr::{AttributeError, ExtendedError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for command execution
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors reported by `fs-xattr`
#[derive(Debug, Error)]
pub enum CliError {
    /// The xattr syscall failed
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// The blocking worker did not return a result
    #[error("spawn_blocking failed: {0}")]
    SpawnJoin(String),

    /// A `set` value could not be decoded
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Reading a value file failed
    #[error("{}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Writing the result to stdout failed
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl From<ExtendedError> for CliError {
    fn from(err: ExtendedError) -> Self {
        match err {
            ExtendedError::Attribute(err) => Self::Attribute(err),
            ExtendedError::SpawnJoin(msg) => Self::SpawnJoin(msg),
        }
    }
}

impl CliError {
    /// One-line description for stderr
    ///
    /// Syscall failures are shown as `CODE (errno N): message`; an unknown errno
    /// has an empty code and is shown as `errno N: message`.
    #[must_use]
    pub fn report(&self) -> String {
        match self {
            Self::Attribute(err) if err.code().is_empty() => {
                format!("errno {}: {}", err.errno(), err.message())
            }
            Self::Attribute(err) => {
                format!("{} (errno {}): {}", err.code(), err.errno(), err.message())
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compio_fs_xattr::errno::{ENOATTR, ENOATTR_CODE};
    use compio_fs_xattr::Operation;

    #[test]
    fn test_report_known_errno() {
        let err = CliError::from(AttributeError::from_errno(Operation::Get, ENOATTR));
        assert_eq!(
            err.report(),
            format!(
                "{ENOATTR_CODE} (errno {ENOATTR}): The extended attribute does not exist."
            )
        );
    }

    #[test]
    fn test_report_unknown_errno() {
        let err = CliError::from(AttributeError::from_errno(Operation::Set, 4242));
        assert!(err.report().starts_with("errno 4242: "));
    }

    #[test]
    fn test_from_extended_error() {
        let err: CliError = ExtendedError::SpawnJoin("boom".to_string()).into();
        assert_eq!(err.report(), "spawn_blocking failed: boom");

        let err: CliError =
            ExtendedError::from(AttributeError::from_errno(Operation::List, libc::EACCES))
                .into();
        assert!(matches!(err, CliError::Attribute(_)));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = CliError::Io {
            path: PathBuf::from("/tmp/value.bin"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.report().starts_with("/tmp/value.bin: "));
    }
}
