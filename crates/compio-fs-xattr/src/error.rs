//! Error types for xattr operations

use crate::errno::{describe, error_code};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Result type for the async wrappers
pub type Result<T> = std::result::Result<T, ExtendedError>;

/// The high-level operation that failed
///
/// Selects the message table used to describe the errno.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Reading one attribute value
    Get,
    /// Writing one attribute value
    Set,
    /// Listing attribute names
    List,
    /// Deleting one attribute
    Remove,
}

impl Operation {
    /// Lowercase operation name, as used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::List => "list",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error for a failed xattr syscall
///
/// Carries the symbolic errno name (empty when the number is not in the code
/// table), an operation-specific description, and the raw errno. Built once per
/// failure and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AttributeError {
    code: &'static str,
    message: Cow<'static, str>,
    errno: i32,
    operation: Operation,
}

impl AttributeError {
    /// Translate a raw errno from a failed `operation`
    #[must_use]
    pub fn from_errno(operation: Operation, errno: i32) -> Self {
        let err = Self {
            code: error_code(errno),
            message: describe(operation, errno),
            errno,
            operation,
        };
        log::debug!(
            "xattr {} failed: errno={} code={:?}",
            operation,
            errno,
            err.code
        );
        err
    }

    /// Symbolic errno name such as `"ENODATA"`, or `""` if unknown
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Human-readable description of the failure
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raw OS error number
    #[must_use]
    pub const fn errno(&self) -> i32 {
        self.errno
    }

    /// Operation that produced this error
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Whether this is the "attribute does not exist" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.errno == crate::errno::ENOATTR
    }

    /// Whether the filesystem rejected xattrs altogether
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        self.errno == libc::ENOTSUP || self.errno == libc::EOPNOTSUPP
    }
}

impl From<AttributeError> for std::io::Error {
    fn from(err: AttributeError) -> Self {
        Self::from_raw_os_error(err.errno)
    }
}

/// Error type for the async wrappers
#[derive(Debug, Error)]
pub enum ExtendedError {
    /// The syscall failed
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// The blocking worker did not return a result
    #[error("spawn_blocking failed: {0}")]
    SpawnJoin(String),
}

impl ExtendedError {
    /// The structured syscall error, if that is what this is
    #[must_use]
    pub const fn as_attribute(&self) -> Option<&AttributeError> {
        match self {
            Self::Attribute(err) => Some(err),
            Self::SpawnJoin(_) => None,
        }
    }
}
