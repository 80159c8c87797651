//! Extended attribute operations on paths
//!
//! Four blocking operations, [`get`], [`set`], [`list`] and [`remove`], behave
//! the same on every supported OS. Each one validates its arguments, issues
//! one syscall (or a probe/fill pair for `get` and `list`), and translates a
//! failure into an [`AttributeError`].
//!
//! The `*_xattr_at_path` functions are async wrappers that run the blocking
//! operation on compio's blocking pool.
//!
//! Symlinks are followed. Nothing is retried, including `EINTR`.
//!
//! # Example
//!
//! ```rust,no_run
//! use compio_fs_xattr::xattr;
//!
//! # fn example() -> Result<(), compio_fs_xattr::AttributeError> {
//! xattr::set("/tmp/f", "user.test", b"AB")?;
//! assert_eq!(xattr::get("/tmp/f", "user.test")?, b"AB");
//! assert!(xattr::list("/tmp/f")?.contains(&"user.test".to_string()));
//! xattr::remove("/tmp/f", "user.test")?;
//! # Ok(())
//! # }
//! ```

use crate::error::{AttributeError, Operation, Result};
use crate::sizing::probe_then_fill;
use crate::sys::{Native, XattrSyscalls};
use std::ffi::{CStr, CString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// A validated (path, attribute name) pair
///
/// Both halves are held as NUL-terminated strings ready for the syscall. The
/// name is UTF-8; the path is whatever bytes the OS uses for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRef {
    path: CString,
    name: CString,
}

impl AttributeRef {
    /// Validate `path` and `name` for `operation`
    ///
    /// # Errors
    ///
    /// Returns an `EINVAL` error for `operation` if either contains a NUL byte.
    pub fn new(
        operation: Operation,
        path: &Path,
        name: &str,
    ) -> std::result::Result<Self, AttributeError> {
        Ok(Self {
            path: path_cstring(operation, path)?,
            name: CString::new(name).map_err(|_| invalid_argument(operation))?,
        })
    }

    /// The path, NUL-terminated
    #[must_use]
    pub fn path(&self) -> &CStr {
        &self.path
    }

    /// The attribute name, NUL-terminated
    #[must_use]
    pub fn name(&self) -> &CStr {
        &self.name
    }
}

fn invalid_argument(operation: Operation) -> AttributeError {
    AttributeError::from_errno(operation, libc::EINVAL)
}

fn path_cstring(
    operation: Operation,
    path: &Path,
) -> std::result::Result<CString, AttributeError> {
    CString::new(path.as_os_str().as_bytes()).map_err(|_| invalid_argument(operation))
}

/// Get an extended attribute value
///
/// # Arguments
///
/// * `path` - Path to the file
/// * `name` - Name of the extended attribute
///
/// # Returns
///
/// The value of the extended attribute, possibly empty
///
/// # Errors
///
/// This function will return an error if:
/// - The extended attribute doesn't exist (`ENODATA` / `ENOATTR`)
/// - The filesystem does not support extended attributes
/// - Permission is denied
/// - `path` or `name` contains a NUL byte (`EINVAL`)
pub fn get(path: impl AsRef<Path>, name: &str) -> std::result::Result<Vec<u8>, AttributeError> {
    let attr = AttributeRef::new(Operation::Get, path.as_ref(), name)?;
    log::trace!("getxattr {:?} {:?}", attr.path(), attr.name());
    probe_then_fill(|buf| Native::get(attr.path(), attr.name(), buf))
        .map_err(|errno| AttributeError::from_errno(Operation::Get, errno))
}

/// Set an extended attribute value
///
/// Creates the attribute if it is absent and overwrites it otherwise.
///
/// # Arguments
///
/// * `path` - Path to the file
/// * `name` - Name of the extended attribute
/// * `value` - Value to set; may be empty
///
/// # Errors
///
/// This function will return an error if:
/// - The filesystem is read-only, full, or lacks xattr support
/// - The value is too large for the filesystem
/// - Permission is denied
/// - `path` or `name` contains a NUL byte (`EINVAL`)
pub fn set(
    path: impl AsRef<Path>,
    name: &str,
    value: &[u8],
) -> std::result::Result<(), AttributeError> {
    let attr = AttributeRef::new(Operation::Set, path.as_ref(), name)?;
    log::trace!(
        "setxattr {:?} {:?} ({} bytes)",
        attr.path(),
        attr.name(),
        value.len()
    );
    Native::set(attr.path(), attr.name(), value)
        .map_err(|errno| AttributeError::from_errno(Operation::Set, errno))
}

/// List the extended attribute names of a file
///
/// Names come back in the order the OS reports them. On the BSD family only
/// the user namespace is listed and names carry no namespace prefix.
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist
/// - The filesystem does not support extended attributes
/// - Permission is denied
/// - `path` contains a NUL byte (`EINVAL`)
pub fn list(path: impl AsRef<Path>) -> std::result::Result<Vec<String>, AttributeError> {
    let path = path_cstring(Operation::List, path.as_ref())?;
    log::trace!("listxattr {path:?}");
    let buffer = probe_then_fill(|buf| Native::list(&path, buf))
        .map_err(|errno| AttributeError::from_errno(Operation::List, errno))?;
    Ok(Native::parse_names(&buffer))
}

/// Remove an extended attribute
///
/// # Errors
///
/// This function will return an error if:
/// - The extended attribute doesn't exist (`ENODATA` / `ENOATTR`)
/// - Permission is denied
/// - `path` or `name` contains a NUL byte (`EINVAL`)
pub fn remove(path: impl AsRef<Path>, name: &str) -> std::result::Result<(), AttributeError> {
    let attr = AttributeRef::new(Operation::Remove, path.as_ref(), name)?;
    log::trace!("removexattr {:?} {:?}", attr.path(), attr.name());
    Native::remove(attr.path(), attr.name())
        .map_err(|errno| AttributeError::from_errno(Operation::Remove, errno))
}

/// Run a blocking xattr operation off the async runtime's thread
async fn run_blocking<T, F>(operation: F) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, AttributeError> + Send + 'static,
    T: Send + 'static,
{
    #[cfg(feature = "cheap_calls_sync")]
    {
        Ok(operation()?)
    }

    #[cfg(not(feature = "cheap_calls_sync"))]
    {
        let inner = compio::runtime::spawn_blocking(operation)
            .await
            .map_err(|e| crate::error::ExtendedError::SpawnJoin(format!("{e:?}")))?;
        Ok(inner?)
    }
}

/// Get an extended attribute value at the given path
///
/// Async version of [`get`].
///
/// # Errors
///
/// Same as [`get`], plus [`ExtendedError::SpawnJoin`](crate::ExtendedError::SpawnJoin) if the worker fails.
pub async fn get_xattr_at_path(path: &Path, name: &str) -> Result<Vec<u8>> {
    let path = path.to_path_buf();
    let name = name.to_string();
    run_blocking(move || get(&path, &name)).await
}

/// Set an extended attribute value at the given path
///
/// Async version of [`set`].
///
/// # Errors
///
/// Same as [`set`], plus [`ExtendedError::SpawnJoin`](crate::ExtendedError::SpawnJoin) if the worker fails.
pub async fn set_xattr_at_path(path: &Path, name: &str, value: &[u8]) -> Result<()> {
    let path = path.to_path_buf();
    let name = name.to_string();
    let value = value.to_vec();
    run_blocking(move || set(&path, &name, &value)).await
}

/// List all extended attributes at the given path
///
/// Async version of [`list`].
///
/// # Errors
///
/// Same as [`list`], plus [`ExtendedError::SpawnJoin`](crate::ExtendedError::SpawnJoin) if the worker fails.
pub async fn list_xattr_at_path(path: &Path) -> Result<Vec<String>> {
    let path = path.to_path_buf();
    run_blocking(move || list(&path)).await
}

/// Remove an extended attribute at the given path
///
/// Async version of [`remove`].
///
/// # Errors
///
/// Same as [`remove`], plus [`ExtendedError::SpawnJoin`](crate::ExtendedError::SpawnJoin) if the worker fails.
pub async fn remove_xattr_at_path(path: &Path, name: &str) -> Result<()> {
    let path = path.to_path_buf();
    let name = name.to_string();
    run_blocking(move || remove(&path, &name)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errno::{ENOATTR, ENOATTR_CODE};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Create a scratch file, or `None` if the temp filesystem has no user xattrs
    fn scratch_file() -> Option<(TempDir, PathBuf)> {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "test content").unwrap();
        match set(&file_path, "user.probe", b"") {
            Ok(()) => {
                remove(&file_path, "user.probe").unwrap();
                Some((temp_dir, file_path))
            }
            Err(e) => {
                println!(
                    "Extended attributes not supported on this filesystem - test skipped: {e}"
                );
                None
            }
        }
    }

    #[test]
    fn test_attribute_ref_rejects_nul_in_name() {
        let err =
            AttributeRef::new(Operation::Get, Path::new("/tmp/f"), "user.\0bad").unwrap_err();
        assert_eq!(err.code(), "EINVAL");
        assert_eq!(err.errno(), libc::EINVAL);
        assert_eq!(err.operation(), Operation::Get);
    }

    #[test]
    fn test_attribute_ref_rejects_nul_in_path() {
        let err =
            AttributeRef::new(Operation::Set, Path::new("/tmp/\0f"), "user.ok").unwrap_err();
        assert_eq!(err.errno(), libc::EINVAL);
        assert!(err.message().contains("name or options is invalid"));
    }

    #[test]
    fn test_attribute_ref_keeps_bytes() {
        let attr = AttributeRef::new(Operation::Get, Path::new("/tmp/∞ f"), "user.x").unwrap();
        assert_eq!(attr.path().to_bytes(), "/tmp/∞ f".as_bytes());
        assert_eq!(attr.name().to_bytes(), b"user.x");
    }

    #[test]
    fn test_list_rejects_nul_path() {
        let err = list(Path::new("/tmp/\0")).unwrap_err();
        assert_eq!(err.errno(), libc::EINVAL);
        assert_eq!(err.operation(), Operation::List);
    }

    #[test]
    fn test_missing_file_is_enoent() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let err = get(&missing, "user.test").unwrap_err();
        assert_eq!(err.code(), "ENOENT");
        assert_eq!(err.errno(), libc::ENOENT);

        let err = list(&missing).unwrap_err();
        assert_eq!(err.code(), "ENOENT");
    }

    #[test]
    fn test_xattr_operations() {
        let Some((_temp_dir, file_path)) = scratch_file() else {
            return;
        };

        set(&file_path, "user.test", b"test_value").unwrap();
        assert_eq!(get(&file_path, "user.test").unwrap(), b"test_value");

        let names = list(&file_path).unwrap();
        assert_eq!(names.iter().filter(|n| *n == "user.test").count(), 1);

        remove(&file_path, "user.test").unwrap();
        let names_after = list(&file_path).unwrap();
        assert!(!names_after.contains(&"user.test".to_string()));
    }

    #[test]
    fn test_get_missing_attribute() {
        let Some((_temp_dir, file_path)) = scratch_file() else {
            return;
        };

        let err = get(&file_path, "user.nope").unwrap_err();
        assert_eq!(err.errno(), ENOATTR);
        assert_eq!(err.code(), ENOATTR_CODE);
        assert_eq!(err.message(), "The extended attribute does not exist.");
    }

    #[test]
    fn test_remove_missing_attribute() {
        let Some((_temp_dir, file_path)) = scratch_file() else {
            return;
        };

        let err = remove(&file_path, "user.nope").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.operation(), Operation::Remove);
    }

    #[compio::test]
    async fn test_async_wrappers() {
        let Some((_temp_dir, file_path)) = scratch_file() else {
            return;
        };

        set_xattr_at_path(&file_path, "user.async", b"\x00\x01\x02")
            .await
            .unwrap();
        let value = get_xattr_at_path(&file_path, "user.async").await.unwrap();
        assert_eq!(value, b"\x00\x01\x02");

        let names = list_xattr_at_path(&file_path).await.unwrap();
        assert!(names.contains(&"user.async".to_string()));

        remove_xattr_at_path(&file_path, "user.async").await.unwrap();
        let err = get_xattr_at_path(&file_path, "user.async")
            .await
            .unwrap_err();
        assert!(err.as_attribute().is_some_and(AttributeError::is_not_found));
    }

    #[compio::test]
    async fn test_run_blocking_propagates_attribute_error() {
        let value = run_blocking(|| Ok(7u32)).await.unwrap();
        assert_eq!(value, 7);

        let err = run_blocking(|| -> std::result::Result<(), AttributeError> {
            Err(AttributeError::from_errno(Operation::Get, libc::EACCES))
        })
        .await
        .unwrap_err();
        let attr = err.as_attribute().unwrap();
        assert_eq!(attr.code(), "EACCES");
        assert_eq!(attr.operation(), Operation::Get);
    }

    #[cfg(feature = "cheap_calls_sync")]
    #[compio::test]
    async fn test_run_blocking_inline() {
        let caller = std::thread::current().id();
        let worker = run_blocking(|| Ok(std::thread::current().id()))
            .await
            .unwrap();
        assert_eq!(worker, caller);
    }

    #[cfg(not(feature = "cheap_calls_sync"))]
    #[compio::test]
    async fn test_run_blocking_offloads() {
        let caller = std::thread::current().id();
        let worker = run_blocking(|| Ok(std::thread::current().id()))
            .await
            .unwrap();
        assert_ne!(worker, caller);
    }
}
