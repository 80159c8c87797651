//! Platform syscall adapters
//!
//! # Platform Differences
//!
//! ## Linux (plain POSIX-style API):
//! - `getxattr(path, name, value, size)`
//! - `setxattr(path, name, value, size, flags)`
//! - `listxattr(path, list, size)`
//! - `removexattr(path, name)`
//!
//! ## macOS (same calls, extra arguments):
//! - `getxattr(path, name, value, size, position, options)`
//! - `setxattr(path, name, value, size, position, options)`
//! - `listxattr(path, list, size, options)`
//! - `removexattr(path, name, options)`
//!
//! `position` and `options` are always 0: whole attribute, follow symlinks, no
//! create/replace restriction.
//!
//! ## FreeBSD / NetBSD (namespaced `extattr` API):
//! - `extattr_get_file(path, namespace, name, data, nbytes)`
//! - `extattr_set_file(path, namespace, name, data, nbytes)`
//! - `extattr_list_file(path, namespace, data, nbytes)`
//! - `extattr_delete_file(path, namespace, name)`
//!
//! The namespace is always `EXTATTR_NAMESPACE_USER`. Names are passed through
//! unchanged, and `list` reports them without any namespace prefix.
//!
//! Exactly one adapter is compiled and exported as [`Native`].

use libc::c_void;
use std::ffi::CStr;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::Linux as Native;

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod apple;
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub use apple::Apple as Native;

#[cfg(any(target_os = "freebsd", target_os = "netbsd"))]
mod bsd;
#[cfg(any(target_os = "freebsd", target_os = "netbsd"))]
pub use bsd::Bsd as Native;

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd"
)))]
compile_error!("compio-fs-xattr supports Linux, Android, Apple platforms, FreeBSD and NetBSD only");

/// Raw extended-attribute syscalls for one OS family
///
/// Every function issues exactly one syscall. Failures return the raw errno;
/// translation happens in the caller, which knows the operation.
pub trait XattrSyscalls {
    /// Read the value of `name`
    ///
    /// With `None` this is a size probe (null buffer, size 0).
    ///
    /// # Errors
    ///
    /// Returns the errno reported by the OS.
    fn get(path: &CStr, name: &CStr, buf: Option<&mut [u8]>) -> Result<usize, i32>;

    /// Create or replace `name` with `value`
    ///
    /// # Errors
    ///
    /// Returns the errno reported by the OS.
    fn set(path: &CStr, name: &CStr, value: &[u8]) -> Result<(), i32>;

    /// Read the raw name list
    ///
    /// With `None` this is a size probe (null buffer, size 0).
    ///
    /// # Errors
    ///
    /// Returns the errno reported by the OS.
    fn list(path: &CStr, buf: Option<&mut [u8]>) -> Result<usize, i32>;

    /// Delete `name`
    ///
    /// # Errors
    ///
    /// Returns the errno reported by the OS.
    fn remove(path: &CStr, name: &CStr) -> Result<(), i32>;

    /// Decode the buffer filled by [`list`](Self::list)
    fn parse_names(buffer: &[u8]) -> Vec<String>;
}

/// Pointer and capacity for an optional destination buffer
fn out_buffer(buf: Option<&mut [u8]>) -> (*mut c_void, usize) {
    match buf {
        Some(buf) => (buf.as_mut_ptr().cast::<c_void>(), buf.len()),
        None => (std::ptr::null_mut(), 0),
    }
}

/// The calling thread's errno
fn last_errno() -> i32 {
    std::io::Error::last_os_error()
        .raw_os_error()
        .unwrap_or(libc::EIO)
}

/// Map a byte-count return (`-1` on failure) to a result
fn check_len(ret: libc::ssize_t) -> Result<usize, i32> {
    usize::try_from(ret).map_err(|_| last_errno())
}

/// Map a status return (`-1` on failure) to a result
fn check_status(ret: libc::c_int) -> Result<(), i32> {
    if ret == 0 {
        Ok(())
    } else {
        Err(last_errno())
    }
}
