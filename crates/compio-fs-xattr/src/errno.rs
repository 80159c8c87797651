//! Errno translation tables
//!
//! Turns a raw OS error number into the symbolic code and the human-readable
//! description carried by [`AttributeError`](crate::AttributeError).
//!
//! There are two independent lookups:
//!
//! - **Code table**: one static `errno -> "NAME"` table shared by every
//!   operation. Unknown numbers map to the empty string.
//! - **Message tables**: the text depends on which operation failed. Get,
//!   list and remove read from the same table; set has its own, because the
//!   same errno means something different when writing (for example the
//!   missing-attribute errno can only come from a replace-only write).
//!
//! Errno numbers with no message entry fall back to the OS `strerror` text.

use crate::error::Operation;
use libc::c_int;
use std::borrow::Cow;
use std::ffi::CStr;

/// Errno reported when the named attribute does not exist.
///
/// Linux spells this `ENODATA`; Apple and the BSDs have a dedicated `ENOATTR`.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const ENOATTR: c_int = libc::ENODATA;
/// Errno reported when the named attribute does not exist.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub const ENOATTR: c_int = libc::ENOATTR;

/// Symbolic name of [`ENOATTR`] on this platform.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const ENOATTR_CODE: &str = "ENODATA";
/// Symbolic name of [`ENOATTR`] on this platform.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub const ENOATTR_CODE: &str = "ENOATTR";

/// Symbolic codes, searched front to back.
static CODES: &[(c_int, &str)] = &[
    (libc::EPERM, "EPERM"),
    (libc::ENOENT, "ENOENT"),
    (libc::ESRCH, "ESRCH"),
    (libc::EINTR, "EINTR"),
    (libc::EIO, "EIO"),
    (libc::ENXIO, "ENXIO"),
    (libc::E2BIG, "E2BIG"),
    (libc::ENOEXEC, "ENOEXEC"),
    (libc::EBADF, "EBADF"),
    (libc::ECHILD, "ECHILD"),
    (libc::EAGAIN, "EAGAIN"),
    (libc::ENOMEM, "ENOMEM"),
    (libc::EACCES, "EACCES"),
    (libc::EFAULT, "EFAULT"),
    (libc::ENOTBLK, "ENOTBLK"),
    (libc::EBUSY, "EBUSY"),
    (libc::EEXIST, "EEXIST"),
    (libc::EXDEV, "EXDEV"),
    (libc::ENODEV, "ENODEV"),
    (libc::ENOTDIR, "ENOTDIR"),
    (libc::EISDIR, "EISDIR"),
    (libc::EINVAL, "EINVAL"),
    (libc::ENFILE, "ENFILE"),
    (libc::EMFILE, "EMFILE"),
    (libc::ENOTTY, "ENOTTY"),
    (libc::ETXTBSY, "ETXTBSY"),
    (libc::EFBIG, "EFBIG"),
    (libc::ENOSPC, "ENOSPC"),
    (libc::ESPIPE, "ESPIPE"),
    (libc::EROFS, "EROFS"),
    (libc::EMLINK, "EMLINK"),
    (libc::EPIPE, "EPIPE"),
    (libc::EDOM, "EDOM"),
    (libc::ERANGE, "ERANGE"),
    (ENOATTR, ENOATTR_CODE),
    (libc::ENOTSUP, "ENOTSUP"),
    (libc::ENAMETOOLONG, "ENAMETOOLONG"),
    (libc::ELOOP, "ELOOP"),
];

/// Descriptions for get, list and remove failures.
static READ_MESSAGES: &[(c_int, &str)] = &[
    (ENOATTR, "The extended attribute does not exist."),
    (
        libc::ENOTSUP,
        "The file system does not support extended attributes or has the feature disabled.",
    ),
    (
        libc::ERANGE,
        "value (as indicated by size) is too small to hold the extended attribute data.",
    ),
    (
        libc::EPERM,
        "The named attribute is not permitted for this type of object.",
    ),
    (
        libc::EINVAL,
        "name is invalid or options has an unsupported bit set.",
    ),
    (
        libc::EISDIR,
        "path or fd do not refer to a regular file and the attribute in question is only applicable to files.  Similar to EPERM.",
    ),
    (
        libc::ENOTDIR,
        "A component of path's prefix is not a directory.",
    ),
    (
        libc::ENAMETOOLONG,
        "The length of name exceeds XATTR_MAXNAMELEN UTF-8 bytes, or a component of path exceeds NAME_MAX characters, or the entire path exceeds PATH_MAX characters.",
    ),
    (
        libc::EACCES,
        "Search permission is denied for a component of path or the attribute is not allowed to be read (e.g. an ACL prohibits reading the attributes of this file).",
    ),
    (
        libc::ELOOP,
        "Too many symbolic links were encountered in translating the pathname.",
    ),
    (libc::EFAULT, "path or name points to an invalid address."),
    (
        libc::EIO,
        "An I/O error occurred while reading from or writing to the file system.",
    ),
];

/// Descriptions for set failures.
static WRITE_MESSAGES: &[(c_int, &str)] = &[
    (
        libc::EEXIST,
        "options contains XATTR_CREATE and the named attribute already exists.",
    ),
    (
        ENOATTR,
        "options is set to XATTR_REPLACE and the named attribute does not exist.",
    ),
    (
        libc::ENOTSUP,
        "The file system does not support extended attributes or has the feature disabled.",
    ),
    (libc::EROFS, "The file system is mounted read-only."),
    (
        libc::ERANGE,
        "The data size of the attribute is out of range (some attributes have size restrictions).",
    ),
    (
        libc::EPERM,
        "Attributes cannot be associated with this type of object. For example, attributes are not allowed for resource forks.",
    ),
    (
        libc::EINVAL,
        "name or options is invalid. name must be valid UTF-8 and options must make sense.",
    ),
    (libc::ENOTDIR, "A component of path is not a directory."),
    (
        libc::ENAMETOOLONG,
        "name exceeded XATTR_MAXNAMELEN UTF-8 bytes, or a component of path exceeded NAME_MAX characters, or the entire path exceeded PATH_MAX characters.",
    ),
    (
        libc::EACCES,
        "Search permission is denied for a component of path or permission to set the attribute is denied.",
    ),
    (
        libc::ELOOP,
        "Too many symbolic links were encountered resolving path.",
    ),
    (libc::EFAULT, "path or name points to an invalid address."),
    (
        libc::EIO,
        "An I/O error occurred while reading from or writing to the file system.",
    ),
    (
        libc::E2BIG,
        "The data size of the extended attribute is too large.",
    ),
    (libc::ENOSPC, "Not enough space left on the file system."),
];

fn lookup(table: &'static [(c_int, &'static str)], errno: c_int) -> Option<&'static str> {
    table
        .iter()
        .find_map(|&(candidate, text)| (candidate == errno).then_some(text))
}

/// Symbolic code for `errno`, or `""` when it is not in the table.
#[must_use]
pub fn error_code(errno: c_int) -> &'static str {
    lookup(CODES, errno).unwrap_or("")
}

/// Description of `errno` in the context of `operation`.
///
/// Falls back to the OS' generic text for numbers the operation's table does
/// not cover.
#[must_use]
pub fn describe(operation: Operation, errno: c_int) -> Cow<'static, str> {
    let table = match operation {
        Operation::Set => WRITE_MESSAGES,
        Operation::Get | Operation::List | Operation::Remove => READ_MESSAGES,
    };
    match lookup(table, errno) {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(os_description(errno)),
    }
}

/// The OS `strerror` text for `errno`.
///
/// Uses the reentrant XSI `strerror_r` so concurrent failures on different
/// threads never share a static buffer.
#[must_use]
pub fn os_description(errno: c_int) -> String {
    let mut buf = [0 as libc::c_char; 256];
    // SAFETY: buf is writable for buf.len() bytes and strerror_r NUL-terminates
    // on success.
    let rc = unsafe { libc::strerror_r(errno, buf.as_mut_ptr(), buf.len()) };
    if rc != 0 {
        return format!("Unknown error {errno}");
    }
    // SAFETY: strerror_r returned 0, so buf holds a NUL-terminated string.
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}
