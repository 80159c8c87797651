//! # compio-fs-xattr
//!
//! Extended attribute (xattr) operations that behave the same on Linux,
//! Apple platforms and the BSD family:
//! - `get` / `set` / `list` / `remove` on a path, as blocking calls
//! - async wrappers that run them on compio's blocking pool
//! - structured errors carrying the symbolic errno name, an
//!   operation-specific description and the raw errno
//!
//! The platform adapter is picked at build time from `target_os`; callers
//! never see the per-OS argument differences (macOS `position`/`options`,
//! BSD namespaces).
//!
//! ## Example
//!
//! ```rust,no_run
//! use compio_fs_xattr::{xattr, AttributeError};
//!
//! # fn example() -> Result<(), AttributeError> {
//! xattr::set("/tmp/f", "user.test", &[0x41, 0x42])?;
//! let value = xattr::get("/tmp/f", "user.test")?;
//! assert_eq!(value, [0x41, 0x42]);
//!
//! match xattr::get("/tmp/f", "user.missing") {
//!     Err(e) if e.is_not_found() => println!("{}: {}", e.code(), e.message()),
//!     other => println!("{other:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Note: on FreeBSD and NetBSD every name lives in the user
//! namespace and is used exactly as given, so `list` returns names without a
//! `user.` prefix unless the caller put one there.
//!
pub mod errno;
pub mod error;
mod names;
pub mod sizing;
pub mod sys;
pub mod xattr;

// Re-export main types
pub use error::{AttributeError, ExtendedError, Operation, Result};
pub use xattr::{
    get, get_xattr_at_path, list, list_xattr_at_path, remove, remove_xattr_at_path, set,
    set_xattr_at_path, AttributeRef,
};
