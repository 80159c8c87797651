//! Shared helpers for command-line tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a file on a filesystem that accepts `user.*` attributes
///
/// Returns `None` (and the test should return early) when the temp
/// filesystem has no user xattr support.
#[allow(dead_code)]
pub fn xattr_scratch_file() -> Option<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("target.txt");
    std::fs::write(&path, "Hello, World!").unwrap();

    match compio_fs_xattr::set(&path, "user.probe", b"1") {
        Ok(()) => {
            compio_fs_xattr::remove(&path, "user.probe").unwrap();
            Some((temp_dir, path))
        }
        Err(e) if e.is_unsupported() => {
            println!("Extended attributes not supported on this filesystem - test skipped");
            None
        }
        Err(e) => panic!("unexpected xattr probe failure: {e}"),
    }
}
