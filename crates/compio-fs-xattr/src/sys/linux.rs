//! Linux and Android: plain `getxattr` family

use super::{check_len, check_status, out_buffer, XattrSyscalls};
use crate::names::parse_nul_separated;
use libc::c_void;
use std::ffi::CStr;

/// `getxattr(2)` and friends, following symlinks
#[derive(Debug, Clone, Copy, Default)]
pub struct Linux;

impl XattrSyscalls for Linux {
    fn get(path: &CStr, name: &CStr, buf: Option<&mut [u8]>) -> Result<usize, i32> {
        let (ptr, size) = out_buffer(buf);
        // SAFETY: path and name are NUL-terminated; ptr is null with size 0 or
        // points to `size` writable bytes.
        check_len(unsafe { libc::getxattr(path.as_ptr(), name.as_ptr(), ptr, size) })
    }

    fn set(path: &CStr, name: &CStr, value: &[u8]) -> Result<(), i32> {
        // SAFETY: value is readable for value.len() bytes.
        check_status(unsafe {
            libc::setxattr(
                path.as_ptr(),
                name.as_ptr(),
                value.as_ptr().cast::<c_void>(),
                value.len(),
                0, // flags: create or replace
            )
        })
    }

    fn list(path: &CStr, buf: Option<&mut [u8]>) -> Result<usize, i32> {
        let (ptr, size) = out_buffer(buf);
        // SAFETY: as for get.
        check_len(unsafe { libc::listxattr(path.as_ptr(), ptr.cast::<libc::c_char>(), size) })
    }

    fn remove(path: &CStr, name: &CStr) -> Result<(), i32> {
        // SAFETY: path and name are NUL-terminated.
        check_status(unsafe { libc::removexattr(path.as_ptr(), name.as_ptr()) })
    }

    fn parse_names(buffer: &[u8]) -> Vec<String> {
        parse_nul_separated(buffer)
    }
}
