//! FreeBSD and NetBSD: `extattr_*_file` in the user namespace

use super::{check_len, check_status, out_buffer, XattrSyscalls};
use crate::names::parse_length_prefixed;
use libc::c_void;
use std::ffi::CStr;

/// The only namespace this crate touches
const NAMESPACE: libc::c_int = libc::EXTATTR_NAMESPACE_USER;

/// `extattr(2)` calls against `EXTATTR_NAMESPACE_USER`
#[derive(Debug, Clone, Copy, Default)]
pub struct Bsd;

impl XattrSyscalls for Bsd {
    fn get(path: &CStr, name: &CStr, buf: Option<&mut [u8]>) -> Result<usize, i32> {
        let (ptr, size) = out_buffer(buf);
        // SAFETY: path and name are NUL-terminated; ptr is null with size 0 or
        // points to `size` writable bytes.
        check_len(unsafe {
            libc::extattr_get_file(path.as_ptr(), NAMESPACE, name.as_ptr(), ptr, size)
        })
    }

    fn set(path: &CStr, name: &CStr, value: &[u8]) -> Result<(), i32> {
        // SAFETY: value is readable for value.len() bytes.
        let written = check_len(unsafe {
            libc::extattr_set_file(
                path.as_ptr(),
                NAMESPACE,
                name.as_ptr(),
                value.as_ptr().cast::<c_void>(),
                value.len(),
            )
        })?;
        if written != value.len() {
            log::warn!("extattr_set_file wrote {written} of {} bytes", value.len());
        }
        Ok(())
    }

    fn list(path: &CStr, buf: Option<&mut [u8]>) -> Result<usize, i32> {
        let (ptr, size) = out_buffer(buf);
        // SAFETY: as for get.
        check_len(unsafe { libc::extattr_list_file(path.as_ptr(), NAMESPACE, ptr, size) })
    }

    fn remove(path: &CStr, name: &CStr) -> Result<(), i32> {
        // SAFETY: path and name are NUL-terminated.
        check_status(unsafe { libc::extattr_delete_file(path.as_ptr(), NAMESPACE, name.as_ptr()) })
    }

    fn parse_names(buffer: &[u8]) -> Vec<String> {
        parse_length_prefixed(buffer)
    }
}
