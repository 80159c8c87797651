//! Probe-then-fill buffer sizing
//!
//! `getxattr` and `listxattr` (and their BSD `extattr_*` counterparts) cannot
//! tell us the size of their output up front. Both support the same protocol:
//!
//! 1. Call with no buffer and size 0; the return value is the required length.
//! 2. Allocate exactly that many bytes.
//! 3. Call again with the buffer; the return value is the number of bytes
//!    actually written.
//!
//! The second call is issued even when the probe reports 0 bytes, so an
//! attribute deleted between the two calls still surfaces as an error.
//!
//! The value may change between the calls. A shrink is handled by truncating to
//! the fill length; a growth makes the fill fail with `ERANGE`, which is
//! returned as-is. There is no retry loop.

/// Run the probe/fill protocol over `call`
///
/// `call(None)` must issue the syscall with a null buffer and size 0;
/// `call(Some(buf))` must issue it with `buf` as destination. Either returns
/// the syscall's byte count or the raw errno.
///
/// # Errors
///
/// Returns the errno of whichever call failed. If the probe fails the fill
/// call is never made.
pub fn probe_then_fill<F>(mut call: F) -> Result<Vec<u8>, i32>
where
    F: FnMut(Option<&mut [u8]>) -> Result<usize, i32>,
{
    let probed = call(None)?;
    log::trace!("xattr probe reported {probed} bytes");

    let mut buffer = vec![0u8; probed];
    let filled = call(Some(&mut buffer))?;

    // Never expose bytes the OS did not write
    buffer.truncate(filled.min(probed));
    Ok(buffer)
}
