//! Parsers for the name-list buffer returned by `list`
//!
//! Linux and Apple return names as consecutive NUL-terminated strings. The
//! BSD `extattr_list_file` call instead returns each name prefixed by a
//! single length byte, with no terminator.
//!
//! Both parsers keep the OS order, skip empty entries and do not de-duplicate.
//! Names that are not valid UTF-8 are decoded lossily.

/// Split a `listxattr` buffer of NUL-terminated names
#[cfg_attr(
    any(target_os = "freebsd", target_os = "netbsd"),
    allow(dead_code)
)]
pub(crate) fn parse_nul_separated(buffer: &[u8]) -> Vec<String> {
    buffer
        .split(|&byte| byte == 0)
        .filter(|name| !name.is_empty())
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .collect()
}

/// Split an `extattr_list_file` buffer of length-prefixed names
///
/// A length byte that runs past the end of the buffer ends parsing; the
/// partial entry is dropped.
#[cfg_attr(
    not(any(target_os = "freebsd", target_os = "netbsd")),
    allow(dead_code)
)]
pub(crate) fn parse_length_prefixed(buffer: &[u8]) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = buffer;
    while let Some((&len, tail)) = rest.split_first() {
        let len = usize::from(len);
        let Some(name) = tail.get(..len) else {
            log::warn!("truncated extattr list entry: want {len} bytes, have {}", tail.len());
            break;
        };
        if !name.is_empty() {
            names.push(String::from_utf8_lossy(name).into_owned());
        }
        rest = &tail[len..];
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nul_separated_basic() {
        let names = parse_nul_separated(b"user.a\0user.bb\0security.selinux\0");
        assert_eq!(names, vec!["user.a", "user.bb", "security.selinux"]);
    }

    #[test]
    fn test_nul_separated_empty() {
        assert!(parse_nul_separated(b"").is_empty());
        assert!(parse_nul_separated(b"\0\0").is_empty());
    }

    #[test]
    fn test_nul_separated_keeps_order_and_duplicates() {
        let names = parse_nul_separated(b"z\0a\0z\0");
        assert_eq!(names, vec!["z", "a", "z"]);
    }

    #[test]
    fn test_nul_separated_missing_terminator() {
        assert_eq!(parse_nul_separated(b"one\0two"), vec!["one", "two"]);
    }

    #[test]
    fn test_nul_separated_non_utf8_is_lossy() {
        let names = parse_nul_separated(b"ok\0bad\xff\0");
        assert_eq!(names.len(), 2);
        assert_eq!(names[1], "bad\u{fffd}");
    }

    #[test]
    fn test_length_prefixed_basic() {
        let names = parse_length_prefixed(b"\x04test\x06second");
        assert_eq!(names, vec!["test", "second"]);
    }

    #[test]
    fn test_length_prefixed_empty_and_zero_length() {
        assert!(parse_length_prefixed(b"").is_empty());
        assert_eq!(parse_length_prefixed(b"\x00\x01x"), vec!["x"]);
    }

    #[test]
    fn test_length_prefixed_truncated_entry_dropped() {
        assert_eq!(parse_length_prefixed(b"\x01a\x09abc"), vec!["a"]);
    }
}
