//! Common utilities for link targets

use once_cell::sync::Lazy;
use regex::Regex;

/// URI scheme prefix, e.g. `https:` or `mailto:`
static SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):").expect("Invalid SCHEME_RE regex"));

/// Lower-cased URI scheme of a target, if it has one
pub fn url_scheme(target: &str) -> Option<String> {
    SCHEME_RE
        .captures(target)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
}

/// Check whether the target's scheme is one of `schemes` (lower-case)
pub fn has_scheme(target: &str, schemes: &[&str]) -> bool {
    url_scheme(target).is_some_and(|scheme| schemes.contains(&scheme.as_str()))
}

/// Decode `%XX` escapes. Malformed escapes are kept verbatim and invalid
/// UTF-8 is replaced with U+FFFD.
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
