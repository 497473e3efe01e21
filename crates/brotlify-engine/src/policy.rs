//! Which files are never compressed

use std::borrow::Cow;
use std::ffi::OsStr;

/// Extensions of files that are left alone
///
/// Images, audio and video are already compressed. Archives gain nothing, and
/// `.br` keeps a second run from compressing its own output.
pub const SKIPPED_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".webp", ".br", ".tar", ".gz", ".zip", ".mp3", ".ogg", ".mp4",
];

/// Check whether a file with this extension must be skipped
///
/// `extension` includes the leading dot; comparison ignores ASCII case.
pub fn should_skip(extension: &str) -> bool {
    SKIPPED_EXTENSIONS
        .iter()
        .any(|skipped| skipped.eq_ignore_ascii_case(extension))
}

/// Extension of a file name, from the last dot inclusive
///
/// Returns an empty string when the name has no dot. The name itself is never
/// re-encoded; only bytes after the dot that are not UTF-8 are replaced.
pub fn extension_of(name: &OsStr) -> Cow<'_, str> {
    let bytes = name.as_encoded_bytes();
    match bytes.iter().rposition(|&b| b == b'.') {
        Some(i) => String::from_utf8_lossy(&bytes[i..]),
        None => Cow::Borrowed(""),
    }
}
