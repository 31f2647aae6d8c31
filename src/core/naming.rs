//! Derivation of new file names: extension extraction and zero-padded numbering.
//!
//! Names are handled as `OsStr` so files whose names are not valid UTF-8 are
//! renamed like any other.
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

/// Largest accepted padding width.
pub const MAX_WIDTH: usize = 255;

/// Extension of a base name, starting at its last `.` (inclusive).
///
/// Leading dots do not start an extension: `.env` and `..a` have none, while
/// `a.tar.gz` yields `.gz` and `a.` yields `.`. An extension that is not valid
/// UTF-8 is converted lossily.
pub fn extension<S: AsRef<OsStr> + ?Sized>(name: &S) -> Cow<'_, str> {
    let bytes = name.as_ref().as_encoded_bytes();
    let Some(dot) = bytes.iter().rposition(|&b| b == b'.') else {
        return Cow::Borrowed("");
    };
    if bytes[..dot].iter().all(|&b| b == b'.') {
        return Cow::Borrowed("");
    }
    String::from_utf8_lossy(&bytes[dot..])
}

/// Zero-padded sequence number, at least `width` digits wide (capped at
/// [`MAX_WIDTH`]).
pub fn sequence_stem(sequence: usize, width: usize) -> String {
    format!("{:0width$}", sequence, width = width.min(MAX_WIDTH))
}

/// New name for `original` when it is assigned `sequence`.
pub fn sequence_name<S: AsRef<OsStr> + ?Sized>(
    original: &S,
    sequence: usize,
    width: usize,
) -> OsString {
    let mut name = sequence_stem(sequence, width);
    name.push_str(&extension(original));
    OsString::from(name)
}
