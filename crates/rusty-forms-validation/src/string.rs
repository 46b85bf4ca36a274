//! String validation
//!
//! Lengths are measured in UTF-16 code units, the unit browsers use for the
//! `minlength`/`maxlength` constraints.

/// Length of `s` in UTF-16 code units
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// A value satisfies "required" when it is non-empty
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}

/// At least `min` UTF-16 code units
pub fn has_min_length(s: &str, min: usize) -> bool {
    utf16_len(s) >= min
}

/// At most `max` UTF-16 code units
pub fn has_max_length(s: &str, max: usize) -> bool {
    utf16_len(s) <= max
}
