//! Whitespace normalization
//!
//! Extracted text arrives with arbitrary runs of spaces, tabs, and newlines
//! left over from markup removal. Normalization collapses every whitespace
//! run to a single space and trims the ends, so the segmenter sees clean
//! sentence boundaries.

/// Collapse whitespace runs to single spaces and trim the ends
///
/// Whitespace-only input normalizes to the empty string.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }

    out
}
