//! Incremental `DD/MM/YYYY` masking for text typed one key at a time.

pub const DISPLAY_MASK: &str = "DD/MM/YYYY";
pub const MAX_DIGITS: usize = 8;
const SEPARATOR: char = '/';

/// Digits present in `text`, in order, capped at [`MAX_DIGITS`].
pub fn digits(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect()
}

/// Re-mask arbitrary input: drop everything but digits, keep at most eight,
/// and put separators after the day and month groups as soon as the next
/// group has started.
pub fn format(raw: &str) -> String {
    let digits = digits(raw);
    let mut out = String::with_capacity(DISPLAY_MASK.len());
    for (idx, ch) in digits.chars().enumerate() {
        if idx == 2 || idx == 4 {
            out.push(SEPARATOR);
        }
        out.push(ch);
    }
    tracing::trace!(raw, masked = %out, "masked input");
    out
}

pub fn is_complete(text: &str) -> bool {
    digits(text).len() == MAX_DIGITS
}
