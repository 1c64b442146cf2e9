//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("Acetaminophen", 6), "Acetam");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("81mg", 10), "81mg");
    }

    #[test]
    fn truncate_multibyte_boundary() {
        // 'µ' is 2 bytes; cutting inside it backs up to the previous boundary
        let s = "5µg";
        assert_eq!(truncate_str(s, 2), "5");
        assert_eq!(truncate_str(s, 3), "5µ");
    }
}
