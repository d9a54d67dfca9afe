//! String validation functions

/// Strip surrounding whitespace, including the byte order mark `U+FEFF`
/// that browsers also treat as whitespace when trimming
pub fn trim_value(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// True when the value has no content once surrounding whitespace is removed
pub fn is_blank(s: &str) -> bool {
    trim_value(s).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n "));
        assert!(is_blank("\u{FEFF}"));
        assert!(is_blank(" \u{FEFF}\u{00A0}"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_trim_value_strips_byte_order_mark() {
        assert_eq!(trim_value("\u{FEFF}Ana\u{FEFF} "), "Ana");
        assert_eq!(trim_value("a\u{FEFF}b"), "a\u{FEFF}b");
    }
}
