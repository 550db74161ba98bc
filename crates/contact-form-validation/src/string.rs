//! String validation functions

/// Checks that a value has at least `min` characters
///
/// Counts characters, not bytes, and does not trim: whitespace counts.
pub fn has_min_chars(s: &str, min: usize) -> bool {
    s.chars().take(min).count() >= min
}

/// Checks that a value is non-empty
pub fn is_present(s: &str) -> bool {
    has_min_chars(s, 1)
}

/// Enum/value restriction
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

/// Checkbox acknowledgement: only an explicit `true` passes
pub fn is_checked(value: bool) -> bool {
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_chars() {
        assert!(has_min_chars("hello", 3));
        assert!(!has_min_chars("hi", 3));
        // multi-byte characters count once
        assert!(has_min_chars("żółw", 4));
        assert!(!has_min_chars("żó", 3));
    }

    #[test]
    fn test_presence() {
        assert!(is_present("a"));
        assert!(is_present(" "));
        assert!(!is_present(""));
    }

    #[test]
    fn test_enum_variant() {
        let allowed = &["general", "support"];
        assert!(is_one_of("general", allowed));
        assert!(is_one_of("support", allowed));
        assert!(!is_one_of("billing", allowed));
        assert!(!is_one_of("General", allowed));
        assert!(!is_one_of("", allowed));
    }

    #[test]
    fn test_checked() {
        assert!(is_checked(true));
        assert!(!is_checked(false));
    }
}
