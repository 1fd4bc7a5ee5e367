//! Token-shape heuristics. Each function answers one question about a single
//! whitespace-split token; the line-level logic in the parent module decides
//! what to do with the answers.

use std::sync::LazyLock;

use regex::Regex;

static STUDENT_NO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

pub fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

pub fn has_digit(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
}

/// Student numbers are exactly ten digits, no more, no less.
pub fn is_student_no(token: &str) -> bool {
    STUDENT_NO_RE.is_match(token)
}

/// Split a token where the sequence number and the student number arrived
/// fused ("322016138632" is sequence 32 followed by student 2016138632).
/// Prefix lengths 1 to 3 are tried shortest first and the first split whose
/// suffix is exactly ten digits wins, so an ambiguous token always takes
/// the shortest sequence number. A bare ten-digit token has no room for a
/// prefix and yields nothing.
pub fn split_combined(token: &str) -> Option<(String, String)> {
    if !is_digits(token) || token.len() < 10 {
        return None;
    }
    for split_pos in 1..=3 {
        let suffix = &token[split_pos..];
        if is_student_no(suffix) {
            return Some((token[..split_pos].to_string(), suffix.to_string()));
        }
    }
    None
}

/// NRC entries carry slashes ("123456/78/1"); passports show up as long
/// digit runs. Nine digits is the floor so ordinary name-adjacent numbers
/// do not get swallowed.
pub fn is_id_or_passport(token: &str) -> bool {
    token.contains('/') || (token.len() >= 9 && is_digits(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_checks() {
        assert!(is_digits("2016045566"));
        assert!(!is_digits("2016O45566"));
        assert!(!is_digits(""));
        assert!(has_digit("B.A.2016"));
        assert!(!has_digit("SURNAME"));
    }

    #[test]
    fn student_no_is_exactly_ten_digits() {
        assert!(is_student_no("2016138632"));
        assert!(!is_student_no("201613863"));
        assert!(!is_student_no("20161386321"));
        assert!(!is_student_no("201613863X"));
    }

    #[test]
    fn combined_token_splits_at_shortest_prefix() {
        assert_eq!(
            split_combined("322016138632"),
            Some(("32".to_string(), "2016138632".to_string()))
        );
        assert_eq!(
            split_combined("42016138632"),
            Some(("4".to_string(), "2016138632".to_string()))
        );
        assert_eq!(
            split_combined("1072016138632"),
            Some(("107".to_string(), "2016138632".to_string()))
        );
    }

    #[test]
    fn combined_token_without_valid_split_yields_nothing() {
        // Ten digits leave no room for a sequence prefix.
        assert_eq!(split_combined("2016138632"), None);
        // Fourteen digits would need a four-digit prefix.
        assert_eq!(split_combined("10072016138632"), None);
        assert_eq!(split_combined("MWANZA"), None);
    }

    #[test]
    fn id_or_passport_shapes() {
        assert!(is_id_or_passport("123456/78/1"));
        assert!(is_id_or_passport("AB/99"));
        assert!(is_id_or_passport("123456789"));
        assert!(!is_id_or_passport("12345678"));
        assert!(!is_id_or_passport("12345678X"));
        assert!(!is_id_or_passport("BANDA"));
    }
}
