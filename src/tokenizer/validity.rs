/// Characters that are dropped when they make up a token on their own.
pub static SEPARATORS: [char; 5] = [' ', '\t', '\n', '\r', '*'];

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// A candidate range is kept unless it is empty or a single separator.
///
/// Longer runs made only of separators are kept as well; the boundary rule never
/// produces one because `Other` characters do not accumulate.
pub fn is_valid_token(chars: &[char], start: usize, end: usize) -> bool {
    if start == end {
        return false;
    }
    if start + 1 == end && chars.get(start).is_some_and(|&c| is_separator(c)) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_is_invalid() {
        let chars: Vec<char> = "abc".chars().collect();
        assert_eq!(false, is_valid_token(&chars, 0, 0));
        assert_eq!(false, is_valid_token(&chars, 3, 3));
    }

    #[test]
    fn test_lone_separator_is_invalid() {
        let chars: Vec<char> = " \t\n\r*".chars().collect();
        for i in 0..chars.len() {
            assert_eq!(false, is_valid_token(&chars, i, i + 1), "{:?}", chars[i]);
        }
    }

    #[test]
    fn test_other_single_chars_are_valid() {
        let chars: Vec<char> = ",.!a7-".chars().collect();
        for i in 0..chars.len() {
            assert!(is_valid_token(&chars, i, i + 1), "{:?}", chars[i]);
        }
    }

    #[test]
    fn test_out_of_bounds_range_does_not_panic() {
        let chars: Vec<char> = "ab".chars().collect();
        assert!(is_valid_token(&chars, 5, 6));
        assert_eq!(false, is_valid_token(&chars, 5, 5));
    }

    #[test]
    fn test_multi_char_separator_run_is_kept() {
        let chars: Vec<char> = "  ".chars().collect();
        assert!(is_valid_token(&chars, 0, 2));
    }
}
