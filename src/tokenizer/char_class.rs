use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Coarse character class driving the boundary decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Letter,
    Digit,
    Other,
}

impl CharClass {
    /// Letter is general category L*, Digit is Nd, and everything else is `Other`.
    ///
    /// Combining marks, letter numbers and symbols such as `Ⓐ` are `Other` even though
    /// they carry the `Alphabetic` property.
    pub fn classify(c: char) -> CharClass {
        if GeneralCategoryGroup::Letter == c.general_category_group() {
            return CharClass::Letter;
        }
        if GeneralCategory::DecimalNumber == c.general_category() {
            return CharClass::Digit;
        }
        CharClass::Other
    }

    pub fn is_other(self) -> bool {
        CharClass::Other == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_classes() {
        assert_eq!(CharClass::classify('a'), CharClass::Letter);
        assert_eq!(CharClass::classify('Z'), CharClass::Letter);
        assert_eq!(CharClass::classify('7'), CharClass::Digit);
        for c in [' ', '\t', '\n', '.', '\'', ',', '*', '-', '_'] {
            assert_eq!(CharClass::classify(c), CharClass::Other, "{:?}", c);
        }
    }

    #[test]
    fn test_unicode_classes() {
        assert_eq!(CharClass::classify('é'), CharClass::Letter);
        assert_eq!(CharClass::classify('ж'), CharClass::Letter);
        assert_eq!(CharClass::classify('中'), CharClass::Letter);
        // Arabic-Indic and fullwidth digits are decimal digits
        assert_eq!(CharClass::classify('٣'), CharClass::Digit);
        assert_eq!(CharClass::classify('７'), CharClass::Digit);
        // Outside the BMP
        assert_eq!(CharClass::classify('𝐀'), CharClass::Letter);
        assert_eq!(CharClass::classify('𝟘'), CharClass::Digit);
        assert_eq!(CharClass::classify('😀'), CharClass::Other);
    }

    #[test]
    fn test_alphabetic_non_letters_are_other() {
        // Devanagari vowel sign E (Mc)
        assert_eq!(CharClass::classify('\u{0947}'), CharClass::Other);
        // Combining Greek ypogegrammeni (Mn)
        assert_eq!(CharClass::classify('\u{0345}'), CharClass::Other);
        // Roman numeral twelve (Nl)
        assert_eq!(CharClass::classify('Ⅻ'), CharClass::Other);
        // Circled latin capital A (So)
        assert_eq!(CharClass::classify('Ⓐ'), CharClass::Other);
    }

    #[test]
    fn test_non_decimal_numbers_are_other() {
        assert_eq!(CharClass::classify('½'), CharClass::Other);
        assert_eq!(CharClass::classify('²'), CharClass::Other);
    }
}
