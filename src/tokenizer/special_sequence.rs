use super::CharClass;

/// One position of a special sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchElement {
    Literal(char),
    AnyOf(CharClass),
}

impl MatchElement {
    fn matches(&self, c: char) -> bool {
        match *self {
            MatchElement::Literal(literal) => literal == c,
            MatchElement::AnyOf(class) => class == CharClass::classify(c),
        }
    }
}

/// A fixed pattern whose characters are fused into the current run when it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialSequence {
    elements: &'static [MatchElement],
}

impl SpecialSequence {
    pub const fn new(elements: &'static [MatchElement]) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn get_elements(&self) -> &'static [MatchElement] {
        self.elements
    }

    /// Full match only; running off the end of the input is a mismatch.
    pub fn matches_at(&self, chars: &[char], pos: usize) -> bool {
        match chars.get(pos..pos + self.len()) {
            Some(window) => self
                .elements
                .iter()
                .zip(window)
                .all(|(element, &c)| element.matches(c)),
            None => false,
        }
    }
}

use MatchElement::{AnyOf, Literal};

/// Checked top to bottom, the first full match wins.
pub static SPECIAL_SEQUENCES: [SpecialSequence; 3] = [
    // can't, John's
    SpecialSequence::new(&[AnyOf(CharClass::Letter), Literal('\''), AnyOf(CharClass::Letter)]),
    // 3.14
    SpecialSequence::new(&[AnyOf(CharClass::Digit), Literal('.'), AnyOf(CharClass::Digit)]),
    // .5
    SpecialSequence::new(&[Literal('.'), AnyOf(CharClass::Digit)]),
];

/// Returns how many characters starting at `pos` belong to a special sequence, or 0.
pub fn match_special(chars: &[char], pos: usize) -> usize {
    SPECIAL_SEQUENCES
        .iter()
        .find(|sequence| sequence.matches_at(chars, pos))
        .map_or(0, SpecialSequence::len)
}
