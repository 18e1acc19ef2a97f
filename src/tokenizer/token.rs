use std::ops::Range;

/// A half-open `[start, end)` range of character offsets into the tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token {
    start: usize,
    end: usize,
}

impl Token {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty token [{}, {})", start, end);
        Self { start, end }
    }

    pub fn get_start(&self) -> usize {
        self.start
    }

    pub fn get_end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn get_range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn get_text(&self, chars: &[char]) -> String {
        chars[self.get_range()].iter().collect()
    }

    /// Same range moved `offset` characters to the right.
    pub fn shifted(&self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

impl From<Token> for (usize, usize) {
    fn from(token: Token) -> Self {
        (token.start, token.end)
    }
}
