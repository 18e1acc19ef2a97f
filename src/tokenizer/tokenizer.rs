use super::{is_valid_token, match_special, CharClass, Token};
use tracing::{debug, trace};

struct Scanner<'a> {
    chars: &'a [char],
    pos: usize,
    word_start: usize,
    word_type: CharClass,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(chars: &'a [char]) -> Self {
        // The class of an empty input is never looked at.
        let word_type = chars
            .first()
            .map_or(CharClass::Other, |&c| CharClass::classify(c));
        Self {
            chars,
            pos: 0,
            word_start: 0,
            word_type,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while self.pos < self.chars.len() {
            let cur_type = CharClass::classify(self.chars[self.pos]);
            if cur_type != self.word_type || self.word_type.is_other() {
                self.close_run();
                self.word_start = self.pos;
                self.word_type = cur_type;
            }

            let skip = match_special(self.chars, self.pos);
            if skip > 0 {
                // Absorb the whole sequence without boundary tests on its inner characters
                self.pos += skip;
                self.word_type = CharClass::classify(self.chars[self.pos - 1]);
            } else {
                self.pos += 1;
            }
        }
        self.close_run();
        self.tokens
    }

    fn close_run(&mut self) {
        let (start, end) = (self.word_start, self.pos);
        if is_valid_token(self.chars, start, end) {
            trace!(start, end, "emit token");
            self.tokens.push(Token::new(start, end));
        } else if start != end {
            trace!(start, end, "drop separator");
        }
    }
}

/// Splits `chars` into word and punctuation tokens.
///
/// Runs of letters and runs of digits form one token each, every other character stands
/// alone, and lone separators are dropped. Contractions (`don't`), decimals (`3.14`) and
/// leading-dot decimals (`.5`) are kept whole.
pub fn tokenize_chars(chars: &[char]) -> Vec<Token> {
    let tokens = Scanner::new(chars).run();
    debug!(num_chars = chars.len(), num_tokens = tokens.len(), "tokenized");
    tokens
}

/// Tokenizes `text`. Offsets are in characters, not bytes.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    tokenize_chars(&chars)
}
