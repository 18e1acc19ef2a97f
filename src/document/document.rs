use crate::error_handling::Result;
use crate::tokenizer::{tokenize_chars, Token};
use serde::Serialize;

/// One projected token, either bare text or text paired with its start offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenRecord {
    Text(String),
    Positioned { text: String, start: usize },
}

impl TokenRecord {
    pub fn get_text(&self) -> &str {
        match self {
            TokenRecord::Text(text) => text,
            TokenRecord::Positioned { text, .. } => text,
        }
    }

    pub fn get_start(&self) -> Option<usize> {
        match self {
            TokenRecord::Text(_) => None,
            TokenRecord::Positioned { start, .. } => Some(*start),
        }
    }
}

/// Decoded input together with the ranges the tokenizer selected from it.
#[derive(Debug, Clone)]
pub struct TokenizedText {
    chars: Vec<char>,
    tokens: Vec<Token>,
}

impl TokenizedText {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let tokens = tokenize_chars(&chars);
        Self { chars, tokens }
    }

    /// Fails as a whole on invalid UTF-8; nothing is tokenized in that case.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self> {
        let text = String::from_utf8(bytes)?;
        Ok(Self::new(&text))
    }

    pub fn get_tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get_num_tokens(&self) -> usize {
        self.tokens.len()
    }

    pub fn get_num_chars(&self) -> usize {
        self.chars.len()
    }

    pub fn get_token_text(&self, token: &Token) -> String {
        token.get_text(&self.chars)
    }

    pub fn texts(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(|token| self.get_token_text(token))
            .collect()
    }

    pub fn texts_with_positions(&self) -> Vec<(String, usize)> {
        self.tokens
            .iter()
            .map(|token| (self.get_token_text(token), token.get_start()))
            .collect()
    }

    /// Projects every token the same way; the token list itself never changes.
    pub fn project(&self, return_token_pos: bool) -> Vec<TokenRecord> {
        self.tokens
            .iter()
            .map(|token| {
                let text = self.get_token_text(token);
                match return_token_pos {
                    true => TokenRecord::Positioned {
                        text,
                        start: token.get_start(),
                    },
                    false => TokenRecord::Text(text),
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct TokenizedLine {
    line_num: usize,
    tokenized: TokenizedText,
}

impl TokenizedLine {
    pub fn get_line_num(&self) -> usize {
        self.line_num
    }

    pub fn get_tokenized(&self) -> &TokenizedText {
        &self.tokenized
    }
}

/// Tokenizes every line on its own. Lines are numbered from 1 and offsets restart at
/// each line; `\n` and `\r\n` endings are not part of the line.
pub fn tokenize_lines(text: &str) -> Vec<TokenizedLine> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| TokenizedLine {
            line_num: idx + 1,
            tokenized: TokenizedText::new(line),
        })
        .collect()
}
