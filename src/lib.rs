pub mod config;
pub mod document;
pub mod error_handling;
pub mod output;
pub mod tokenizer;

pub use tokenizer::{tokenize, Token};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), VERSION);
        assert_eq!(false, version().is_empty());
    }
}
