mod char_class;
mod special_sequence;
mod token;
mod tokenizer;
mod validity;

pub use char_class::CharClass;
pub use special_sequence::match_special;
pub use special_sequence::MatchElement;
pub use special_sequence::SpecialSequence;
pub use special_sequence::SPECIAL_SEQUENCES;
pub use token::Token;
pub use tokenizer::tokenize;
pub use tokenizer::tokenize_chars;
pub use validity::is_separator;
pub use validity::is_valid_token;
pub use validity::SEPARATORS;
