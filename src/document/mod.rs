mod document;
mod streams;

pub use document::tokenize_lines;
pub use document::TokenRecord;
pub use document::TokenizedLine;
pub use document::TokenizedText;
pub use streams::BufferedFileStream;
pub use streams::ReaderStream;
pub use streams::TextSource;
