use crate::error_handling::Result;
use std::io::{BufReader, Read};
use tracing::debug;

/// Anything the whole input text can be read from at once.
pub trait TextSource {
    fn read_text(&mut self) -> Result<String>;
}

fn read_utf8<R: Read>(reader: &mut R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    debug!(num_bytes = bytes.len(), "read input");
    Ok(String::from_utf8(bytes)?)
}

pub struct BufferedFileStream {
    buf_reader: BufReader<std::fs::File>,
}

impl BufferedFileStream {
    pub fn new(path: &str) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(Self {
            buf_reader: BufReader::new(file),
        })
    }
}

impl TextSource for BufferedFileStream {
    fn read_text(&mut self) -> Result<String> {
        read_utf8(&mut self.buf_reader)
    }
}

/// Wraps any reader, e.g. stdin.
pub struct ReaderStream<R: Read> {
    reader: R,
}

impl<R: Read> ReaderStream<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> TextSource for ReaderStream<R> {
    fn read_text(&mut self) -> Result<String> {
        read_utf8(&mut self.reader)
    }
}
