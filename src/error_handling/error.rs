use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("failed to parse YAML config: {0}")]
    YamlParsingError(#[from] serde_yaml::Error),
    #[error("failed to render YAML output: {0}")]
    YamlRenderingError(serde_yaml::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("unknown config key: {0}")]
    UnknownConfigKey(String),
    #[error("unsupported output format: {0}")]
    UnsupportedOutputFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
