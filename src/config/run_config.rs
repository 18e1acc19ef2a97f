use crate::error_handling::Error::{InvalidConfig, UnknownConfigKey};
use crate::error_handling::Result;
use crate::output::OutputFormat;
use indexmap::IndexMap;
use serde_yaml::Value;
use tracing::debug;

/// Front-end options. The tokenizer itself has nothing to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub return_token_pos: bool,
    pub format: OutputFormat,
    pub per_line: bool,
}

impl RunConfig {
    const RETURN_TOKEN_POS_KEY: &'static str = "return_token_pos";
    const FORMAT_KEY: &'static str = "format";
    const PER_LINE_KEY: &'static str = "per_line";

    pub fn parse_from_file(yaml_file_path: &str) -> Result<RunConfig> {
        let contents = std::fs::read_to_string(yaml_file_path)?;
        let config = Self::parse_from_str(contents.as_str())?;
        debug!(path = yaml_file_path, ?config, "loaded run config");
        Ok(config)
    }

    pub fn parse_from_str(yaml_content: &str) -> Result<RunConfig> {
        // An empty document is a valid, all-defaults config
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }
        let kv_pairs: IndexMap<String, Value> = serde_yaml::from_str(yaml_content)?;
        Self::load_from_kv_pairs(kv_pairs)
    }

    fn get_bool(kv_map: &IndexMap<String, Value>, key: &'static str) -> Result<Option<bool>> {
        match kv_map.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(InvalidConfig(key)),
        }
    }

    fn load_from_kv_pairs(kv_pairs: IndexMap<String, Value>) -> Result<Self> {
        if let Some(key) = kv_pairs.keys().find(|key| {
            ![
                Self::RETURN_TOKEN_POS_KEY,
                Self::FORMAT_KEY,
                Self::PER_LINE_KEY,
            ]
            .contains(&key.as_str())
        }) {
            return Err(UnknownConfigKey(key.clone()));
        }

        let mut config = Self::default();
        if let Some(b) = Self::get_bool(&kv_pairs, Self::RETURN_TOKEN_POS_KEY)? {
            config.return_token_pos = b;
        }
        if let Some(b) = Self::get_bool(&kv_pairs, Self::PER_LINE_KEY)? {
            config.per_line = b;
        }
        match kv_pairs.get(Self::FORMAT_KEY) {
            None => {}
            Some(Value::String(name)) => config.format = name.parse()?,
            Some(_) => return Err(InvalidConfig(Self::FORMAT_KEY)),
        }
        Ok(config)
    }
}
