use crate::config::RunConfig;
use crate::document::{tokenize_lines, TokenRecord, TokenizedText};
use crate::error_handling::Error::{UnsupportedOutputFormat, YamlRenderingError};
use crate::error_handling::Result;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = crate::error_handling::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(UnsupportedOutputFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRecord {
    pub line: usize,
    pub tokens: Vec<TokenRecord>,
}

/// Fully projected result, built before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    Tokens(Vec<TokenRecord>),
    Lines(Vec<LineRecord>),
}

impl Rendered {
    pub fn from_text(text: &str, config: &RunConfig) -> Self {
        if config.per_line {
            let lines = tokenize_lines(text)
                .iter()
                .map(|line| LineRecord {
                    line: line.get_line_num(),
                    tokens: line.get_tokenized().project(config.return_token_pos),
                })
                .collect();
            return Rendered::Lines(lines);
        }
        Rendered::Tokens(TokenizedText::new(text).project(config.return_token_pos))
    }

    pub fn get_num_tokens(&self) -> usize {
        match self {
            Rendered::Tokens(tokens) => tokens.len(),
            Rendered::Lines(lines) => lines.iter().map(|line| line.tokens.len()).sum(),
        }
    }
}

fn write_plain_record<W: Write>(w: &mut W, prefix: &str, record: &TokenRecord) -> Result<()> {
    match record {
        TokenRecord::Text(text) => writeln!(w, "{}{}", prefix, text)?,
        TokenRecord::Positioned { text, start } => {
            writeln!(w, "{}{}\t{}", prefix, start, text)?
        }
    }
    Ok(())
}

pub fn render<W: Write>(rendered: &Rendered, format: OutputFormat, w: &mut W) -> Result<()> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *w, rendered).map_err(YamlRenderingError)?,
        OutputFormat::Plain => match rendered {
            Rendered::Tokens(tokens) => {
                for record in tokens {
                    write_plain_record(w, "", record)?;
                }
            }
            Rendered::Lines(lines) => {
                for line in lines {
                    let prefix = format!("{}\t", line.line);
                    for record in &line.tokens {
                        write_plain_record(w, &prefix, record)?;
                    }
                }
            }
        },
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_yaml::Value;

    fn render_to_string(text: &str, config: &RunConfig) -> Result<String> {
        let mut out = Vec::new();
        render(&Rendered::from_text(text, config), config.format, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_format_names() -> Result<()> {
        assert_eq!("plain".parse::<OutputFormat>()?, OutputFormat::Plain);
        assert_eq!("yaml".parse::<OutputFormat>()?, OutputFormat::Yaml);
        assert!("json".parse::<OutputFormat>().is_err());
        Ok(())
    }

    #[test]
    fn test_plain() -> Result<()> {
        let config = RunConfig::default();
        assert_eq!(render_to_string("don't stop.", &config)?, "don't\nstop\n.\n");
        Ok(())
    }

    #[test]
    fn test_plain_with_positions() -> Result<()> {
        let config = RunConfig {
            return_token_pos: true,
            ..RunConfig::default()
        };
        assert_eq!(render_to_string(".5 kg", &config)?, "0\t.5\n3\tkg\n");
        Ok(())
    }

    #[test]
    fn test_plain_per_line() -> Result<()> {
        let config = RunConfig {
            per_line: true,
            ..RunConfig::default()
        };
        assert_eq!(render_to_string("a b\nc\n", &config)?, "1\ta\n1\tb\n2\tc\n");
        Ok(())
    }

    #[test]
    fn test_yaml_with_positions() -> Result<()> {
        let config = RunConfig {
            return_token_pos: true,
            format: OutputFormat::Yaml,
            per_line: false,
        };
        let yaml = render_to_string("3.14 is pi", &config)?;
        let value: Value = serde_yaml::from_str(&yaml)?;
        let records = value.as_sequence().map(Vec::len);
        assert_eq!(records, Some(3));
        assert_eq!(value[0]["text"].as_str(), Some("3.14"));
        assert_eq!(value[2]["start"].as_u64(), Some(8));
        Ok(())
    }

    #[test]
    fn test_yaml_per_line() -> Result<()> {
        let config = RunConfig {
            return_token_pos: false,
            format: OutputFormat::Yaml,
            per_line: true,
        };
        let yaml = render_to_string("can't\n\nstop", &config)?;
        let value: Value = serde_yaml::from_str(&yaml)?;
        assert_eq!(value[0]["line"].as_u64(), Some(1));
        assert_eq!(value[0]["tokens"][0].as_str(), Some("can't"));
        assert_eq!(value[1]["tokens"].as_sequence().map(Vec::len), Some(0));
        assert_eq!(value[2]["tokens"][0].as_str(), Some("stop"));
        Ok(())
    }

    #[test]
    fn test_num_tokens() {
        let config = RunConfig {
            per_line: true,
            ..RunConfig::default()
        };
        assert_eq!(Rendered::from_text("a b\nc d e", &config).get_num_tokens(), 5);
    }
}
