use line_tokenizer::config::RunConfig;
use line_tokenizer::document::{BufferedFileStream, ReaderStream, TextSource};
use line_tokenizer::error_handling::Result;
use line_tokenizer::output::{render, OutputFormat, Rendered};

use clap::{Arg, ArgAction, Command};
use tracing::debug;

/// Logs go to stderr and only when `RUST_LOG` is set, e.g. `RUST_LOG=line_tokenizer=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run() -> Result<()> {
    let matches = Command::new("tokenize")
        .version(line_tokenizer::version())
        .about("Split text into word and punctuation tokens")
        .arg(
            Arg::new("input")
                .help("Path to the input file; reads stdin when omitted")
                .value_name("INPUT_FILE"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a YAML run config")
                .value_name("CONFIG_FILE"),
        )
        .arg(
            Arg::new("positions")
                .long("positions")
                .short('p')
                .help("Print each token's start offset")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["plain", "yaml"])
                .value_name("FORMAT"),
        )
        .arg(
            Arg::new("per-line")
                .long("per-line")
                .short('l')
                .help("Tokenize every line separately")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => RunConfig::parse_from_file(path)?,
        None => RunConfig::default(),
    };
    if matches.get_flag("positions") {
        config.return_token_pos = true;
    }
    if matches.get_flag("per-line") {
        config.per_line = true;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        config.format = format.parse::<OutputFormat>()?;
    }

    let mut source: Box<dyn TextSource> = match matches.get_one::<String>("input") {
        Some(path) => Box::new(BufferedFileStream::new(path)?),
        None => Box::new(ReaderStream::new(std::io::stdin().lock())),
    };
    let text = source.read_text()?;

    let rendered = Rendered::from_text(&text, &config);
    debug!(num_tokens = rendered.get_num_tokens(), ?config, "rendering");
    render(&rendered, config.format, &mut std::io::stdout().lock())
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("tokenize: {}", e);
        std::process::exit(1);
    }
}
