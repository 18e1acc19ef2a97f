use line_tokenizer::document::{tokenize_lines, BufferedFileStream, TextSource, TokenizedText};
use line_tokenizer::error_handling::Result;

use clap::{Arg, Command};
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use std::time::{Duration, Instant};

fn find_files<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    for entry in fs::read_dir(&path)? {
        let path = entry?.path();
        if path.is_dir() {
            result.extend(find_files(&path)?);
        } else {
            result.push(path);
        }
    }
    result.sort();
    Ok(result)
}

fn benchmark(input_paths: Vec<PathBuf>, per_line: bool) -> Result<()> {
    let mut total_duration = Duration::new(0, 0);
    let mut total_chars: usize = 0;
    let mut total_tokens: usize = 0;

    for path in input_paths {
        let path_str = path.to_string_lossy();
        println!("Tokenizing file: {}", path_str);
        // Decoding is kept out of the timed section
        let text = BufferedFileStream::new(&path_str)?.read_text()?;

        let start = Instant::now();
        let (num_chars, num_tokens) = if per_line {
            tokenize_lines(&text).iter().fold((0, 0), |(chars, tokens), line| {
                let tokenized = line.get_tokenized();
                (chars + tokenized.get_num_chars(), tokens + tokenized.get_num_tokens())
            })
        } else {
            let tokenized = TokenizedText::new(&text);
            (tokenized.get_num_chars(), tokenized.get_num_tokens())
        };
        total_duration += start.elapsed();

        total_chars += num_chars;
        total_tokens += num_tokens;
        println!("Num chars: {}; Num tokens: {}", num_chars, num_tokens);
    }

    let secs = total_duration.as_secs_f64().max(f64::EPSILON);
    println!("\nBenchmark tokenizer:");
    println!("Total number of chars: {}", total_chars);
    println!("Total number of tokens: {}", total_tokens);
    println!("Total duration: {}s", secs);
    println!("Token throughput: {} per second", total_tokens as f64 / secs);
    println!(
        "Char throughput: {}M per second",
        total_chars as f64 / secs / (1000 * 1000) as f64
    );

    Ok(())
}

fn main() -> Result<()> {
    let matches = Command::new("line-tokenizer-benchmark")
        .version("1.0")
        .arg(
            Arg::new("input")
                .help("Directory of the input text files")
                .required(true)
                .value_name("INPUT_DIR"),
        )
        .arg(
            Arg::new("per-line")
                .long("per-line")
                .help("Tokenize each line separately")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let input_dir: &String = matches.get_one("input").expect("no input dir found");
    let input_paths = find_files(Path::new(input_dir.as_str()))?;
    benchmark(input_paths, matches.get_flag("per-line"))
}
