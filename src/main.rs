use clap::Parser;
use huffman_rs::io::{read_code, read_text, write_code, LineMode};
use huffman_rs::report::CodeListing;
use huffman_rs::{Codec, HuffmanError, HuffmanTree};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Builds a Huffman code for a text file, writes the encoded text and decodes
/// it back.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Text to encode
    #[arg(short, long, env = "HUFFMAN_INPUT", default_value = "tekst.txt")]
    input: PathBuf,

    /// Where the encoded bit-string is written
    #[arg(short, long, env = "HUFFMAN_OUTPUT", default_value = "kod.txt")]
    output: PathBuf,

    /// Keep line separators as symbols instead of joining lines
    #[arg(long)]
    keep_newlines: bool,

    /// Verbosity, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("Error: decoded text differs from the original");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Runs the whole pipeline, returning whether the decoded text read back
/// from the output file matches the original.
///
/// Text with a single distinct symbol has an empty code and decodes to the
/// empty string; that is reported as a warning, not a mismatch.
fn run(cli: &Cli) -> Result<bool, HuffmanError> {
    let mode = if cli.keep_newlines {
        LineMode::Preserve
    } else {
        LineMode::Strip
    };

    let text = read_text(&cli.input, mode)?;
    let tree = HuffmanTree::from_text(&text)?;
    let codec = Codec::new(&tree);

    println!("Original text: {text}");
    print!("{}", CodeListing::new(&tree));

    let bits = codec.encode(&text)?;
    write_code(&cli.output, &bits)?;
    println!("Encoded text: {bits}");

    let decoded = codec.decode(&read_code(&cli.output)?)?;
    println!("Decoded text: {decoded}");

    let stats = codec.stats(&text)?;
    info!(
        symbols = stats.input_symbols,
        distinct = stats.distinct_symbols,
        bits = stats.encoded_bits,
        "average code length {:.3}, {:.2}% of 8-bit size",
        stats.average_code_length(),
        stats.compression_ratio()
    );

    if tree.root().is_leaf() {
        warn!(
            symbols = stats.input_symbols,
            "single distinct symbol has an empty code, repeat count is not recoverable"
        );
        return Ok(true);
    }

    let matches = decoded == text;
    debug!(matches, "round-trip checked");
    Ok(matches)
}

/// Installs the stderr subscriber. `RUST_LOG` directives override the level
/// picked by the `-d` count.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    fn declared_default(id: &str) -> (Vec<String>, Option<String>) {
        use clap::CommandFactory;
        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .expect("argument should be declared");
        let defaults = arg
            .get_default_values()
            .iter()
            .map(|value| value.to_string_lossy().into_owned())
            .collect();
        let env = arg.get_env().map(|name| name.to_string_lossy().into_owned());
        (defaults, env)
    }

    #[test]
    fn test_defaults() {
        // Declared defaults are independent of HUFFMAN_* in the environment
        assert_eq!(
            declared_default("input"),
            (vec!["tekst.txt".to_string()], Some("HUFFMAN_INPUT".to_string()))
        );
        assert_eq!(
            declared_default("output"),
            (vec!["kod.txt".to_string()], Some("HUFFMAN_OUTPUT".to_string()))
        );

        let cli = Cli::try_parse_from(["huffman"]).unwrap();
        assert!(!cli.keep_newlines);
        assert_eq!(cli.debug, 0);
    }

    #[test]
    fn test_run_writes_code_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "abracadabra\n").unwrap();

        let cli = Cli::try_parse_from([
            "huffman",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-dd",
        ])
        .unwrap();
        assert_eq!(cli.debug, 2);

        assert!(run(&cli).unwrap());

        let bits = std::fs::read_to_string(&output).unwrap();
        let tree = HuffmanTree::from_text("abracadabra").unwrap();
        assert_eq!(tree.decode(&bits).unwrap(), "abracadabra");
    }

    #[test]
    fn test_run_single_symbol() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "aaa\n").unwrap();

        let cli = Cli::try_parse_from([
            "huffman",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        assert!(run(&cli).unwrap());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_run_missing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("missing.txt");
        let cli = Cli::try_parse_from(["huffman", "-i", input.to_str().unwrap()]).unwrap();

        assert!(matches!(run(&cli), Err(HuffmanError::Io { .. })));
    }

    #[test]
    fn test_run_empty_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("empty.txt");
        std::fs::write(&input, "\n").unwrap();
        let cli = Cli::try_parse_from(["huffman", "-i", input.to_str().unwrap()]).unwrap();

        assert!(matches!(run(&cli), Err(HuffmanError::EmptyInput)));
    }
}
