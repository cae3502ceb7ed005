//! Command-line interface for html2md.
//!
//! `html2md [-s] INPUT OUTPUT` converts one HTML file into one Markdown file.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use html2md::{ConversionOptions, convert_reader};
use log::{LevelFilter, debug};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Convert an HTML file to Markdown.
#[derive(Parser, Debug)]
#[command(name = "html2md", version, about, long_about = None)]
struct Cli {
    /// Strip unknown tags instead of keeping them as literal markup
    #[arg(short = 's', long = "strip")]
    strip: bool,

    /// Log conversion details to stderr
    #[arg(long)]
    debug: bool,

    /// HTML file to read
    #[arg(value_name = "INPUT", value_parser = NonEmptyStringValueParser::new())]
    input: String,

    /// Markdown file to write
    #[arg(value_name = "OUTPUT", value_parser = NonEmptyStringValueParser::new())]
    output: String,
}

fn main() -> ExitCode {
    // Usage errors exit with status 2 from inside clap.
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { LevelFilter::Debug } else { LevelFilter::Warn };
    let config = ConfigBuilder::new().add_filter_ignore_str("html5ever").build();

    if let Err(err) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Warning: failed to initialize logging: {err}");
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = File::open(&cli.input).with_context(|| format!("Error reading file {}", cli.input))?;
    let output = File::create(&cli.output).with_context(|| format!("Error creating file {}", cli.output))?;

    let options = ConversionOptions::new().with_strip_unknown_tags(cli.strip);
    debug!("converting {} -> {} with {options:?}", cli.input, cli.output);

    convert_reader(&mut BufReader::new(input), &mut BufWriter::new(output), &options)
        .with_context(|| format!("Error converting {} to {}", cli.input, cli.output))?;

    Ok(())
}
