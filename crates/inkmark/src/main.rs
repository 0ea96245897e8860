//! inkmark CLI - Markdown to HTML converter.
//!
//! Reads Markdown from a file (or stdin) and writes HTML to a file (or
//! stdout). The engine options are exposed one-to-one as flags.

mod error;

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Parser;
use inkmark_core::{Markdown, Options};
use tracing_subscriber::EnvFilter;

use error::CliError;

/// Convert Markdown to HTML.
#[derive(Parser)]
#[command(name = "inkmark", version, about)]
struct Cli {
    /// Input file; `-` or absent reads stdin.
    input: Option<PathBuf>,

    /// Output file; absent writes stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Auto-hyperlink bare URLs.
    #[arg(long)]
    auto_hyperlink: bool,

    /// Turn every newline into a break tag.
    #[arg(long)]
    auto_newlines: bool,

    /// Suffix for empty elements (" />" for XHTML, ">" for HTML).
    #[arg(long, default_value = " />")]
    empty_element_suffix: String,

    /// Percent-encode problematic URL characters.
    #[arg(long)]
    encode_problem_url_chars: bool,

    /// Do not auto-link email addresses.
    #[arg(long)]
    no_link_emails: bool,

    /// Require non-word characters around bold/italic delimiters.
    #[arg(long)]
    strict_bold_italic: bool,

    /// Enable info-level logging (otherwise RUST_LOG applies).
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            auto_hyperlink: self.auto_hyperlink,
            auto_newlines: self.auto_newlines,
            empty_element_suffix: self.empty_element_suffix.clone(),
            encode_problem_url_characters: self.encode_problem_url_chars,
            link_emails: !self.no_link_emails,
            strict_bold_italic: self.strict_bold_italic,
        }
    }
}

#[allow(clippy::print_stderr, clippy::exit)]
fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = std::error::Error::source(cause);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = read_input(cli.input.as_deref())?;

    let engine = Markdown::with_options(cli.options());
    let html = engine.transform(&input);
    tracing::info!(input_bytes = input.len(), output_bytes = html.len(), "transformed");

    match &cli.output {
        Some(path) => std::fs::write(path, html).map_err(|source| CliError::WriteOutput {
            path: path.clone(),
            source,
        }),
        None => std::io::stdout()
            .write_all(html.as_bytes())
            .map_err(CliError::WriteStdout),
    }
}

fn read_input(path: Option<&std::path::Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::ReadStdin)?;
            Ok(buffer)
        }
    }
}
