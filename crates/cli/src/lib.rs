use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

mod prompt;
mod report;
mod settings;

use settings::Overrides;

#[derive(Parser)]
#[command(name = "luhn-summarize")]
#[command(about = "Extractive summaries by significant-word density", long_about = None)]
#[command(version)]
struct Cli {
    /// Text file to summarize (`-` reads stdin; prompted for when omitted on a terminal)
    path: Option<PathBuf>,

    /// Number of sentences in the summary
    #[arg(short = 'n', long)]
    sentences: Option<usize>,

    /// Normalized frequency at or above which a word is significant
    #[arg(short, long, allow_negative_numbers = true)]
    threshold: Option<f64>,

    /// TOML config file (summary_length, threshold, duplicates, language)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stopword list, one word per line (overrides --language)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Language of the bundled stopword list
    #[arg(long)]
    language: Option<String>,

    /// Score repeated sentences separately instead of collapsing them
    #[arg(long)]
    keep_duplicates: bool,

    /// Emit JSON with per-sentence scores
    #[arg(long)]
    json: bool,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long)]
    quiet: bool,
}

/// The input document does not exist
#[derive(Debug, Error)]
#[error("File not found at {}", path.display())]
pub struct InputNotFound {
    pub path: PathBuf,
}

#[derive(Debug, PartialEq, Eq)]
enum Source {
    File(PathBuf),
    Stdin,
}

pub fn main_entry() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", classify_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(cli: Cli) -> Result<()> {
    let interactive = cli.path.is_none() && io::stdin().is_terminal();
    let source = select_source(cli.path.as_deref(), interactive, prompt::prompt_path)?;

    let overrides = Overrides {
        config_file: cli.config.clone(),
        summary_length: cli.sentences,
        threshold: cli.threshold,
        language: cli.language.clone(),
        keep_duplicates: cli.keep_duplicates,
    };
    let mut config = settings::resolve_config(&overrides, |key| std::env::var(key).ok())?;
    config.summary_length = select_summary_length(
        config.summary_length,
        cli.sentences,
        interactive,
        prompt::prompt_summary_length,
    )?;

    let summarizer = settings::build_summarizer(config, cli.stopwords.as_deref())?;
    let text = read_document(&source)?;
    log::info!(
        "Summarizing {} ({} bytes) into at most {} sentences",
        describe_source(&source),
        text.len(),
        summarizer.config().summary_length
    );

    let summary = summarizer.summarize_detailed(&text)?;
    log::debug!(
        "Selected {} of {} sentences",
        summary.len(),
        summary.total_sentences
    );

    let rendered = if cli.json {
        report::render_json(&summary, summarizer.config())?
    } else if cli.output.is_some() {
        report::render_plain(&summary)
    } else {
        report::render_console(&summary)
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Where the document comes from; `ask_path` runs only for an interactive session
fn select_source(
    path: Option<&Path>,
    interactive: bool,
    ask_path: impl FnOnce() -> Result<PathBuf>,
) -> Result<Source> {
    match path {
        Some(path) if path.as_os_str() == "-" => Ok(Source::Stdin),
        Some(path) => Ok(Source::File(path.to_path_buf())),
        None if interactive => ask_path().map(Source::File),
        None => Ok(Source::Stdin),
    }
}

/// An explicit `--sentences` wins; otherwise an interactive session is asked, with the
/// resolved length as the default
fn select_summary_length(
    resolved: usize,
    flag: Option<usize>,
    interactive: bool,
    ask: impl FnOnce(usize) -> Result<usize>,
) -> Result<usize> {
    match flag {
        Some(n) => Ok(n),
        None if interactive => ask(resolved),
        None => Ok(resolved),
    }
}

fn read_document(source: &Source) -> Result<String> {
    match source {
        Source::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read document from stdin")?;
            Ok(text)
        }
        Source::File(path) => read_file(path),
    }
}

fn read_file(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(InputNotFound {
            path: path.to_path_buf(),
        }
        .into()),
        Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
    }
}

fn describe_source(source: &Source) -> String {
    match source {
        Source::Stdin => "stdin".to_string(),
        Source::File(path) => path.display().to_string(),
    }
}

/// One user-facing line per failure
pub fn classify_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<InputNotFound>() {
        Some(missing) => format!("Error: {missing}"),
        None => format!("An error occurred: {err:#}"),
    }
}
