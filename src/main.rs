// Summify CLI: summarize text, extract keywords, batch a directory, report status.
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use summify::batch;
use summify::config::EngineConfig;
use summify::input::read_file;
use summify::nlp::{Algorithm, FrequencyCorpus, Summarizer, SummaryRequest};
use summify::report::{self, ReportFormat};
use summify::samples;
use summify::status::Capabilities;

#[derive(Parser)]
#[command(name = "summify", version, about = "Extractive text summarization and keyword extraction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Text to process. Read from stdin when neither text nor --file is given.
    text: Option<String>,
    /// Read the text from a .txt, .md, .csv, .json or .pdf file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SummaryArgs {
    /// frequency, position or hybrid (anything else means frequency)
    #[arg(short, long)]
    algorithm: Option<String>,
    /// Sentences to keep, clamped to 1..=10
    #[arg(short = 'n', long)]
    max_sentences: Option<usize>,
    #[arg(short = 'k', long)]
    num_keywords: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    Summarize {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        summary: SummaryArgs,
        #[arg(long, value_enum, default_value_t = ReportFormat::Txt)]
        format: ReportFormat,
        /// Write the report to this file, or into this directory under a generated name
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    Keywords {
        #[command(flatten)]
        input: InputArgs,
        #[arg(short = 'k', long)]
        num_keywords: Option<usize>,
    },
    Batch {
        #[arg(short, long)]
        dir: PathBuf,
        #[arg(short, long, default_value = "summify_batch.json")]
        out: PathBuf,
        #[command(flatten)]
        summary: SummaryArgs,
    },
    Status {
        #[arg(long)]
        json: bool,
    },
    Sample,
}

fn load_text(input: &InputArgs) -> Result<String> {
    match (&input.text, &input.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => Ok(read_file(path)?),
        (None, None) => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

fn build_request(text: String, args: &SummaryArgs, config: &EngineConfig) -> SummaryRequest {
    let mut request = SummaryRequest::from_config(text, config);
    if let Some(name) = &args.algorithm {
        request.algorithm = Algorithm::normalize(name);
    }
    if let Some(n) = args.max_sentences {
        request.max_sentences = n;
    }
    if let Some(k) = args.num_keywords {
        request.num_keywords = k;
    }
    request
}

fn resolve_out_path(out: &Path, format: ReportFormat, unix_seconds: i64) -> PathBuf {
    if out.is_dir() {
        out.join(report::default_filename(format, unix_seconds))
    } else {
        out.to_path_buf()
    }
}

fn run_summarize(
    summarizer: &Summarizer,
    config: &EngineConfig,
    input: &InputArgs,
    args: &SummaryArgs,
    format: ReportFormat,
    out: Option<&Path>,
) -> Result<()> {
    let text = load_text(input)?;
    info!("Text input received: {} characters", text.chars().count());
    let request = build_request(text, args, config);
    let result = summarizer.summarize(&request)?;
    if result.status.is_degraded() {
        warn!("Summary took a fallback path: {:?}", result.status);
    }
    let rendered = report::render(&result, format, &report::timestamp_now())?;

    match out {
        Some(out) => {
            let path = resolve_out_path(out, format, chrono::Utc::now().timestamp());
            std::fs::write(&path, rendered)?;
            println!("Wrote {} report to {}", format.mime_type(), path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn run_batch(summarizer: &Summarizer, config: &EngineConfig, dir: &Path, out: &Path, args: &SummaryArgs) -> Result<()> {
    if !dir.is_dir() {
        return Err(anyhow!("Not a directory: {}", dir.display()));
    }
    let files = batch::collect_files(dir);
    let template = build_request(String::new(), args, config);
    let pb = batch::progress_bar(files.len() as u64);
    let entries = batch::summarize_files(summarizer, &files, &template, &pb);
    batch::write_entries(&entries, out)?;
    println!("Wrote {} summaries to {}", entries.len(), out.display());
    Ok(())
}

fn print_status(caps: &Capabilities) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    writeln!(stdout, "{} v{}", caps.service, caps.version)?;
    let flags = [
        ("text summarization", caps.text_summarization),
        ("keyword extraction", caps.keyword_extraction),
        ("linguistic support", caps.linguistic_support),
    ];
    for (label, enabled) in flags {
        let (color, mark) = if enabled { (Color::Green, "[on] ") } else { (Color::Yellow, "[off]") };
        stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(stdout, "{}", mark)?;
        stdout.reset()?;
        writeln!(stdout, " {}", label)?;
    }
    writeln!(stdout, "strategy: {}", caps.strategy)?;
    if let Some(note) = &caps.corpus_note {
        writeln!(stdout, "corpus: {}", note)?;
    }
    let algorithms: Vec<&str> = caps.algorithms.iter().map(|a| a.as_str()).collect();
    writeln!(stdout, "algorithms: {}", algorithms.join(", "))?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EngineConfig::from_env();
    let summarizer = Summarizer::from_config(&config);

    match cli.command {
        Commands::Summarize { input, summary, format, out } => {
            run_summarize(&summarizer, &config, &input, &summary, format, out.as_deref())?
        }
        Commands::Keywords { input, num_keywords } => {
            let text = summarizer.validate(&load_text(&input)?)?.to_string();
            let keywords = summarizer.extract_keywords(&text, num_keywords.unwrap_or(config.num_keywords));
            println!("{}", keywords.join("\n"));
        }
        Commands::Batch { dir, out, summary } => run_batch(&summarizer, &config, &dir, &out, &summary)?,
        Commands::Status { json } => {
            let caps = Capabilities::probe(&summarizer, FrequencyCorpus::global());
            if json {
                println!("{}", serde_json::to_string_pretty(&caps)?);
            } else {
                print_status(&caps)?;
            }
        }
        Commands::Sample => {
            let sample = samples::rotating_sample();
            println!("{}\n\n{}", sample.title, sample.text);
        }
    }
    Ok(())
}
