//! textfreq CLI - word-frequency analysis tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use textfreq::{render, Analysis, Analyzer, DocumentFormat, JsonFormat};

#[derive(Parser)]
#[command(name = "textfreq")]
#[command(version)]
#[command(about = "Word-frequency analysis for plain text, PDF, and DOCX", long_about = None)]
struct Cli {
    /// Input document
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Number of top words to show
    #[arg(short = 'n', long, default_value = "20")]
    top: usize,

    /// Declared format tag (plain, pdf, docx); detected from the file when omitted
    #[arg(short, long)]
    format: Option<String>,

    /// Additional stopwords on top of the built-in English set
    #[arg(short, long, value_name = "WORD")]
    stopword: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a word-count table (default)
    Table {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Number of top words to show
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,

        /// Declared format tag (plain, pdf, docx)
        #[arg(short, long)]
        format: Option<String>,

        /// Additional stopwords
        #[arg(short, long, value_name = "WORD")]
        stopword: Vec<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the analysis as JSON
    Json {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Declared format tag (plain, pdf, docx)
        #[arg(short, long)]
        format: Option<String>,

        /// Additional stopwords
        #[arg(short, long, value_name = "WORD")]
        stopword: Vec<String>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the stopword-filtered text
    Text {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Declared format tag (plain, pdf, docx)
        #[arg(short, long)]
        format: Option<String>,

        /// Additional stopwords
        #[arg(short, long, value_name = "WORD")]
        stopword: Vec<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document summary (format, token and word counts)
    Info {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Declared format tag (plain, pdf, docx)
        #[arg(short, long)]
        format: Option<String>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Table {
            input,
            top,
            format,
            stopword,
            output,
        }) => cmd_table(&input, top, format.as_deref(), &stopword, output.as_deref()),
        Some(Commands::Json {
            input,
            format,
            stopword,
            compact,
            output,
        }) => cmd_json(&input, format.as_deref(), &stopword, compact, output.as_deref()),
        Some(Commands::Text {
            input,
            format,
            stopword,
            output,
        }) => cmd_text(&input, format.as_deref(), &stopword, output.as_deref()),
        Some(Commands::Info { input, format }) => cmd_info(&input, format.as_deref()),
        None => {
            if let Some(input) = cli.input {
                cmd_table(&input, cli.top, cli.format.as_deref(), &cli.stopword, None)
            } else {
                println!("{}", "Usage: textfreq <FILE>".yellow());
                println!("       textfreq --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn analyze(
    input: &Path,
    format: Option<&str>,
    extra_stopwords: &[String],
) -> Result<Analysis, Box<dyn std::error::Error>> {
    let analyzer = Analyzer::new().with_extra_stopwords(extra_stopwords);

    let analysis = match format {
        Some(tag) => {
            let format = DocumentFormat::from_tag(tag)?;
            let bytes = fs::read(input)?;
            analyzer.analyze_bytes(&bytes, format)?
        }
        None => analyzer.analyze_file(input)?,
    };
    Ok(analysis)
}

fn emit(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, content)?,
        None => print!("{}", content),
    }
    Ok(())
}

fn cmd_table(
    input: &Path,
    top: usize,
    format: Option<&str>,
    stopwords: &[String],
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let analysis = analyze(input, format, stopwords)?;
    let mut table = render::to_table(&analysis, top);
    if table.is_empty() {
        table = "(no words after filtering)\n".to_string();
    }
    emit(&table, output)
}

fn cmd_json(
    input: &Path,
    format: Option<&str>,
    stopwords: &[String],
    compact: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let analysis = analyze(input, format, stopwords)?;
    let json_format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let mut json = render::to_json(&analysis, json_format)?;
    json.push('\n');
    emit(&json, output)
}

fn cmd_text(
    input: &Path,
    format: Option<&str>,
    stopwords: &[String],
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let analysis = analyze(input, format, stopwords)?;
    let mut text = analysis.filtered_text;
    text.push('\n');
    emit(&text, output)
}

fn cmd_info(input: &Path, format: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let analysis = analyze(input, format, &[])?;

    let format_tag = analysis
        .format
        .map(|f| f.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format_tag);
    println!("{}: {}", "Extracted chars".bold(), analysis.text.len());
    println!("{}: {}", "Tokens after filtering".bold(), analysis.total_tokens());
    println!("{}: {}", "Distinct words".bold(), analysis.distinct_words());
    if let Some(top) = analysis.top(1).first() {
        println!(
            "{}: {} ({}x)",
            "Most frequent".bold(),
            top.word,
            top.count
        );
    }
    Ok(())
}
