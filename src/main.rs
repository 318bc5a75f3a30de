use std::fs::{self, File};
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use plaintext_matcher::{
    exact_search, highlight_phrases, read_extraction_rows, resolve_question_answers,
    similarity_search, validate_max_results, validate_threshold, write_resolved_rows, Error,
    ExactSearchConfig, HighlightConfig, SimilaritySearchConfig, TokenSequence,
    DEFAULT_HIGHLIGHT_CONFIG, DEFAULT_SIMILARITY_SEARCH_CONFIG,
};

#[derive(clap::Parser)]
#[clap(
    name = "plaintext-matcher",
    about = "Locate extracted phrases in a plaintext document"
)]
struct Cli {
    /// Path to the plaintext document. Read from stdin when omitted.
    #[clap(short, long, global = true)]
    document: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print every verbatim occurrence of a phrase
    Exact {
        phrase: String,
        /// Maximum number of matches. All matches when omitted.
        #[arg(long, allow_negative_numbers = true)]
        max_results: Option<i64>,
        #[arg(long)]
        case_sensitive: bool,
    },
    /// Print the windows most similar to a phrase
    Similar {
        phrase: String,
        #[arg(long, default_value_t = DEFAULT_SIMILARITY_SEARCH_CONFIG.threshold, allow_negative_numbers = true)]
        threshold: f64,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        max_results: i64,
        #[arg(long)]
        case_sensitive: bool,
        /// Count spaces and newlines when comparing token sets
        #[arg(long)]
        keep_whitespace: bool,
    },
    /// Print the document with every occurrence of the phrases marked
    Highlight {
        #[arg(required = true)]
        phrases: Vec<String>,
        #[arg(long, default_value = DEFAULT_HIGHLIGHT_CONFIG.start_tag)]
        start_tag: String,
        #[arg(long, default_value = DEFAULT_HIGHLIGHT_CONFIG.end_tag)]
        end_tag: String,
        /// Mark the text outside the matches instead
        #[arg(long)]
        reverse: bool,
    },
    /// Resolve a CSV of extracted phrases against the document and write the result as CSV
    Resolve {
        /// CSV with `question_label` and `extracted_text` columns
        #[arg(short, long)]
        extractions: PathBuf,
    },
}

fn read_document(path: Option<&PathBuf>) -> Result<String, Error> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let text = read_document(cli.document.as_ref())?;
    let source = TokenSequence::from_text(&text);
    info!("Loaded document with {} tokens", source.len());

    match cli.command {
        Command::Exact {
            phrase,
            max_results,
            case_sensitive,
        } => {
            let config = ExactSearchConfig {
                max_results: validate_max_results(max_results)?,
                case_sensitive,
            };
            for span in exact_search(&source, &phrase, &config)? {
                println!(
                    "{}..{}\t{}",
                    span.start,
                    span.end,
                    source.span_text(&span)?
                );
            }
        }
        Command::Similar {
            phrase,
            threshold,
            max_results,
            case_sensitive,
            keep_whitespace,
        } => {
            let config = SimilaritySearchConfig {
                threshold: validate_threshold(threshold)?,
                max_results: validate_max_results(Some(max_results))?.unwrap_or_default(),
                case_sensitive,
                ignore_whitespace: !keep_whitespace,
            };
            for span in similarity_search(&source, &phrase, &config)? {
                println!(
                    "{}..{}\t{:.4}\t{}",
                    span.start,
                    span.end,
                    span.similarity(),
                    source.span_text(&span)?
                );
            }
        }
        Command::Highlight {
            phrases,
            start_tag,
            end_tag,
            reverse,
        } => {
            let config = HighlightConfig {
                start_tag: &start_tag,
                end_tag: &end_tag,
                reverse,
            };
            println!("{}", highlight_phrases(&source, &phrases, &config)?);
        }
        Command::Resolve { extractions } => {
            let question_answers = read_extraction_rows(File::open(&extractions)?)?;
            info!(
                "Resolving {} question(s) from {:?}",
                question_answers.len(),
                extractions
            );
            let resolved = resolve_question_answers(&source, &question_answers)?;
            write_resolved_rows(io::stdout().lock(), &resolved)?;
        }
    }

    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}
