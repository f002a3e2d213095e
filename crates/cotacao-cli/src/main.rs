mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cotacao",
    version,
    about = "Extract plans and age-band prices from health-insurance quote PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a quote PDF into structured plan records
    Parse {
        /// Path to the quote PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the parsed result to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Custom JSON vocabulary file(s), replacing the built-in one of the same kind
        #[arg(long = "vocab", value_name = "FILE")]
        vocab: Vec<PathBuf>,

        /// Leave the extracted page text out of the result
        #[arg(long)]
        no_raw: bool,
    },
    /// Export plans to CSV (from a quote PDF or a JSON file saved by `parse -O`)
    Export {
        /// Path to PDF or pre-parsed JSON file
        input_file: PathBuf,

        /// Directory the CSV is written to
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Print the CSV to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Custom JSON vocabulary file(s), replacing the built-in one of the same kind
        #[arg(long = "vocab", value_name = "FILE")]
        vocab: Vec<PathBuf>,
    },
    /// Show the text extracted from a PDF, as the parser sees it
    Raw {
        /// Path to the quote PDF
        input_file: PathBuf,

        /// Maximum number of characters to print
        #[arg(short, long, default_value_t = 10_000)]
        limit: usize,
    },
    /// Inspect and validate classification vocabularies
    Vocab {
        #[command(subcommand)]
        action: VocabAction,
    },
}

#[derive(Subcommand)]
enum VocabAction {
    /// List predefined vocabularies
    List,
    /// Show the categories, shortcuts and patterns of a vocabulary
    Show {
        /// Preset name (e.g., "accommodation")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom vocabulary file
    Validate {
        /// Path to JSON vocabulary file
        file: PathBuf,
    },
}

fn main() {
    // Logs go to stderr; stdout carries tables, JSON and CSV.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
            vocab,
            no_raw,
        } => commands::parse::run(input_file, &output, out, vocab, no_raw),
        Commands::Export {
            input_file,
            dir,
            stdout,
            vocab,
        } => commands::export::run(input_file, dir, stdout, vocab),
        Commands::Raw { input_file, limit } => commands::raw::run(input_file, limit),
        Commands::Vocab { action } => match action {
            VocabAction::List => commands::vocab::list(),
            VocabAction::Show { preset } => commands::vocab::show(&preset),
            VocabAction::Schema => commands::vocab::schema(),
            VocabAction::Validate { file } => commands::vocab::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
