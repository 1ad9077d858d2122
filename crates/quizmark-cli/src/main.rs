//! quizmark CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizmark", version, about = "Quiz scoring and validation engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate quiz definition TOML files
    Validate {
        /// Path to a quiz definition file or directory
        #[arg(long)]
        quiz: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Exit with code 1 if any definition is invalid
        #[arg(long)]
        strict: bool,
    },

    /// Score a submission against a quiz definition
    Score {
        /// Path to the quiz definition TOML
        #[arg(long)]
        quiz: PathBuf,

        /// One answer as "question-id=value" (repeatable)
        #[arg(long = "answer")]
        answers: Vec<String>,

        /// JSON file of answers: an object of question-id to value
        #[arg(long = "answers")]
        answers_file: Option<PathBuf>,

        /// Score multiplier applied after accumulation
        #[arg(long)]
        multiplier: Option<i64>,

        /// Directory to save the result record JSON into
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the highest attainable score for a quiz
    MaxScore {
        /// Path to the quiz definition TOML
        #[arg(long)]
        quiz: PathBuf,

        /// Score multiplier applied after accumulation
        #[arg(long)]
        multiplier: Option<i64>,
    },

    /// Create a starter quiz definition
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizmark=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            quiz,
            format,
            strict,
        } => commands::validate::execute(quiz, format, strict),
        Commands::Score {
            quiz,
            answers,
            answers_file,
            multiplier,
            output,
            format,
        } => commands::score::execute(quiz, answers, answers_file, multiplier, output, format),
        Commands::MaxScore { quiz, multiplier } => commands::max_score::execute(quiz, multiplier),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
