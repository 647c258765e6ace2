mod config;
mod logging;
mod terminal;

use std::sync::Arc;

use services::{Clock, FileQuestionSource, HttpQuestionSource, QuestionSource, QuizService};
use tracing::info;

use crate::config::{Config, Parsed, SourceConfig, print_usage};
use crate::terminal::LoadOutcome;

fn build_source(config: &Config) -> Result<Arc<dyn QuestionSource>, Box<dyn std::error::Error>> {
    let source: Arc<dyn QuestionSource> = match config.source() {
        SourceConfig::Http(http) => Arc::new(HttpQuestionSource::new(http)?),
        SourceConfig::File(path) => Arc::new(FileQuestionSource::new(path)),
    };
    Ok(source)
}

async fn run() -> Result<bool, Box<dyn std::error::Error>> {
    // A missing .env is fine; the environment and flags still apply.
    let _ = dotenvy::dotenv();
    logging::init();

    let parsed =
        Config::from_env().and_then(|config| config.parse_args(std::env::args().skip(1)));
    let config = match parsed {
        Ok(Parsed::Run(config)) => config,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(true);
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };
    info!(?config, "starting trivia");

    let clock = Clock::system();
    let service = Arc::new(
        QuizService::new(clock, build_source(&config)?)
            .with_shuffle(config.shuffle)
            .with_limit(config.limit),
    );

    match terminal::load_quiz(service).await? {
        LoadOutcome::Ready(attempt) => {
            terminal::play(attempt, clock).await?;
            Ok(true)
        }
        LoadOutcome::Cancelled => Ok(true),
        LoadOutcome::Failed => Ok(false),
    }
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}
