//! Line-oriented terminal display surface.

use std::sync::Arc;

use services::{QuizAttempt, QuizLoader, QuizService, QuizServiceError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use ui::{
    QuizIntent, QuizOutcome, QuizVm, map_quiz_summary, render_screen, render_state,
    render_summary, view_state_from_load,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Intent(QuizIntent),
    Quit,
}

/// Map one input line to a command. Choices are typed one-based.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" => Some(Command::Quit),
        "s" | "submit" => Some(Command::Intent(QuizIntent::Submit)),
        "n" | "next" => Some(Command::Intent(QuizIntent::Next)),
        other => other.parse::<usize>().ok().map(|choice| {
            Command::Intent(QuizIntent::Select(choice.checked_sub(1).unwrap_or(usize::MAX)))
        }),
    }
}

#[derive(Debug)]
pub enum LoadOutcome {
    Ready(QuizAttempt),
    Failed,
    Cancelled,
}

/// Fetch questions on a background task while showing a loading frame.
///
/// Ctrl-C while loading abandons the fetch; its result is discarded.
///
/// # Errors
///
/// Returns an error if the fetch task panicked.
pub async fn load_quiz(
    service: Arc<QuizService>,
) -> Result<LoadOutcome, Box<dyn std::error::Error>> {
    let mut loader: QuizLoader<QuizAttempt, QuizServiceError> = QuizLoader::new();
    let ticket = loader.begin();
    show_state(&loader);

    let mut task = tokio::spawn(async move { service.start().await });

    tokio::select! {
        joined = &mut task => {
            loader.complete(ticket, joined?);
        }
        _ = tokio::signal::ctrl_c() => {
            loader.cancel();
            task.abort();
            info!("question load cancelled");
            return Ok(LoadOutcome::Cancelled);
        }
    }

    if let Some(attempt) = loader.take_ready() {
        return Ok(LoadOutcome::Ready(attempt));
    }

    if let services::LoadState::Failed(err) = loader.state() {
        error!(error = %err, "could not start quiz");
    }
    show_state(&loader);
    Ok(LoadOutcome::Failed)
}

fn show_state(loader: &QuizLoader<QuizAttempt, QuizServiceError>) {
    if let Some(frame) = render_state(&view_state_from_load(loader.state())) {
        println!("{frame}");
    }
}

/// Drive one quiz attempt from stdin until it completes, the user quits, or input ends.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub async fn play(
    attempt: QuizAttempt,
    clock: services::Clock,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut vm = QuizVm::new(attempt);
    vm.subscribe(|screen| println!("{}", render_screen(screen)));
    println!("{}", render_screen(&vm.screen()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Some(Command::Quit) => {
                info!("quiz abandoned");
                break;
            }
            Some(Command::Intent(intent)) => {
                if vm.dispatch(intent) == QuizOutcome::Completed {
                    break;
                }
            }
            None => println!("Type a choice number, s, n or q."),
        }
    }

    match vm.summary(&clock) {
        Ok(summary) => println!("{}", render_summary(&map_quiz_summary(&summary))),
        Err(err) => warn!(error = %err, "could not summarise quiz"),
    }
    Ok(())
}
