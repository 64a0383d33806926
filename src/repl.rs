//! Interactive chat loop and terminal output.

use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

use tracing::info;

use crate::chat::engine;
use crate::hf::client::{QaClient, QaError};

/// Delay between revealed characters in the typewriter effect.
const TYPE_DELAY: Duration = Duration::from_millis(30);

const WELCOME: &str = "sehat — healthcare assistant (हिंदी + English)";
const PROMPT_HINT: &str = "How can I assist you today? | आज मैं आपकी कैसे मदद कर सकता हूँ?";

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error(transparent)]
    Qa(#[from] QaError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Reads queries line by line until EOF or an exit command. Blank lines are
/// skipped; a model failure ends the session with the error.
pub async fn run(client: &impl QaClient, plain: bool) -> Result<(), ChatError> {
    println!("{WELCOME}");
    println!("{PROMPT_HINT}");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if is_exit(input) {
            break;
        }

        let answer = engine::resolve(client, input).await?;
        print_answer(&answer, plain).await?;
    }

    info!("chat session ended");
    Ok(())
}

/// Prints an answer, revealed one character at a time unless `plain` is set
/// or stdout is not a terminal.
pub async fn print_answer(answer: &str, plain: bool) -> Result<(), ChatError> {
    let mut stdout = io::stdout();
    if plain || !stdout.is_terminal() {
        writeln!(stdout, "{answer}")?;
        return Ok(());
    }

    for c in answer.chars() {
        write!(stdout, "{c}")?;
        stdout.flush()?;
        tokio::time::sleep(TYPE_DELAY).await;
    }
    writeln!(stdout)?;
    Ok(())
}

fn is_exit(input: &str) -> bool {
    matches!(input, "exit" | "quit")
}
