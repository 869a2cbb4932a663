//! Confirmation prompt adapters.
//!
//! - `StdinConfirmation` asks on the terminal and waits for y/n
//! - `AutoConfirmation` answers without asking (`--yes`, scripts, tests)

use async_trait::async_trait;
use std::io::{BufRead, Write};

use crate::domain::sheet::Confirmation;
use crate::ports::ConfirmationPrompt;

/// Interprets a typed answer. Only an explicit yes confirms.
pub fn parse_answer(answer: &str) -> Confirmation {
    let answer = answer.trim().to_lowercase();
    Confirmation::from_bool(matches!(answer.as_str(), "y" | "yes"))
}

/// Asks on stdout and reads one line from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirmation;

#[async_trait]
impl ConfirmationPrompt for StdinConfirmation {
    async fn confirm(&self, question: &str) -> Confirmation {
        let question = question.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            let mut stdout = std::io::stdout();
            let _ = write!(stdout, "{} [y/N] ", question);
            let _ = stdout.flush();

            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line).map(|_| line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => parse_answer(&line),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Could not read confirmation");
                Confirmation::Declined
            }
            Err(e) => {
                tracing::warn!(error = %e, "Confirmation prompt task failed");
                Confirmation::Declined
            }
        }
    }
}

/// Always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirmation {
    answer: Confirmation,
}

impl AutoConfirmation {
    pub fn confirming() -> Self {
        Self {
            answer: Confirmation::Confirmed,
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: Confirmation::Declined,
        }
    }
}

#[async_trait]
impl ConfirmationPrompt for AutoConfirmation {
    async fn confirm(&self, question: &str) -> Confirmation {
        tracing::debug!(question, answer = ?self.answer, "Auto-answered confirmation");
        self.answer
    }
}
