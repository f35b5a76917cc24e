//! Yes/no prompts on the controlling terminal.

use std::io::{self, BufRead, Write};

use jobdesk_api::Job;
use jobdesk_core::{Confirmation, delete_prompt};

/// Asks on stdout and reads the answer from stdin. Anything other than
/// "y" or "yes" declines.
#[derive(Debug, Default)]
pub struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, job: &Job) -> bool {
        let mut stdout = io::stdout().lock();
        if write!(stdout, "{} [y/N] ", delete_prompt(job))
            .and_then(|()| stdout.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
