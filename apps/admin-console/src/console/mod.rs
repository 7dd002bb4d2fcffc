//! Interactive console - the view layer.
//!
//! Renders the login, listing, and form screens on the terminal and
//! dispatches user intents into the state services. The console owns no
//! state of its own beyond the flow of the current screen.

mod dashboard;
mod form;
mod login;

use std::io::{self, Write};

use crate::config::AppConfig;
use crate::state::AppState;

/// Top-level gate: the login screen while logged out, the dashboard after.
pub async fn run(state: &AppState, config: &AppConfig) -> anyhow::Result<()> {
    loop {
        if state.auth.is_authenticated().await {
            match dashboard::run(state, config).await? {
                dashboard::Outcome::LoggedOut => continue,
                dashboard::Outcome::Quit => break,
            }
        } else if !login::run(state).await? {
            break;
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Print a label and read one trimmed line; `None` on end of input.
pub(crate) fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Yes/no gate defaulting to no.
pub(crate) fn confirm(question: &str) -> io::Result<bool> {
    match prompt(&format!("{question} [y/N] "))? {
        Some(answer) => Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")),
        None => Ok(false),
    }
}
