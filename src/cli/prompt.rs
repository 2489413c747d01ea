//! Interactive prompts.
//!
//! When stdin is not a terminal, prompts fall back to reading a plain line
//! (or declining), so the tools work in pipes and CI.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::{Confirm, Input};

use crate::error::Result;

/// Ask a yes/no question. Non-interactive stdin answers `default`.
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Ok(default);
    }

    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask for a line of text; an empty answer is allowed.
pub fn input(prompt: &str) -> Result<String> {
    if !io::stdin().is_terminal() {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        return Ok(line.trim().to_string());
    }

    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}
