//! Interactive prompts.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::error::CliResult;

pub fn confirm(message: &str, default: bool) -> CliResult<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .default(default)
        .interact()?)
}

/// Free-text answer; may be empty.
pub fn text(message: &str) -> CliResult<String> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer.trim().to_string())
}

/// Pick one of `items`; returns the chosen item.
pub fn select(message: &str, items: &[String]) -> CliResult<String> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .items(items)
        .default(0)
        .interact()?;
    Ok(items[index].clone())
}
