use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::errors::CliError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prompt the user to pick one entry from a list.
pub fn select(theme: &ColorfulTheme, prompt: &str, items: &[&str]) -> Result<usize, CliError> {
    select_with_default(theme, prompt, items, 0)
}

/// Same as [`select`], with the cursor starting on `default`.
pub fn select_with_default(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[&str],
    default: usize,
) -> Result<usize, CliError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(CliError::from)
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool, CliError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CliError::from)
}

/// Prompt the user for free-form text input.
pub fn text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .map_err(CliError::from)
}

/// Prompt for text with a pre-filled default the user can accept as-is.
pub fn text_with_default(
    theme: &ColorfulTheme,
    prompt: &str,
    default: &str,
) -> Result<String, CliError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .map_err(CliError::from)
}

/// Prompt for a non-negative amount.
pub fn amount(theme: &ColorfulTheme, prompt: &str, default: Option<f64>) -> Result<f64, CliError> {
    let mut input = Input::<f64>::with_theme(theme).with_prompt(prompt);
    if let Some(value) = default {
        input = input.default(value);
    }
    input
        .validate_with(|value: &f64| {
            if value.is_finite() && *value >= 0.0 {
                Ok(())
            } else {
                Err("Enter a non-negative amount")
            }
        })
        .interact_text()
        .map_err(CliError::from)
}

/// Prompt for a calendar date in `YYYY-MM-DD` form.
pub fn date(
    theme: &ColorfulTheme,
    prompt: &str,
    default: Option<NaiveDate>,
) -> Result<NaiveDate, CliError> {
    let mut input = Input::<String>::with_theme(theme).with_prompt(prompt);
    if let Some(value) = default {
        input = input.default(value.format(DATE_FORMAT).to_string());
    }
    let raw = input
        .validate_with(|value: &String| {
            NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
                .map(|_| ())
                .map_err(|_| "Enter a date as YYYY-MM-DD")
        })
        .interact_text()?;
    // The validator already accepted the input.
    Ok(NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).unwrap_or_default())
}

/// Prompt for an optional number of payments remaining. Zero means open-ended.
pub fn optional_duration(
    theme: &ColorfulTheme,
    prompt: &str,
    default: Option<u32>,
) -> Result<Option<u32>, CliError> {
    let value = Input::<u32>::with_theme(theme)
        .with_prompt(format!("{prompt} (0 for open-ended)"))
        .default(default.unwrap_or(0))
        .interact_text()?;
    Ok(if value == 0 { None } else { Some(value) })
}
