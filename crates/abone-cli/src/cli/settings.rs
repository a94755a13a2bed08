use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::context::AppContext;
use crate::cli::{io, output};
use crate::errors::CliError;

pub fn run(context: &mut AppContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    loop {
        let choices = [
            "Currency rates",
            "Urgency window",
            "Clear all data",
            "Back",
        ];
        match io::select(theme, "Settings", &choices)? {
            0 => edit_rates(context, theme)?,
            1 => edit_urgency(context, theme)?,
            2 => clear_data(context, theme)?,
            _ => return Ok(()),
        }
    }
}

fn edit_rates(context: &mut AppContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let rates = &mut context.config.currency_rates;
    rates.usd = io::amount(theme, "TL per USD", Some(rates.usd))?;
    rates.eur = io::amount(theme, "TL per EUR", Some(rates.eur))?;
    context.config_manager.save(&context.config)?;
    context.apply_rates()?;
    output::success("Rates updated.");
    Ok(())
}

fn edit_urgency(context: &mut AppContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    context.config.urgency_days = Input::<u32>::with_theme(theme)
        .with_prompt("Highlight payments due within how many days?")
        .default(context.config.urgency_days)
        .interact_text()?;
    context.config_manager.save(&context.config)?;
    output::success("Urgency window updated.");
    Ok(())
}

fn clear_data(context: &mut AppContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let count = context.book.subscriptions().len();
    let prompt = format!("Delete all {count} tracked payments? This cannot be undone.");
    if io::confirm(theme, &prompt, false)? {
        context.book.clear()?;
        output::success("All payments deleted.");
    }
    Ok(())
}
