pub mod context;
pub mod dashboard;
pub mod forms;
pub mod io;
pub mod output;
pub mod settings;
pub mod system_clock;

use abone_core::Clock;
use dialoguer::theme::ColorfulTheme;

use crate::errors::CliError;
use self::context::AppContext;
use self::system_clock::SystemClock;

const MENU_DASHBOARD: &str = "Dashboard";
const MENU_ADD: &str = "Add payment";
const MENU_EDIT: &str = "Edit payment";
const MENU_REMOVE: &str = "Remove payment";
const MENU_SETTINGS: &str = "Settings";
const MENU_QUIT: &str = "Quit";

/// Entry point for the `abone` binary.
///
/// With no arguments the interactive menu runs; `abone dashboard` renders
/// the dashboard once and exits, which also gives scripts and smoke tests a
/// non-interactive path.
pub fn run_cli() -> Result<(), CliError> {
    let clock = SystemClock;
    let mut context = AppContext::bootstrap()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => run_menu(&mut context, &clock),
        Some("dashboard") | Some("list") => {
            dashboard::render(&context, clock.today());
            Ok(())
        }
        Some(other) => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn run_menu(context: &mut AppContext, clock: &dyn Clock) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    loop {
        let choices = [
            MENU_DASHBOARD,
            MENU_ADD,
            MENU_EDIT,
            MENU_REMOVE,
            MENU_SETTINGS,
            MENU_QUIT,
        ];
        let selection = io::select(&theme, "What would you like to do?", &choices)?;
        match choices[selection] {
            MENU_DASHBOARD => dashboard::render(context, clock.today()),
            MENU_ADD => forms::add_payment(context, &theme, clock.today())?,
            MENU_EDIT => forms::edit_payment(context, &theme)?,
            MENU_REMOVE => forms::remove_payment(context, &theme)?,
            MENU_SETTINGS => settings::run(context, &theme)?,
            _ => break,
        }
    }
    Ok(())
}
