use abone_config::ConfigError;
use abone_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Unknown command `{0}`. Run without arguments for the menu.")]
    UnknownCommand(String),
}
