use anyhow::Error;
use postcheck_config::ConfigError;
use postcheck_core::CoreError;
use postcheck_lookup::LookupError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;
pub const EXIT_NOT_VALIDATED: u8 = 4;
pub const EXIT_UPSTREAM: u8 = 5;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("address not validated")]
    NotValidated,
    #[error("locality lookup failed")]
    LookupFailed,
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotValidated => EXIT_NOT_VALIDATED,
                CliError::LookupFailed => EXIT_UPSTREAM,
            });
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(lookup_err) = cause.downcast_ref::<LookupError>() {
            return ExitCode::from(lookup_exit_code(lookup_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidBaseUrl(_)
        | ConfigError::InvalidTimeout(_)
        | ConfigError::InvalidFixturePath(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn lookup_exit_code(err: &LookupError) -> u8 {
    match err {
        LookupError::Unavailable(_) => EXIT_INVALID_INPUT,
        LookupError::Io(_) => EXIT_FAILURE,
        LookupError::Status(_) | LookupError::Parse(_) => EXIT_UPSTREAM,
        #[cfg(feature = "http")]
        LookupError::Http(_) => EXIT_UPSTREAM,
        #[cfg(feature = "http")]
        LookupError::Url(_) => EXIT_INVALID_INPUT,
    }
}
