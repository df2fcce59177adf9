use crate::command::help::Help;
use crate::token::Token;

/// A variant of this enum is returned when the command line arguments can't be turned into the
/// values a command asked for
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Unexpected {} `{token}` as a value for `--{option}`", .token.kind())]
    UnexpectedOptionValue { option: String, token: Token },
    #[error("Missing value for `--{0}`")]
    MissingOptionValue(String),
    #[error("Unexpected {} `{token}` as a value for `-{flag}`", .token.kind())]
    UnexpectedFlagValue { flag: char, token: Token },
    #[error("Missing value for `-{0}`")]
    MissingFlagValue(char),
    #[error("{}", describe_missing(.argument))]
    MissingValue { argument: Option<String> },
    #[error("{}", describe_invalid(.value, .type_name, .argument))]
    InvalidType {
        value: String,
        type_name: &'static str,
        argument: Option<String>,
    },
}

impl ArgumentError {
    /// Attaches the name of a positional argument to errors that don't carry one yet
    pub(crate) fn for_argument(self, name: &str) -> Self {
        match self {
            ArgumentError::MissingValue { argument: None } => ArgumentError::MissingValue {
                argument: Some(name.to_string()),
            },
            ArgumentError::InvalidType {
                value,
                type_name,
                argument: None,
            } => ArgumentError::InvalidType {
                value,
                type_name,
                argument: Some(name.to_string()),
            },
            other => other,
        }
    }
}

fn describe_missing(argument: &Option<String>) -> String {
    match argument {
        Some(name) => format!("Missing value for `{name}`"),
        None => "Missing value".to_string(),
    }
}

fn describe_invalid(value: &str, type_name: &str, argument: &Option<String>) -> String {
    match argument {
        Some(name) => format!("`{value}` is not a valid `{type_name}` for `{name}`"),
        None => format!("`{value}` is not a `{type_name}`"),
    }
}

/// Everything that can stop a command from running to completion
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Usage was requested. This is not a failure: the caller is expected to print the help and
    /// exit successfully
    #[error("{0}")]
    Help(Help),
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error("Unknown command: `{0}`")]
    UnknownCommand(String),
    #[error(transparent)]
    Handler(anyhow::Error),
}

impl CommandError {
    /// Returns true if this is a help request rather than a failure
    pub fn is_help(&self) -> bool {
        matches!(self, CommandError::Help(_))
    }

    /// Prepends `name` to the command chain of a help request, or to the path of an unknown
    /// command. Other errors pass through untouched.
    pub fn reraise(self, name: &str) -> Self {
        match self {
            CommandError::Help(help) => CommandError::Help(help.reraise(name)),
            CommandError::UnknownCommand(path) => {
                CommandError::UnknownCommand(format!("{name} {path}"))
            }
            other => other,
        }
    }
}

impl From<Help> for CommandError {
    fn from(help: Help) -> Self {
        CommandError::Help(help)
    }
}
