use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    /// No registered command matches the invoked name.
    #[error("No command matching '{0}' was found")]
    UnknownCommand(String),

    /// A required command option was not supplied.
    #[error("Missing required option '{0}'")]
    MissingOption(String),

    /// A command option was supplied with a value the command cannot use.
    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidOption { option: String, value: String },
}

/// Reasons a handler definition is refused by the registry.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("name '{0}' must be 1-32 characters of lowercase letters, digits, '-' or '_'")]
    InvalidName(String),

    #[error("description for '{0}' must be between 1 and 100 characters")]
    InvalidDescription(String),

    #[error("'{0}' declares more than 25 options")]
    TooManyOptions(String),

    #[error("option '{0}' is declared more than once")]
    DuplicateOption(String),

    #[error("required option '{0}' follows an optional option")]
    RequiredAfterOptional(String),

    #[error("option '{0}' declares choices but is not a string option, or declares more than 25")]
    InvalidChoices(String),

    #[error("unknown event name '{0}'")]
    UnknownEvent(String),

    #[error("a handler named '{0}' is already registered")]
    Duplicate(String),
}
