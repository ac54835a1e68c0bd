//! Slash command definitions and invocations.
//!
//! A `CommandDefinition` is the parameter schema a command handler declares; the
//! registry validates it before registration and the Discord binding turns it into the
//! application command payload. A `CommandInvocation` is one inbound use of a command
//! with its typed option values and the invoking principal.

use std::collections::HashMap;

use crate::error::dispatch::{DefinitionError, DispatchError};
use crate::model::principal::Principal;

const MAX_NAME_LEN: usize = 32;
const MAX_DESCRIPTION_LEN: usize = 100;
const MAX_OPTIONS: usize = 25;
const MAX_CHOICES: usize = 25;

/// Type of a command option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
    Boolean,
}

/// A fixed choice offered for a string option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionChoice {
    /// Label shown to the user.
    pub name: String,
    /// Value delivered to the handler.
    pub value: String,
}

/// One option in a command's parameter schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: String,
    pub description: String,
    pub kind: OptionKind,
    pub required: bool,
    pub choices: Vec<OptionChoice>,
}

impl OptionSpec {
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: OptionKind::String,
            required: false,
            choices: Vec::new(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn choice(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.choices.push(OptionChoice {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// Parameter schema and dispatch flags of a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    pub options: Vec<OptionSpec>,
    /// Whether the caller must hold an allow-listed role.
    pub privileged: bool,
    /// Whether replies are visible only to the caller.
    pub ephemeral: bool,
}

impl CommandDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
            privileged: false,
            ephemeral: false,
        }
    }

    pub fn option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    pub fn privileged(mut self) -> Self {
        self.privileged = true;
        self
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    /// Checks the definition against Discord's application command rules.
    ///
    /// # Returns
    /// - `Ok(())` - The definition can be registered and deployed
    /// - `Err(DefinitionError)` - The first rule the definition violates
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if !is_valid_name(&self.name) {
            return Err(DefinitionError::InvalidName(self.name.clone()));
        }
        if !is_valid_description(&self.description) {
            return Err(DefinitionError::InvalidDescription(self.name.clone()));
        }
        if self.options.len() > MAX_OPTIONS {
            return Err(DefinitionError::TooManyOptions(self.name.clone()));
        }

        let mut seen_optional = false;
        for (index, option) in self.options.iter().enumerate() {
            if !is_valid_name(&option.name) {
                return Err(DefinitionError::InvalidName(option.name.clone()));
            }
            if !is_valid_description(&option.description) {
                return Err(DefinitionError::InvalidDescription(option.name.clone()));
            }
            if self.options[..index].iter().any(|o| o.name == option.name) {
                return Err(DefinitionError::DuplicateOption(option.name.clone()));
            }
            if option.required && seen_optional {
                return Err(DefinitionError::RequiredAfterOptional(option.name.clone()));
            }
            if !option.required {
                seen_optional = true;
            }
            let choices_allowed = option.kind == OptionKind::String || option.choices.is_empty();
            if !choices_allowed || option.choices.len() > MAX_CHOICES {
                return Err(DefinitionError::InvalidChoices(option.name.clone()));
            }
        }

        Ok(())
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().count() <= MAX_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

fn is_valid_description(description: &str) -> bool {
    let len = description.chars().count();
    len > 0 && len <= MAX_DESCRIPTION_LEN
}

/// Value supplied for a command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Boolean(bool),
}

/// One inbound use of a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub name: String,
    pub options: HashMap<String, OptionValue>,
    pub principal: Principal,
}

impl CommandInvocation {
    pub fn new(name: impl Into<String>, principal: Principal) -> Self {
        Self {
            name: name.into(),
            options: HashMap::new(),
            principal,
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.options.insert(name.into(), value);
        self
    }

    /// Returns a string option, treating an empty string as absent.
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.options.get(name) {
            Some(OptionValue::String(value)) if !value.is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns a string option the command cannot run without.
    ///
    /// # Returns
    /// - `Ok(&str)` - The supplied value
    /// - `Err(DispatchError::MissingOption)` - The option is absent or not a string
    pub fn required_string(&self, name: &str) -> Result<&str, DispatchError> {
        self.string(name)
            .ok_or_else(|| DispatchError::MissingOption(name.to_string()))
    }
}
