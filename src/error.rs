use colored::Colorize;
use std::fmt;

/// Failure reported by a parser when a raw string is not valid for its type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}

/// Errors that can occur while reading a present environment variable
///
/// An absent variable is never an error, it resolves to the caller's fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// A scalar environment variable is set but cannot be parsed
    InvalidValue {
        key: String,
        value: String,
        reason: ParseError,
    },
    /// One element of a comma-separated list cannot be parsed
    InvalidElement {
        key: String,
        index: usize,
        element: String,
        reason: ParseError,
    },
}

impl EnvError {
    /// The environment variable this error refers to
    pub fn key(&self) -> &str {
        match self {
            EnvError::InvalidValue { key, .. } | EnvError::InvalidElement { key, .. } => key,
        }
    }

    /// The underlying parser failure
    pub fn reason(&self) -> &ParseError {
        match self {
            EnvError::InvalidValue { reason, .. } | EnvError::InvalidElement { reason, .. } => {
                reason
            }
        }
    }
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvError::InvalidValue { key, value, reason } => {
                writeln!(
                    f,
                    "{}: Invalid value {}",
                    key.magenta().bold(),
                    format!("'{}'", value).red(),
                )?;
                writeln!(f, "\tReason: {}", reason)
            }
            EnvError::InvalidElement {
                key,
                index,
                element,
                reason,
            } => {
                writeln!(
                    f,
                    "{}: Invalid list element #{} {}",
                    key.magenta().bold(),
                    index,
                    format!("'{}'", element).red(),
                )?;
                writeln!(f, "\tReason: {}", reason)
            }
        }
    }
}

impl std::error::Error for EnvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.reason())
    }
}
