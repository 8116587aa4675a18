//! # Error Types Module
//!
//! This module defines the error type shared by the inventory, export, shopping list
//! and configuration code. The ingredient matcher itself is total and never returns one.

/// Custom error types for pantry operations
#[derive(Debug, Clone, PartialEq)]
pub enum PantryError {
    /// File system errors (reading or writing inventory and synonym files)
    Io(String),
    /// Malformed JSON or text input
    Parse(String),
    /// Rejected user input (empty names, unknown ids)
    Validation(String),
    /// Invalid configuration values
    Config(String),
}

impl std::fmt::Display for PantryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PantryError::Io(msg) => write!(f, "I/O error: {msg}"),
            PantryError::Parse(msg) => write!(f, "Parse error: {msg}"),
            PantryError::Validation(msg) => write!(f, "Validation error: {msg}"),
            PantryError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for PantryError {}

impl From<std::io::Error> for PantryError {
    fn from(err: std::io::Error) -> Self {
        PantryError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PantryError {
    fn from(err: serde_json::Error) -> Self {
        PantryError::Parse(err.to_string())
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, PantryError>;
