//! Error types for the payroll ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate,
//! split along the boundary the console enforces: an [`InputError`] is
//! consumed by the prompt loop that produced it (its display text is the
//! corrective message shown to the operator before the field is asked
//! again), while a [`PayrollError`] propagates to the caller.

use thiserror::Error;

/// A rejected line of operator input.
///
/// Every variant maps to exactly one corrective message. The prompt loops
/// print the message and read the same field again, so these errors never
/// escape the console layer.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::InputError;
///
/// let error = InputError::DuplicateIdentifier;
/// assert_eq!(error.to_string(), "Duplicate ID! Try again.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The identifier is empty or contains a character outside the active
    /// policy's charset.
    #[error("Invalid ID! Use only {expected}.")]
    InvalidIdentifier {
        /// Description of the accepted charset.
        expected: &'static str,
    },

    /// The identifier is well-formed but already present in the ledger.
    #[error("Duplicate ID! Try again.")]
    DuplicateIdentifier,

    /// The name is empty, contains a non-letter, or violates the active
    /// spacing policy.
    #[error("Invalid name! Use {expected}.")]
    InvalidName {
        /// Description of the accepted shape.
        expected: &'static str,
    },

    /// A count field is empty or contains a non-digit character.
    #[error("Invalid input! Please enter whole numbers only.")]
    InvalidCount,

    /// A count field is all digits but exceeds the representable range.
    #[error("Input out of range for a whole number.")]
    CountOutOfRange,

    /// An amount field violates the digits-plus-optional-point grammar.
    #[error("Invalid input! Use numbers with optional single decimal point.")]
    InvalidAmount,

    /// An amount field is lexically valid but exceeds the representable
    /// range.
    #[error("Input out of range for an amount.")]
    AmountOutOfRange,

    /// The menu selection is not a single digit.
    #[error("Invalid menu choice!")]
    InvalidMenuChoice,

    /// The menu selection is a digit with no menu entry.
    #[error("Invalid menu option!")]
    UnknownMenuOption,
}

/// The main error type for the payroll ledger.
///
/// Fallible operations outside the prompt loops return this error type,
/// making it easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A record with this identifier is already stored in the ledger.
    #[error("Duplicate employee ID: {id}")]
    DuplicateEmployee {
        /// The identifier that was already taken.
        id: String,
    },

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
