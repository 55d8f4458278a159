//! Field grammar validation for operator input.
//!
//! This module converts raw console lines into typed values. Each parser
//! trims surrounding whitespace, then either yields a value satisfying the
//! field grammar or an [`InputError`] whose display text is the corrective
//! message the console prints before asking for the field again.
//!
//! The parsers are pure: they know nothing about prompts, the ledger, or
//! I/O, which keeps every grammar rule testable on its own.

use rust_decimal::Decimal;

use crate::config::{IdentifierPolicy, NameSpacingPolicy};
use crate::error::InputError;

/// Validates an employee identifier against the active charset policy.
///
/// The trimmed input must be non-empty and consist entirely of characters
/// the policy accepts. Uniqueness against the ledger is checked separately
/// by the console, which owns the ledger.
///
/// # Arguments
///
/// * `raw` - The line as read, including any surrounding whitespace
/// * `policy` - The charset the identifier must draw from
///
/// # Examples
///
/// ```
/// use payroll_ledger::config::IdentifierPolicy;
/// use payroll_ledger::input::parse_identifier;
///
/// let id = parse_identifier("  E7  ", IdentifierPolicy::Alphanumeric).unwrap();
/// assert_eq!(id, "E7");
/// assert!(parse_identifier("E7", IdentifierPolicy::Digits).is_err());
/// ```
pub fn parse_identifier(raw: &str, policy: IdentifierPolicy) -> Result<String, InputError> {
    let trimmed = raw.trim();
    let accepted = |c: char| match policy {
        IdentifierPolicy::Alphanumeric => c.is_ascii_alphanumeric(),
        IdentifierPolicy::Digits => c.is_ascii_digit(),
    };
    if trimmed.is_empty() || !trimmed.chars().all(accepted) {
        return Err(InputError::InvalidIdentifier {
            expected: policy.expected(),
        });
    }
    Ok(trimmed.to_string())
}

/// Validates an employee name against the active spacing policy.
///
/// The trimmed input must be non-empty and consist of ASCII letters and
/// spaces. Under [`NameSpacingPolicy::SingleSpaces`] a space must be
/// followed by a letter, so consecutive spaces are rejected; under
/// [`NameSpacingPolicy::AnySpacing`] any arrangement of interior spaces
/// passes.
///
/// # Examples
///
/// ```
/// use payroll_ledger::config::NameSpacingPolicy;
/// use payroll_ledger::input::parse_name;
///
/// assert!(parse_name("Ann Lee", NameSpacingPolicy::SingleSpaces).is_ok());
/// assert!(parse_name("Ann  Lee", NameSpacingPolicy::SingleSpaces).is_err());
/// assert!(parse_name("Ann  Lee", NameSpacingPolicy::AnySpacing).is_ok());
/// ```
pub fn parse_name(raw: &str, policy: NameSpacingPolicy) -> Result<String, InputError> {
    let trimmed = raw.trim();
    let invalid = InputError::InvalidName {
        expected: policy.expected(),
    };
    if trimmed.is_empty() {
        return Err(invalid);
    }
    let mut previous_was_space = false;
    for c in trimmed.chars() {
        if c == ' ' {
            if previous_was_space && policy == NameSpacingPolicy::SingleSpaces {
                return Err(invalid);
            }
            previous_was_space = true;
        } else if c.is_ascii_alphabetic() {
            previous_was_space = false;
        } else {
            return Err(invalid);
        }
    }
    Ok(trimmed.to_string())
}

/// Parses a non-negative whole-number field such as hours worked or
/// projects completed.
///
/// The trimmed input must be one or more ASCII digits. A digit string too
/// large for the count type is reported as a range error, distinct from the
/// syntax error, so the operator learns which rule failed.
///
/// # Examples
///
/// ```
/// use payroll_ledger::input::parse_count;
///
/// assert_eq!(parse_count(" 40 ").unwrap(), 40);
/// assert!(parse_count("4O").is_err());
/// assert!(parse_count("99999999999").is_err());
/// ```
pub fn parse_count(raw: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidCount);
    }
    // All digits, so the only remaining failure is overflow.
    trimmed.parse().map_err(|_| InputError::CountOutOfRange)
}

/// Parses a non-negative monetary amount such as a salary or rate.
///
/// The trimmed input must contain at least one ASCII digit, at most one
/// decimal point, and nothing else. A leading point reads as a zero whole
/// part (".5" is 0.5) and a trailing point as a whole number ("5." is 5).
/// Sign characters are not part of the grammar, so amounts are non-negative
/// by construction.
///
/// # Examples
///
/// ```
/// use payroll_ledger::input::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("1084.70").unwrap(), Decimal::new(108470, 2));
/// assert_eq!(parse_amount(".5").unwrap(), Decimal::new(5, 1));
/// assert!(parse_amount("12.3.4").is_err());
/// assert!(parse_amount("$50").is_err());
/// ```
pub fn parse_amount(raw: &str) -> Result<Decimal, InputError> {
    let trimmed = raw.trim();
    let mut decimal_points = 0;
    let mut has_digit = false;
    for c in trimmed.chars() {
        if c == '.' {
            decimal_points += 1;
            if decimal_points > 1 {
                return Err(InputError::InvalidAmount);
            }
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else {
            return Err(InputError::InvalidAmount);
        }
    }
    // Covers the empty string and a lone ".".
    if !has_digit {
        return Err(InputError::InvalidAmount);
    }

    // Normalize the grammar's edge forms before handing off: a trailing
    // point is dropped and a leading point gains a zero whole part.
    let lexical = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let parsed = match lexical.strip_prefix('.') {
        Some(fraction) => format!("0.{fraction}").parse::<Decimal>(),
        None => lexical.parse::<Decimal>(),
    };
    parsed.map_err(|_| InputError::AmountOutOfRange)
}
