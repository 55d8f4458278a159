//! Menu definition and selection parsing.
//!
//! This module owns the menu text and the mapping from a selection line to
//! a dispatchable [`MenuAction`].

use crate::error::InputError;

/// Menu block printed before every selection prompt.
pub const MENU_TEXT: &str = "Payroll System Menu
1. Add Full-time Employee
2. Add Part-time Employee
3. Add Contractual Employee
4. Generate Report
5. Exit
";

/// Prompt written, unterminated, after the menu block.
pub const SELECTION_PROMPT: &str = "Selection: ";

/// One dispatchable menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Prompt for and store a fixed-salary record.
    AddFullTime,
    /// Prompt for and store an hourly record.
    AddPartTime,
    /// Prompt for and store a per-project record.
    AddContract,
    /// Render the payroll report.
    GenerateReport,
    /// End the session.
    Exit,
}

/// Parses one selection line into a [`MenuAction`].
///
/// The trimmed selection must be exactly one ASCII digit; anything else is
/// a shape error. A single digit with no menu entry is rejected separately,
/// so the operator learns which rule failed.
///
/// # Examples
///
/// ```
/// use payroll_ledger::console::{parse_selection, MenuAction};
/// use payroll_ledger::error::InputError;
///
/// assert_eq!(parse_selection("4\n"), Ok(MenuAction::GenerateReport));
/// assert_eq!(parse_selection("12"), Err(InputError::InvalidMenuChoice));
/// assert_eq!(parse_selection("7"), Err(InputError::UnknownMenuOption));
/// ```
pub fn parse_selection(raw: &str) -> Result<MenuAction, InputError> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(choice), None) if choice.is_ascii_digit() => match choice {
            '1' => Ok(MenuAction::AddFullTime),
            '2' => Ok(MenuAction::AddPartTime),
            '3' => Ok(MenuAction::AddContract),
            '4' => Ok(MenuAction::GenerateReport),
            '5' => Ok(MenuAction::Exit),
            _ => Err(InputError::UnknownMenuOption),
        },
        _ => Err(InputError::InvalidMenuChoice),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_digit_maps_to_its_action() {
        assert_eq!(parse_selection("1"), Ok(MenuAction::AddFullTime));
        assert_eq!(parse_selection("2"), Ok(MenuAction::AddPartTime));
        assert_eq!(parse_selection("3"), Ok(MenuAction::AddContract));
        assert_eq!(parse_selection("4"), Ok(MenuAction::GenerateReport));
        assert_eq!(parse_selection("5"), Ok(MenuAction::Exit));
    }

    #[test]
    fn test_selection_trims_the_line_terminator() {
        assert_eq!(parse_selection(" 5 \n"), Ok(MenuAction::Exit));
    }

    #[test]
    fn test_empty_selection_is_a_shape_error() {
        assert_eq!(parse_selection(""), Err(InputError::InvalidMenuChoice));
        assert_eq!(parse_selection("   \n"), Err(InputError::InvalidMenuChoice));
    }

    #[test]
    fn test_multi_character_selection_is_a_shape_error() {
        assert_eq!(parse_selection("12"), Err(InputError::InvalidMenuChoice));
        assert_eq!(parse_selection("1 2"), Err(InputError::InvalidMenuChoice));
    }

    #[test]
    fn test_non_digit_selection_is_a_shape_error() {
        assert_eq!(parse_selection("x"), Err(InputError::InvalidMenuChoice));
        assert_eq!(parse_selection("abc"), Err(InputError::InvalidMenuChoice));
        assert_eq!(parse_selection("é"), Err(InputError::InvalidMenuChoice));
    }

    #[test]
    fn test_out_of_range_digit_is_an_unknown_option() {
        assert_eq!(parse_selection("0"), Err(InputError::UnknownMenuOption));
        assert_eq!(parse_selection("6"), Err(InputError::UnknownMenuOption));
        assert_eq!(parse_selection("7"), Err(InputError::UnknownMenuOption));
        assert_eq!(parse_selection("9"), Err(InputError::UnknownMenuOption));
    }

    #[test]
    fn test_menu_text_lists_all_five_entries() {
        for entry in ["1.", "2.", "3.", "4.", "5."] {
            assert!(MENU_TEXT.contains(entry));
        }
        assert!(MENU_TEXT.ends_with('\n'));
    }
}
