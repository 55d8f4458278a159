//! Console surface for the payroll ledger.
//!
//! This module provides the interactive menu session and its building
//! blocks: the menu definition, selection parsing, and the session driver
//! that owns the prompt loops.

mod menu;
mod session;

pub use menu::{MENU_TEXT, MenuAction, SELECTION_PROMPT, parse_selection};
pub use session::ConsoleSession;
