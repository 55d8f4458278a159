//! Interactive Console Payroll Ledger
//!
//! This crate collects employee records under three compensation schemes
//! (fixed monthly salary, hourly, and per-project), validates every field of
//! operator input with corrective re-prompting, and renders a payroll report
//! with scheme-specific formatting and exact decimal totals.

#![warn(missing_docs)]

pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod ledger;
pub mod models;
