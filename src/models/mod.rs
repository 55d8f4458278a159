//! Core data models for the payroll ledger.
//!
//! This module contains the domain models used throughout the crate.

mod employee;

pub use employee::{Employee, PayBasis};
