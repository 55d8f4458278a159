//! The in-memory payroll ledger.
//!
//! This module provides [`PayrollLedger`], the owning collection of
//! employee records for one session. The ledger enforces identifier
//! uniqueness on insert and renders the payroll report; it holds no I/O
//! and no validation state, so it is usable far from the console.

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

/// Notice printed in place of a report when the ledger holds no records.
pub const EMPTY_REPORT_NOTICE: &str = "No employees in system!\n\n";

/// Header opening a non-empty payroll report.
pub const REPORT_HEADER: &str = "\nEmployee Payroll Report ---\n";

/// The owning, insertion-ordered collection of employee records.
///
/// Records are kept in the order they were added and never mutated or
/// removed; the report walks them front to back.
///
/// # Example
///
/// ```
/// use payroll_ledger::ledger::PayrollLedger;
/// use payroll_ledger::models::{Employee, PayBasis};
/// use rust_decimal::Decimal;
///
/// let mut ledger = PayrollLedger::new();
/// ledger.add(Employee {
///     id: "E1".to_string(),
///     name: "Ann".to_string(),
///     pay: PayBasis::FullTime {
///         monthly_salary: Decimal::new(5000, 0),
///     },
/// })?;
/// assert_eq!(ledger.len(), 1);
/// assert!(!ledger.is_id_unique("E1"));
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
#[derive(Debug, Default)]
pub struct PayrollLedger {
    employees: Vec<Employee>,
}

impl PayrollLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no stored record carries this identifier.
    ///
    /// The scan is linear; session ledgers stay small enough that an index
    /// would buy nothing.
    pub fn is_id_unique(&self, id: &str) -> bool {
        self.employees.iter().all(|employee| employee.id != id)
    }

    /// Appends a record, enforcing identifier uniqueness.
    ///
    /// # Returns
    ///
    /// Returns `DuplicateEmployee` if a record with the same identifier is
    /// already stored; the ledger is unchanged in that case.
    pub fn add(&mut self, employee: Employee) -> PayrollResult<()> {
        if !self.is_id_unique(&employee.id) {
            return Err(PayrollError::DuplicateEmployee { id: employee.id });
        }
        self.employees.push(employee);
        Ok(())
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// The stored records in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Renders the payroll report.
    ///
    /// An empty ledger yields only the no-employees notice. Otherwise the
    /// header is followed by one block per record in insertion order, each
    /// block closed by a blank line. Rendering reads the ledger without
    /// consuming it, so repeated reports over unchanged records are
    /// byte-identical.
    pub fn render_report(&self) -> String {
        if self.employees.is_empty() {
            return EMPTY_REPORT_NOTICE.to_string();
        }
        let mut report = String::from(REPORT_HEADER);
        for employee in &self.employees {
            report.push_str(&employee.to_string());
            report.push('\n');
        }
        report
    }
}
