//! Employee model and related types.
//!
//! This module defines the Employee struct and the PayBasis tagged union
//! covering the three compensation schemes the ledger accepts.

use rust_decimal::Decimal;
use std::fmt;

/// The compensation scheme attached to an employee record.
///
/// The set of schemes is closed: the menu offers exactly these three, and
/// each variant carries the fields its pay formula needs, so a record can
/// never hold a field that does not apply to its scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayBasis {
    /// Fixed monthly salary, independent of hours.
    FullTime {
        /// The fixed salary per month.
        monthly_salary: Decimal,
    },
    /// Hourly wage; pay is the rate times hours worked.
    PartTime {
        /// The wage per hour.
        hourly_rate: Decimal,
        /// Hours worked in the period.
        hours_worked: u32,
    },
    /// Per-project payment; pay is the rate times completed projects.
    Contract {
        /// The payment per completed project.
        payment_per_project: Decimal,
        /// Number of projects completed.
        projects_completed: u32,
    },
}

impl PayBasis {
    /// Returns the total pay under this basis, or `None` when the product
    /// leaves `Decimal`'s range.
    ///
    /// Multiplication is exact decimal arithmetic, so an hourly rate of
    /// 28.54 over 8 hours is exactly 228.32 with no float drift. The console
    /// rejects rate and count pairs without a representable total during
    /// prompting, so every record it stores carries `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::PayBasis;
    /// use rust_decimal::Decimal;
    ///
    /// let basis = PayBasis::PartTime {
    ///     hourly_rate: Decimal::new(2854, 2),
    ///     hours_worked: 8,
    /// };
    /// assert_eq!(basis.total_pay(), Some(Decimal::new(22832, 2)));
    /// ```
    pub fn total_pay(&self) -> Option<Decimal> {
        match self {
            PayBasis::FullTime { monthly_salary } => Some(*monthly_salary),
            PayBasis::PartTime {
                hourly_rate,
                hours_worked,
            } => hourly_rate.checked_mul(Decimal::from(*hours_worked)),
            PayBasis::Contract {
                payment_per_project,
                projects_completed,
            } => payment_per_project.checked_mul(Decimal::from(*projects_completed)),
        }
    }

    /// Returns the snake_case label for this basis, used in log fields.
    pub fn label(&self) -> &'static str {
        match self {
            PayBasis::FullTime { .. } => "full_time",
            PayBasis::PartTime { .. } => "part_time",
            PayBasis::Contract { .. } => "contract",
        }
    }
}

/// One validated employee record: identifier, name, and compensation basis.
///
/// Records are immutable once stored; the ledger owns them exclusively and
/// guarantees identifier uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's validated name.
    pub name: String,
    /// The compensation basis and its fields.
    pub pay: PayBasis,
}

/// Renders the record's report block, one line per field plus the derived
/// total where the scheme has one and the product is representable. Amounts
/// print with trailing zero scale removed, so an entered "5000" renders as
/// `$5000` and "7.50" as `$7.5`.
impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employee: {} (ID: {})", self.name, self.id)?;
        match &self.pay {
            PayBasis::FullTime { monthly_salary } => {
                writeln!(f, "Fixed Monthly Salary: ${}", monthly_salary.normalize())?;
            }
            PayBasis::PartTime {
                hourly_rate,
                hours_worked,
            } => {
                writeln!(f, "Hourly Rate: ${}", hourly_rate.normalize())?;
                writeln!(f, "Hours Worked: {hours_worked}")?;
                if let Some(total) = self.pay.total_pay() {
                    writeln!(f, "Total Salary: ${}", total.normalize())?;
                }
            }
            PayBasis::Contract {
                payment_per_project,
                projects_completed,
            } => {
                writeln!(
                    f,
                    "Contract Payment Per Project: ${}",
                    payment_per_project.normalize()
                )?;
                writeln!(f, "Projects Completed: {projects_completed}")?;
                if let Some(total) = self.pay.total_pay() {
                    writeln!(f, "Total Salary: ${}", total.normalize())?;
                }
            }
        }
        Ok(())
    }
}
