//! Interactive console session.
//!
//! This module drives the menu loop: it prints the menu, reads selections,
//! and runs the add and report flows against the ledger. Every field is
//! read through an indefinite read-validate-reprompt loop, so one invalid
//! line costs exactly one corrective message and never aborts the flow.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ValidationConfig;
use crate::error::{InputError, PayrollResult};
use crate::input::{parse_amount, parse_count, parse_identifier, parse_name};
use crate::ledger::PayrollLedger;
use crate::models::{Employee, PayBasis};

use super::menu::{MENU_TEXT, MenuAction, SELECTION_PROMPT, parse_selection};

const ID_PROMPT: &str = "Enter ID: ";
const NAME_PROMPT: &str = "Enter Name: ";
const MONTHLY_SALARY_PROMPT: &str = "Monthly Salary: $";
const HOURLY_RATE_PROMPT: &str = "Hourly Rate: $";
const HOURS_WORKED_PROMPT: &str = "Hours Worked: ";
const PAYMENT_PER_PROJECT_PROMPT: &str = "Payment Per Project: $";
const PROJECTS_COMPLETED_PROMPT: &str = "Projects Completed: ";
const ADDED_NOTICE: &str = "Employee added!\n\n";
const FAREWELL: &str = "Exiting system...\n";

/// The add flow being run, deciding which numeric prompts follow the name.
#[derive(Debug, Clone, Copy)]
enum AddKind {
    FullTime,
    PartTime,
    Contract,
}

/// An interactive payroll session over line-oriented I/O.
///
/// The session is generic over its reader and writer so tests can feed a
/// complete scripted transcript through a byte slice and capture the output
/// in a buffer; the binary instantiates it over locked stdin and stdout.
///
/// # Example
///
/// ```
/// use payroll_ledger::config::ValidationConfig;
/// use payroll_ledger::console::ConsoleSession;
///
/// let script = "1\nE1\nAnn\n5000\n5\n";
/// let mut output = Vec::new();
/// let mut session =
///     ConsoleSession::new(script.as_bytes(), &mut output, ValidationConfig::default());
/// session.run()?;
/// assert_eq!(session.ledger().len(), 1);
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
pub struct ConsoleSession<R, W> {
    reader: R,
    writer: W,
    ledger: PayrollLedger,
    config: ValidationConfig,
    session_id: Uuid,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session with an empty ledger.
    pub fn new(reader: R, writer: W, config: ValidationConfig) -> Self {
        Self {
            reader,
            writer,
            ledger: PayrollLedger::new(),
            config,
            session_id: Uuid::new_v4(),
        }
    }

    /// The ledger built up by this session so far.
    pub fn ledger(&self) -> &PayrollLedger {
        &self.ledger
    }

    /// Consumes the session, handing its ledger to the caller.
    pub fn into_ledger(self) -> PayrollLedger {
        self.ledger
    }

    /// Runs the menu loop until the operator exits or input ends.
    ///
    /// Reaching end of input mid-flow discards the partial record and ends
    /// the session cleanly; only I/O failures surface as errors.
    pub fn run(&mut self) -> PayrollResult<()> {
        info!(
            session_id = %self.session_id,
            version = env!("CARGO_PKG_VERSION"),
            "payroll session started"
        );

        loop {
            self.writer.write_all(MENU_TEXT.as_bytes())?;
            let Some(line) = self.prompt_line(SELECTION_PROMPT)? else {
                break;
            };
            let action = match parse_selection(&line) {
                Ok(action) => action,
                Err(err) => {
                    debug!(
                        session_id = %self.session_id,
                        input = line.trim(),
                        %err,
                        "selection rejected"
                    );
                    writeln!(self.writer, "{err}")?;
                    continue;
                }
            };

            match action {
                MenuAction::AddFullTime => {
                    if self.add_employee(AddKind::FullTime)?.is_none() {
                        break;
                    }
                }
                MenuAction::AddPartTime => {
                    if self.add_employee(AddKind::PartTime)?.is_none() {
                        break;
                    }
                }
                MenuAction::AddContract => {
                    if self.add_employee(AddKind::Contract)?.is_none() {
                        break;
                    }
                }
                MenuAction::GenerateReport => {
                    let report = self.ledger.render_report();
                    self.writer.write_all(report.as_bytes())?;
                    info!(
                        session_id = %self.session_id,
                        employees = self.ledger.len(),
                        "report generated"
                    );
                }
                MenuAction::Exit => {
                    self.writer.write_all(FAREWELL.as_bytes())?;
                    break;
                }
            }
        }

        info!(
            session_id = %self.session_id,
            employees = self.ledger.len(),
            "payroll session ended"
        );
        Ok(())
    }

    /// Runs one add flow: identifier, name, then the kind's numeric fields.
    ///
    /// Returns `Ok(None)` when input ends mid-flow; nothing is stored in
    /// that case.
    fn add_employee(&mut self, kind: AddKind) -> PayrollResult<Option<()>> {
        let Some(id) = self.prompt_identifier()? else {
            return Ok(None);
        };
        let Some(name) = self.prompt_name()? else {
            return Ok(None);
        };
        let Some(pay) = self.prompt_pay_basis(kind)? else {
            return Ok(None);
        };

        let employee = Employee { id, name, pay };
        let id = employee.id.clone();
        let kind_label = employee.pay.label();
        // The count prompt already rejected pairs without a representable total.
        let total = employee.pay.total_pay().unwrap_or_default();
        self.ledger.add(employee)?;

        info!(
            session_id = %self.session_id,
            id = %id,
            kind = kind_label,
            total = %total,
            "employee added"
        );
        self.writer.write_all(ADDED_NOTICE.as_bytes())?;
        Ok(Some(()))
    }

    /// Prompts for the numeric fields of the given add flow.
    fn prompt_pay_basis(&mut self, kind: AddKind) -> PayrollResult<Option<PayBasis>> {
        let basis = match kind {
            AddKind::FullTime => {
                let Some(monthly_salary) = self.prompt_amount(MONTHLY_SALARY_PROMPT)? else {
                    return Ok(None);
                };
                PayBasis::FullTime { monthly_salary }
            }
            AddKind::PartTime => {
                let Some(hourly_rate) = self.prompt_amount(HOURLY_RATE_PROMPT)? else {
                    return Ok(None);
                };
                let Some(hours_worked) = self.prompt_count(HOURS_WORKED_PROMPT, hourly_rate)?
                else {
                    return Ok(None);
                };
                PayBasis::PartTime {
                    hourly_rate,
                    hours_worked,
                }
            }
            AddKind::Contract => {
                let Some(payment_per_project) = self.prompt_amount(PAYMENT_PER_PROJECT_PROMPT)?
                else {
                    return Ok(None);
                };
                let Some(projects_completed) =
                    self.prompt_count(PROJECTS_COMPLETED_PROMPT, payment_per_project)?
                else {
                    return Ok(None);
                };
                PayBasis::Contract {
                    payment_per_project,
                    projects_completed,
                }
            }
        };
        Ok(Some(basis))
    }

    /// Prompts for an identifier that is both well-formed and unique.
    ///
    /// Uniqueness is checked here rather than in the grammar because only
    /// the session holds the ledger; a collision re-prompts like any other
    /// rejection.
    fn prompt_identifier(&mut self) -> PayrollResult<Option<String>> {
        loop {
            let Some(line) = self.prompt_line(ID_PROMPT)? else {
                return Ok(None);
            };
            let checked = parse_identifier(&line, self.config.identifier).and_then(|id| {
                if self.ledger.is_id_unique(&id) {
                    Ok(id)
                } else {
                    Err(InputError::DuplicateIdentifier)
                }
            });
            match checked {
                Ok(id) => return Ok(Some(id)),
                Err(err) => {
                    debug!(session_id = %self.session_id, field = "id", %err, "input rejected");
                    writeln!(self.writer, "{err}")?;
                }
            }
        }
    }

    fn prompt_name(&mut self) -> PayrollResult<Option<String>> {
        let policy = self.config.name;
        self.prompt_field(NAME_PROMPT, move |raw| parse_name(raw, policy))
    }

    fn prompt_amount(&mut self, prompt: &str) -> PayrollResult<Option<Decimal>> {
        self.prompt_field(prompt, parse_amount)
    }

    /// Prompts for a count field.
    ///
    /// The count multiplies `rate`, so a value whose product would leave
    /// `Decimal`'s range is rejected and re-prompted like any other range
    /// violation.
    fn prompt_count(&mut self, prompt: &str, rate: Decimal) -> PayrollResult<Option<u32>> {
        self.prompt_field(prompt, move |raw| {
            let count = parse_count(raw)?;
            if rate.checked_mul(Decimal::from(count)).is_none() {
                return Err(InputError::AmountOutOfRange);
            }
            Ok(count)
        })
    }

    /// The shared read-validate-reprompt loop for a single field.
    fn prompt_field<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> PayrollResult<Option<T>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    debug!(session_id = %self.session_id, prompt, %err, "input rejected");
                    writeln!(self.writer, "{err}")?;
                }
            }
        }
    }

    /// Writes an unterminated prompt, flushes, and reads one line.
    ///
    /// Returns `Ok(None)` once the reader is exhausted.
    fn prompt_line(&mut self, prompt: &str) -> PayrollResult<Option<String>> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!(session_id = %self.session_id, "input ended");
            return Ok(None);
        }
        Ok(Some(line))
    }
}
