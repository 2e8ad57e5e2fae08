//! Interchangeable dispatch strategies and salary line emission.

use std::io::{self, Write};

use serde::Serialize;

use crate::models::{Employee, EmployeeKind};

use super::exhaustive::exhaustive_match;
use super::sequential::sequential_kind;

/// The kind a strategy dispatched to, and its compensation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// The [`CompensationStrategy::name`] of the strategy that made the selection.
    pub strategy: &'static str,
    /// The kind the strategy selected.
    pub kind: EmployeeKind,
    /// The compensation label of that kind.
    pub label: &'static str,
}

impl Selection {
    fn new(strategy: &'static str, kind: EmployeeKind) -> Self {
        Self {
            strategy,
            kind,
            label: kind.compensation_label(),
        }
    }
}

/// A way of choosing a compensation label for an employee.
pub trait CompensationStrategy {
    /// A short name recorded on every [`Selection`] the strategy makes.
    fn name(&self) -> &'static str;

    /// Selects a kind and label, or `None` when the strategy finds no match.
    fn select(&self, employee: &Employee) -> Option<Selection>;
}

/// Strategy A: match the free-text type label in a fixed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialMatch;

impl CompensationStrategy for SequentialMatch {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn select(&self, employee: &Employee) -> Option<Selection> {
        sequential_kind(employee).map(|kind| Selection::new(self.name(), kind))
    }
}

/// Strategy B: match the structural kind. Never returns `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveMatch;

impl ExhaustiveMatch {
    /// Like [`CompensationStrategy::select`] without the `Option`.
    pub fn select_total(&self, employee: &Employee) -> Selection {
        Selection {
            strategy: self.name(),
            kind: employee.kind(),
            label: exhaustive_match(employee),
        }
    }
}

impl CompensationStrategy for ExhaustiveMatch {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn select(&self, employee: &Employee) -> Option<Selection> {
        Some(self.select_total(employee))
    }
}

/// Builds the salary line for an employee, e.g. `"Full Time Salary: $150,000"`.
///
/// The prefix names the kind the strategy selected.
///
/// # Examples
///
/// ```
/// use employee_dispatch::dispatch::{ExhaustiveMatch, SequentialMatch, salary_line};
/// use employee_dispatch::models::Employee;
///
/// let smith = Employee::intern("Smith", "Full Time", 456);
/// assert_eq!(
///     salary_line(&SequentialMatch, &smith).as_deref(),
///     Some("Full Time Salary: $150,000")
/// );
/// assert_eq!(
///     salary_line(&ExhaustiveMatch, &smith).as_deref(),
///     Some("Intern Salary: $50,000")
/// );
/// ```
pub fn salary_line<S>(strategy: &S, employee: &Employee) -> Option<String>
where
    S: CompensationStrategy + ?Sized,
{
    strategy
        .select(employee)
        .map(|selection| format!("{} Salary: {}", selection.kind, selection.label))
}

/// Writes the salary line followed by a newline.
///
/// When the strategy finds no match, nothing is written and `Ok(())` is
/// returned.
pub fn print_employee_salary<S, W>(strategy: &S, employee: &Employee, out: &mut W) -> io::Result<()>
where
    S: CompensationStrategy + ?Sized,
    W: Write + ?Sized,
{
    if let Some(line) = salary_line(strategy, employee) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
