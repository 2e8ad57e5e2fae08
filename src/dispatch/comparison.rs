//! Side-by-side record of both strategies for one employee.

use serde::Serialize;
use tracing::warn;

use crate::models::{Employee, EmployeeKind};

use super::strategy::{CompensationStrategy, ExhaustiveMatch, Selection, SequentialMatch};

/// The outcome of running both strategies on the same employee.
///
/// # Example
///
/// ```
/// use employee_dispatch::dispatch::compare_strategies;
/// use employee_dispatch::models::Employee;
///
/// let comparison = compare_strategies(&Employee::intern("Smith", "Full Time", 456));
/// assert_eq!(comparison.sequential_label(), Some("$150,000"));
/// assert_eq!(comparison.exhaustive_label(), "$50,000");
/// assert!(comparison.diverges());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyComparison {
    /// The employee's id.
    pub employee_id: i64,
    /// The free-text type label the sequential match looked at.
    pub employee_type: String,
    /// The structural kind the exhaustive match looked at.
    pub kind: EmployeeKind,
    /// The sequential match's selection, if any.
    pub sequential: Option<Selection>,
    /// The exhaustive match's selection.
    pub exhaustive: Selection,
}

impl StrategyComparison {
    /// Returns the label selected by the sequential match, if any.
    pub fn sequential_label(&self) -> Option<&'static str> {
        self.sequential.map(|selection| selection.label)
    }

    /// Returns the label selected by the exhaustive match.
    pub fn exhaustive_label(&self) -> &'static str {
        self.exhaustive.label
    }

    /// True when the two strategies did not select the same label.
    pub fn diverges(&self) -> bool {
        self.sequential_label() != Some(self.exhaustive_label())
    }
}

/// Runs both strategies on an employee and records the outcomes.
pub fn compare_strategies(employee: &Employee) -> StrategyComparison {
    let comparison = StrategyComparison {
        employee_id: employee.id(),
        employee_type: employee.employee_type().to_string(),
        kind: employee.kind(),
        sequential: SequentialMatch.select(employee),
        exhaustive: ExhaustiveMatch.select_total(employee),
    };

    if comparison.diverges() {
        warn!(
            employee_id = comparison.employee_id,
            employee_type = %comparison.employee_type,
            kind = %comparison.kind,
            strategies = ?[SequentialMatch.name(), ExhaustiveMatch.name()],
            sequential = ?comparison.sequential_label(),
            exhaustive = comparison.exhaustive_label(),
            "Dispatch strategies disagree"
        );
    }

    comparison
}
