//! Sequential match over the free-text type label.
//!
//! The label is compared against each kind's canonical name in a fixed
//! order. A label that names no kind yields nothing: no output, no error
//! and no default.

use tracing::{debug, trace};

use crate::models::{Employee, EmployeeKind};

/// Returns the kind whose canonical name equals the employee's free-text
/// type label, trying Contractor, Full Time, then Intern.
///
/// Comparison is exact and case-sensitive.
pub fn sequential_kind(employee: &Employee) -> Option<EmployeeKind> {
    let label = employee.employee_type();

    let matched = EmployeeKind::ALL
        .into_iter()
        .find(|kind| label == kind.canonical_name());

    match matched {
        Some(kind) => {
            trace!(employee_id = employee.id(), kind = %kind, "Sequential match selected kind");
        }
        None => {
            debug!(
                employee_id = employee.id(),
                employee_type = %label,
                "Sequential match found no kind for type label"
            );
        }
    }

    matched
}

/// Returns the compensation label selected by the free-text type label,
/// or `None` when the label names no kind.
///
/// # Examples
///
/// ```
/// use employee_dispatch::dispatch::sequential_match;
/// use employee_dispatch::models::Employee;
///
/// let smith = Employee::intern("Smith", "Full Time", 456);
/// assert_eq!(sequential_match(&smith), Some("$150,000"));
///
/// let typo = Employee::intern("Smith", "Fulltime", 456);
/// assert_eq!(sequential_match(&typo), None);
/// ```
pub fn sequential_match(employee: &Employee) -> Option<&'static str> {
    sequential_kind(employee).map(EmployeeKind::compensation_label)
}
