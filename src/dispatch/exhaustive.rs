//! Exhaustive match over the structural kind.

use tracing::trace;

use crate::models::Employee;

/// Returns the compensation label for the employee's structural kind.
///
/// The match has no fallback arm; adding a kind without handling it here
/// fails to compile.
///
/// # Examples
///
/// ```
/// use employee_dispatch::dispatch::exhaustive_match;
/// use employee_dispatch::models::Employee;
///
/// let smith = Employee::intern("Smith", "Full Time", 456);
/// assert_eq!(exhaustive_match(&smith), "$50,000");
/// ```
pub fn exhaustive_match(employee: &Employee) -> &'static str {
    let label = match employee {
        Employee::Contractor(_) => "$100,000",
        Employee::FullTime(_) => "$150,000",
        Employee::Intern(_) => "$50,000",
    };
    trace!(employee_id = employee.id(), label, "Exhaustive match selected label");
    label
}
