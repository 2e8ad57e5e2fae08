//! Display rendering of employees.
//!
//! Both styles are produced by the same [`EmployeeFormatter`], configured
//! with a [`RenderStyle`]. The salary always comes from the employee's own
//! kind.

use serde::{Deserialize, Serialize};

use super::employee::Employee;

/// The layout used when rendering an employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    /// Multi-line "Employee Name: ..." text.
    #[default]
    Narrative,
    /// Single-line constructor-like text, e.g. `Intern(employeeName='Smith', ...)`.
    Structured,
}

/// Renders employees in a fixed style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFormatter {
    /// The style applied to every employee.
    #[serde(default)]
    pub style: RenderStyle,
}

impl EmployeeFormatter {
    /// Creates a formatter for the given style.
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    /// Renders an employee in this formatter's style.
    pub fn format(&self, employee: &Employee) -> String {
        let details = employee.details();
        let salary = employee.salary();

        match self.style {
            RenderStyle::Narrative => format!(
                "Employee Name: {}\nEmployee Type: {}\nEmployee ID: {}\n Salary = {}",
                details.name(),
                details.employee_type(),
                details.id(),
                salary
            ),
            RenderStyle::Structured => format!(
                "{}(employeeName='{}', employeeType='{}', employeeId={}, salary='{}')",
                employee.kind().variant_name(),
                details.name(),
                details.employee_type(),
                details.id(),
                salary
            ),
        }
    }
}

/// Renders an employee in the given style.
///
/// # Examples
///
/// ```
/// use employee_dispatch::models::{Employee, RenderStyle, render};
///
/// let sara = Employee::full_time("Sara", "Intern", 789);
/// assert_eq!(
///     render(&sara, RenderStyle::Structured),
///     "FullTime(employeeName='Sara', employeeType='Intern', employeeId=789, salary='$150,000')"
/// );
/// ```
pub fn render(employee: &Employee, style: RenderStyle) -> String {
    EmployeeFormatter::new(style).format(employee)
}
