//! Employee model.
//!
//! An [`Employee`] is a sum type with one variant per [`EmployeeKind`], so
//! the structural kind and the variant can never disagree. The free-text
//! type label is a separate attribute and may name a different kind.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::EmployeeKind;
use super::render::{RenderStyle, render};

/// The attributes shared by every kind of employee.
///
/// Fields are private; an employee cannot be changed after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeDetails {
    name: String,
    employee_type: String,
    id: i64,
}

impl EmployeeDetails {
    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the free-text type label.
    pub fn employee_type(&self) -> &str {
        &self.employee_type
    }

    /// Returns the employee id.
    pub fn id(&self) -> i64 {
        self.id
    }
}

/// An employee of one of the closed set of kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Employee {
    /// An external contractor.
    Contractor(EmployeeDetails),
    /// A full-time employee.
    FullTime(EmployeeDetails),
    /// An intern.
    Intern(EmployeeDetails),
}

impl Employee {
    /// Constructs an employee whose type label is the kind's canonical name.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_dispatch::models::{Employee, EmployeeKind};
    ///
    /// let employee = Employee::new(EmployeeKind::FullTime, "Sara", 789);
    /// assert_eq!(employee.kind(), EmployeeKind::FullTime);
    /// assert_eq!(employee.employee_type(), "Full Time");
    /// assert_eq!(employee.salary(), "$150,000");
    /// ```
    pub fn new(kind: EmployeeKind, name: impl Into<String>, id: i64) -> Self {
        Self::with_type_label(kind, name, kind.canonical_name(), id)
    }

    /// Constructs an employee with an explicit free-text type label.
    ///
    /// The label is not checked against `kind`.
    pub fn with_type_label(
        kind: EmployeeKind,
        name: impl Into<String>,
        employee_type: impl Into<String>,
        id: i64,
    ) -> Self {
        let details = EmployeeDetails {
            name: name.into(),
            employee_type: employee_type.into(),
            id,
        };
        match kind {
            EmployeeKind::Contractor => Employee::Contractor(details),
            EmployeeKind::FullTime => Employee::FullTime(details),
            EmployeeKind::Intern => Employee::Intern(details),
        }
    }

    /// Constructs a contractor.
    pub fn contractor(name: impl Into<String>, employee_type: impl Into<String>, id: i64) -> Self {
        Self::with_type_label(EmployeeKind::Contractor, name, employee_type, id)
    }

    /// Constructs a full-time employee.
    pub fn full_time(name: impl Into<String>, employee_type: impl Into<String>, id: i64) -> Self {
        Self::with_type_label(EmployeeKind::FullTime, name, employee_type, id)
    }

    /// Constructs an intern.
    pub fn intern(name: impl Into<String>, employee_type: impl Into<String>, id: i64) -> Self {
        Self::with_type_label(EmployeeKind::Intern, name, employee_type, id)
    }

    /// Returns the structural kind.
    pub fn kind(&self) -> EmployeeKind {
        match self {
            Employee::Contractor(_) => EmployeeKind::Contractor,
            Employee::FullTime(_) => EmployeeKind::FullTime,
            Employee::Intern(_) => EmployeeKind::Intern,
        }
    }

    /// Returns the shared attributes.
    pub fn details(&self) -> &EmployeeDetails {
        match self {
            Employee::Contractor(details)
            | Employee::FullTime(details)
            | Employee::Intern(details) => details,
        }
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        self.details().name()
    }

    /// Returns the free-text type label.
    pub fn employee_type(&self) -> &str {
        self.details().employee_type()
    }

    /// Returns the employee id.
    pub fn id(&self) -> i64 {
        self.details().id()
    }

    /// Returns the compensation label of this employee's kind.
    pub fn salary(&self) -> &'static str {
        self.kind().compensation_label()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, RenderStyle::Narrative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_canonical_type_label() {
        let employee = Employee::new(EmployeeKind::Intern, "Smith", 456);
        assert_eq!(employee.kind(), EmployeeKind::Intern);
        assert_eq!(employee.name(), "Smith");
        assert_eq!(employee.employee_type(), "Intern");
        assert_eq!(employee.id(), 456);
    }

    #[test]
    fn test_with_type_label_keeps_mismatched_label() {
        let employee = Employee::intern("Smith", "Full Time", 456);
        assert_eq!(employee.kind(), EmployeeKind::Intern);
        assert_eq!(employee.employee_type(), "Full Time");
        assert_eq!(employee.salary(), "$50,000");
    }

    #[test]
    fn test_kind_matches_variant_for_every_kind() {
        for kind in EmployeeKind::ALL {
            let employee = Employee::new(kind, "Alex", 1);
            assert_eq!(employee.kind(), kind);
        }
        assert!(matches!(
            Employee::contractor("John", "Contractor", 123),
            Employee::Contractor(_)
        ));
        assert!(matches!(
            Employee::full_time("Sara", "Intern", 789),
            Employee::FullTime(_)
        ));
    }

    #[test]
    fn test_salary_is_kind_derived() {
        let a = Employee::contractor("John", "Contractor", 123);
        let b = Employee::contractor("Someone Else", "Intern", -5);
        assert_eq!(a.salary(), "$100,000");
        assert_eq!(a.salary(), b.salary());
    }

    #[test]
    fn test_empty_name_and_negative_id_are_accepted() {
        let employee = Employee::new(EmployeeKind::FullTime, "", -1);
        assert_eq!(employee.name(), "");
        assert_eq!(employee.id(), -1);
    }

    #[test]
    fn test_structural_equality() {
        let a = Employee::full_time("Sara", "Intern", 789);
        let b = Employee::full_time("Sara", "Intern", 789);
        let c = Employee::intern("Sara", "Intern", 789);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_is_narrative() {
        let employee = Employee::contractor("John", "Contractor", 123);
        assert_eq!(
            employee.to_string(),
            "Employee Name: John\nEmployee Type: Contractor\nEmployee ID: 123\n Salary = $100,000"
        );
    }

    #[test]
    fn test_deserialize_tagged_employee() {
        let json = r#"{
            "kind": "intern",
            "name": "Smith",
            "employee_type": "Full Time",
            "id": 456
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee, Employee::intern("Smith", "Full Time", 456));
    }

    #[test]
    fn test_serialize_employee() {
        let employee = Employee::full_time("Sara", "Intern", 789);
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "full_time",
                "name": "Sara",
                "employee_type": "Intern",
                "id": 789
            })
        );
    }

    #[test]
    fn test_deserialize_unknown_kind_fails() {
        let json = r#"{"kind": "manager", "name": "Pat", "employee_type": "Manager", "id": 1}"#;
        assert!(serde_json::from_str::<Employee>(json).is_err());
    }

    #[test]
    fn test_employee_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Employee>();
    }
}
