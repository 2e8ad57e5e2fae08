//! Configuration types deserialized from YAML files.

use serde::Deserialize;

use crate::models::{Employee, EmployeeFormatter};

/// Roster configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employees in declaration order.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    formatter: EmployeeFormatter,
    employees: Vec<Employee>,
}

impl DispatchConfig {
    /// Creates a new DispatchConfig from its component parts.
    pub fn new(formatter: EmployeeFormatter, employees: Vec<Employee>) -> Self {
        Self {
            formatter,
            employees,
        }
    }

    /// Returns the configured formatter.
    pub fn formatter(&self) -> &EmployeeFormatter {
        &self.formatter
    }

    /// Returns the roster in declaration order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
