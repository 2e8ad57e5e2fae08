//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the formatter
//! style and the employee roster from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{DispatchError, DispatchResult};
use crate::models::{Employee, EmployeeFormatter, RenderStyle};

use super::types::{DispatchConfig, RosterConfig};

/// Loads and provides access to dispatch configuration.
///
/// # Directory Structure
///
/// ```text
/// config/demo/
/// ├── formatter.yaml   # style: narrative | structured
/// └── roster.yaml      # employees: [{ kind, name, employee_type, id }]
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_dispatch::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/demo")?;
/// for employee in loader.employees() {
///     println!("{}", loader.formatter().format(employee));
/// }
/// # Ok::<(), employee_dispatch::error::DispatchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DispatchConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML,
    /// including an employee with a kind outside the closed set.
    pub fn load<P: AsRef<Path>>(path: P) -> DispatchResult<Self> {
        let path = path.as_ref();

        let formatter = Self::load_yaml::<EmployeeFormatter>(&path.join("formatter.yaml"))?;
        let roster = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;

        info!(
            path = %path.display(),
            style = ?formatter.style,
            employees = roster.employees.len(),
            "Loaded dispatch configuration"
        );

        Ok(Self {
            config: DispatchConfig::new(formatter, roster.employees),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> DispatchResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DispatchError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| DispatchError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Returns the configured formatter.
    pub fn formatter(&self) -> &EmployeeFormatter {
        self.config.formatter()
    }

    /// Returns the configured render style.
    pub fn style(&self) -> RenderStyle {
        self.config.formatter().style
    }

    /// Returns the roster in declaration order.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Gets the first employee with the given id.
    ///
    /// Ids are not required to be unique.
    pub fn get_employee(&self, id: i64) -> DispatchResult<&Employee> {
        self.employees()
            .iter()
            .find(|employee| employee.id() == id)
            .ok_or(DispatchError::EmployeeNotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeKind;

    fn config_path() -> &'static str {
        "./config/demo"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.style(), RenderStyle::Narrative);
        assert_eq!(loader.employees().len(), 3);
    }

    #[test]
    fn test_roster_keeps_declaration_order_and_labels() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let employees = loader.employees();

        assert_eq!(employees[0], Employee::contractor("John", "Contractor", 123));
        assert_eq!(employees[1], Employee::intern("Smith", "Full Time", 456));
        assert_eq!(employees[2], Employee::full_time("Sara", "Intern", 789));
    }

    #[test]
    fn test_config_exposes_loaded_parts() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let config: &DispatchConfig = loader.config();

        assert_eq!(config.formatter(), loader.formatter());
        assert_eq!(config.employees(), loader.employees());
        assert_eq!(config.employees()[0].name(), "John");
    }

    #[test]
    fn test_get_employee() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let smith = loader.get_employee(456).unwrap();
        assert_eq!(smith.name(), "Smith");
        assert_eq!(smith.kind(), EmployeeKind::Intern);
    }

    #[test]
    fn test_get_employee_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_employee(999) {
            Err(DispatchError::EmployeeNotFound { id }) => assert_eq!(id, 999),
            other => panic!("Expected EmployeeNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(DispatchError::ConfigNotFound { path }) => {
                assert!(path.contains("formatter.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_formatter_yaml_parses_style() {
        let formatter: EmployeeFormatter = serde_yaml::from_str("style: structured").unwrap();
        assert_eq!(formatter.style, RenderStyle::Structured);
    }

    #[test]
    fn test_roster_yaml_rejects_unknown_kind() {
        let yaml = "employees:\n  - kind: manager\n    name: Pat\n    employee_type: Manager\n    id: 1\n";
        assert!(serde_yaml::from_str::<RosterConfig>(yaml).is_err());
    }
}
