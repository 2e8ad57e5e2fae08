//! The closed set of employee kinds and their compensation labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// The structural kind of an employee.
///
/// The set is closed: every `match` over it is checked for exhaustiveness by
/// the compiler, and callers cannot add members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    /// An external contractor.
    Contractor,
    /// A full-time employee.
    FullTime,
    /// An intern.
    Intern,
}

impl EmployeeKind {
    /// Every kind, in sequential-match order.
    pub const ALL: [EmployeeKind; 3] = [
        EmployeeKind::Contractor,
        EmployeeKind::FullTime,
        EmployeeKind::Intern,
    ];

    /// Returns the fixed compensation label for this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_dispatch::models::EmployeeKind;
    ///
    /// assert_eq!(EmployeeKind::Contractor.compensation_label(), "$100,000");
    /// assert_eq!(EmployeeKind::FullTime.compensation_label(), "$150,000");
    /// assert_eq!(EmployeeKind::Intern.compensation_label(), "$50,000");
    /// ```
    pub const fn compensation_label(self) -> &'static str {
        match self {
            EmployeeKind::Contractor => "$100,000",
            EmployeeKind::FullTime => "$150,000",
            EmployeeKind::Intern => "$50,000",
        }
    }

    /// Returns the human-readable name a free-text type label must equal
    /// to be recognised as this kind.
    pub const fn canonical_name(self) -> &'static str {
        match self {
            EmployeeKind::Contractor => "Contractor",
            EmployeeKind::FullTime => "Full Time",
            EmployeeKind::Intern => "Intern",
        }
    }

    /// Returns the name used as the prefix of the structured rendering.
    pub const fn variant_name(self) -> &'static str {
        match self {
            EmployeeKind::Contractor => "Contractor",
            EmployeeKind::FullTime => "FullTime",
            EmployeeKind::Intern => "Intern",
        }
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Parses "Full Time", "FullTime" and "full_time" alike, ignoring case.
impl FromStr for EmployeeKind {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "contractor" => Ok(EmployeeKind::Contractor),
            "fulltime" => Ok(EmployeeKind::FullTime),
            "intern" => Ok(EmployeeKind::Intern),
            _ => Err(DispatchError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}
