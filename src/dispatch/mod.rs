//! Compensation dispatch.
//!
//! Two strategies derive a compensation label from an employee. The
//! sequential match reads the free-text type label and silently yields
//! nothing when it names no kind. The exhaustive match reads the structural
//! kind and always yields a label. Prefer the exhaustive match.

mod comparison;
mod exhaustive;
mod sequential;
mod strategy;

pub use comparison::{StrategyComparison, compare_strategies};
pub use exhaustive::exhaustive_match;
pub use sequential::{sequential_kind, sequential_match};
pub use strategy::{
    CompensationStrategy, ExhaustiveMatch, Selection, SequentialMatch, print_employee_salary,
    salary_line,
};
