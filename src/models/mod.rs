//! The employee variant model.
//!
//! This module contains the closed kind set, the employee sum type and the
//! formatter that renders employees for display.

mod employee;
mod kind;
mod render;

pub use employee::{Employee, EmployeeDetails};
pub use kind::EmployeeKind;
pub use render::{EmployeeFormatter, RenderStyle, render};
