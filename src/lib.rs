//! Employee classification and compensation dispatch.
//!
//! This crate models a closed set of employee kinds, each bound to a fixed
//! compensation label, and offers two dispatch strategies for deriving that
//! label from an employee: a sequential match over the free-text type label
//! and an exhaustive match over the structural kind.

#![warn(missing_docs)]

pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
