//! Metro farebox.
//!
//! Computes the charge for each tap in a tap log by folding it through an
//! ordered chain of independently toggleable fare rules.

pub mod config;
pub mod domain;
pub mod engine;
pub mod report;
pub mod rules;
pub mod taplog;
