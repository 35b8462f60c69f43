//! Wayfinder CLI library.
//!
//! This crate provides command-line interface utilities for the Wayfinder
//! route planner: map source resolution, command handlers, terminal styling
//! and output formatting.

pub mod commands;
pub mod output;
pub mod terminal;
