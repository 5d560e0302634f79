//! Common utilities for the quire paginator.
//!
//! This crate provides shared infrastructure used by the other workspace
//! members:
//! - **Warning System** - colored terminal output for recoverable faults

pub mod warning;
