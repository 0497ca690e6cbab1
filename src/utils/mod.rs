//! Utility functions and helpers.
//!
//! This module contains the size formatting helpers used by the report
//! printer.

pub mod size;

pub use size::{SizeUnit, format_size, scale_size};
