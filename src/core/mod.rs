//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Issue/report model shared by the checker and the reporter
//! - Rendering functions for text and JSON output
//! - Path normalization and resolution utilities
//! - Target string utilities (URI scheme, percent-decoding)
//! - Text file reading

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
