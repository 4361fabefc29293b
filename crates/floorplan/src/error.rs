//! Error types for floor plan operations.
//!
//! This module provides the main error type [`FloorplanError`] which wraps
//! the error conditions that can occur while parsing plans, computing
//! layouts and exporting images.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for floor plan operations.
///
/// # Diagnostic Variants
///
/// The `Plan` variant keeps the plan source and, when the parser reported
/// one, the byte span of the offending text so front ends can show a
/// labelled snippet.
#[derive(Debug, Error)]
pub enum FloorplanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Plan error: {message}")]
    Plan {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for FloorplanError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl FloorplanError {
    /// Create a new `Plan` error with the associated source text.
    pub fn new_plan_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Plan {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}
