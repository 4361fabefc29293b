//! Error adapter for converting FloorplanError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Plan errors that
//! carry a byte span are rendered with a labelled snippet of the plan file.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use floorplan::FloorplanError;

/// Adapter for a plan error with its source text.
pub struct PlanDiagnostic<'a> {
    message: &'a str,
    span: Option<&'a Range<usize>>,
    src: &'a str,
}

impl<'a> PlanDiagnostic<'a> {
    /// Create a new plan diagnostic adapter.
    pub fn new(message: &'a str, span: Option<&'a Range<usize>>, src: &'a str) -> Self {
        Self { message, span, src }
    }
}

impl fmt::Debug for PlanDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanDiagnostic")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for PlanDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PlanDiagnostic<'_> {}

impl MietteDiagnostic for PlanDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("floorplan::plan"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "a plan lists rooms as [[room]] tables with an `id` and optional `adjacent` names",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        let label = LabeledSpan::new_primary_with_span(
            Some(self.message.to_string()),
            span_to_miette(span),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-plan [`FloorplanError`] variants.
///
/// This adapter handles errors without source locations, such as I/O,
/// input, configuration and export errors.
pub struct ErrorAdapter<'a>(pub &'a FloorplanError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FloorplanError::Io(_) => "floorplan::io",
            FloorplanError::Plan { .. } => "floorplan::plan",
            FloorplanError::InvalidInput(_) => "floorplan::input",
            FloorplanError::Config(_) => "floorplan::config",
            FloorplanError::Export(_) => "floorplan::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            FloorplanError::InvalidInput(_) => Some(Box::new(
                "the grid engine needs at least one room, the force engine at least one adjacency",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A plan error with source location information.
    Plan(PlanDiagnostic<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Plan(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Plan(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Plan(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Plan(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Plan(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Plan(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a byte range into a miette [`SourceSpan`].
fn span_to_miette(span: &Range<usize>) -> SourceSpan {
    SourceSpan::new(span.start.into(), span.len())
}

/// Convert a [`FloorplanError`] into a list of reportable errors.
pub fn to_reportables(err: &FloorplanError) -> Vec<Reportable<'_>> {
    match err {
        FloorplanError::Plan { message, span, src } => vec![Reportable::Plan(
            PlanDiagnostic::new(message, span.as_ref(), src),
        )],
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
