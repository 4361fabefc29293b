//! Export of computed layouts to image formats.
//!
//! # Pipeline Position
//!
//! ```text
//! Plan TOML
//!     ↓ parse
//! Graph / VectorGraph
//!     ↓ layout (grid or force engine)
//! GridLayout / ForceLayout
//!     ↓ export (this module)
//! SVG text / PNG bytes
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG documents via [`svg::Svg`]
//! - `png` - rasterization of the SVG output (requires the `png` feature)
//!
//! Export operations return [`Error`], which converts into
//! [`FloorplanError::Export`](crate::FloorplanError::Export) at the crate
//! boundary.

pub mod svg;

#[cfg(feature = "png")]
pub mod png;

use std::{fs, path::Path};

use log::{error, info};

/// Writes rendered output to `path`, replacing any existing file.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<(), Error> {
    info!(path = path.display().to_string(), bytes = contents.len(); "Writing output file");
    fs::write(path, contents).map_err(|err| {
        error!(path = path.display().to_string(), err:err; "Failed to write output file");
        Error::Io(err)
    })
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or encoding failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
