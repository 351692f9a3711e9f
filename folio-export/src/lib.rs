//! # Folio Export
//!
//! Prints the pre-rendered résumé page to an A4 PDF with zero margins and
//! backgrounds included.
//!
//! ```text
//! dist/index.html ──► launch ──► open file:// ──► networkIdle ──► print ──► resume.pdf ──► close
//! ```
//!
//! The browser sits behind [`PdfBackend`]; [`ChromeBackend`] drives headless
//! Chrome over the DevTools protocol. Also home to the `build-page` binary,
//! which writes the page this crate prints.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod cli;
pub mod error;
pub mod exporter;
pub mod job;
pub mod telemetry;

pub use backend::{ChromeBackend, LifecycleSignal, PdfBackend, PdfSession};
pub use error::{ExportError, ExportResult};
pub use exporter::{ExportReport, PdfExporter};
pub use job::{ExportJob, Margins, PaperFormat, PrintOptions, OUTPUT_PATH, SOURCE_PATH};
