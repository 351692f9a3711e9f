//! Scripted PDF backend for pipeline tests.
//!
//! Records every step it is asked to perform and can be told to fail at
//! any of them.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use folio_export::{ExportError, ExportResult, PdfBackend, PdfSession, PrintOptions};
use url::Url;

/// Step at which the fake fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Launch,
    Open,
    Print,
}

/// One recorded call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Launch,
    Open { url: Url, idle_timeout: Duration },
    Print(PrintOptions),
    /// Whether the output file existed when the browser was closed.
    Close { output_written: bool },
}

/// Fake backend returning canned bytes.
#[derive(Clone)]
pub struct FakeBackend {
    calls: Arc<Mutex<Vec<Call>>>,
    fail_at: Option<FailAt>,
    pdf: Vec<u8>,
    output: PathBuf,
}

impl FakeBackend {
    /// Backend that succeeds and reports on `output` at shutdown.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_at: None,
            pdf: b"%PDF-1.7\n%fake\n%%EOF\n".to_vec(),
            output: output.into(),
        }
    }

    /// Fail at `step`.
    pub fn failing_at(mut self, step: FailAt) -> Self {
        self.fail_at = Some(step);
        self
    }

    /// Return `pdf` from print.
    pub fn returning(mut self, pdf: Vec<u8>) -> Self {
        self.pdf = pdf;
        self
    }

    /// Bytes print returns.
    pub fn pdf(&self) -> &[u8] {
        &self.pdf
    }

    /// Calls so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl PdfBackend for FakeBackend {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn launch(&self) -> ExportResult<Box<dyn PdfSession>> {
        self.record(Call::Launch);
        if self.fail_at == Some(FailAt::Launch) {
            return Err(ExportError::Launch("no browser installed".to_string()));
        }
        Ok(Box::new(FakeSession {
            backend: self.clone(),
            opened: false,
        }))
    }
}

struct FakeSession {
    backend: FakeBackend,
    opened: bool,
}

#[async_trait]
impl PdfSession for FakeSession {
    async fn open(&mut self, url: &Url, idle_timeout: Duration) -> ExportResult<()> {
        self.backend.record(Call::Open {
            url: url.clone(),
            idle_timeout,
        });
        if self.backend.fail_at == Some(FailAt::Open) {
            return Err(ExportError::navigation(url.as_str(), "network still busy"));
        }
        self.opened = true;
        Ok(())
    }

    async fn print(&mut self, options: &PrintOptions) -> ExportResult<Vec<u8>> {
        self.backend.record(Call::Print(options.clone()));
        if !self.opened {
            return Err(ExportError::Export("no document open".to_string()));
        }
        if self.backend.fail_at == Some(FailAt::Print) {
            return Err(ExportError::Export("renderer crashed".to_string()));
        }
        Ok(self.backend.pdf.clone())
    }

    async fn close(self: Box<Self>) -> ExportResult<()> {
        let output_written = self.backend.output.exists();
        self.backend.record(Call::Close { output_written });
        Ok(())
    }
}
