//! The export pipeline.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::backend::{PdfBackend, PdfSession};
use crate::error::{ExportError, ExportResult};
use crate::job::ExportJob;

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// File that was written.
    pub output: PathBuf,
    /// PDF size in bytes.
    pub bytes: usize,
    /// Wall time from launch to shutdown.
    pub elapsed: Duration,
}

impl ExportReport {
    /// The line printed on success.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "PDF written to {} ({} bytes)",
            self.output.display(),
            self.bytes
        )
    }
}

/// Prints one page to one PDF: launch, open, wait for idle, print, write,
/// terminate. Single attempt; the first failure ends the run.
pub struct PdfExporter<B> {
    backend: B,
    job: ExportJob,
}

impl<B: PdfBackend> PdfExporter<B> {
    /// Create an exporter for `job` using `backend`.
    #[must_use]
    pub fn new(backend: B, job: ExportJob) -> Self {
        Self { backend, job }
    }

    /// The job this exporter runs.
    #[must_use]
    pub fn job(&self) -> &ExportJob {
        &self.job
    }

    /// Run the export.
    ///
    /// The source is checked before the browser starts, so a missing page
    /// never launches a browser or creates the output file. The PDF is only
    /// written after a successful print.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's [`ExportError`].
    #[tracing::instrument(name = "export_pdf", skip(self), fields(backend = self.backend.name()))]
    pub async fn run(&self) -> ExportResult<ExportReport> {
        let started = Instant::now();
        let url = self.job.source_url()?;
        tracing::info!(%url, output = %self.job.output.display(), "exporting");

        let mut session = self.backend.launch().await?;
        let outcome = self.print_and_write(session.as_mut(), &url).await;
        let closed = session.close().await;

        let bytes = outcome?;
        if let Err(err) = closed {
            tracing::warn!(%err, "browser shutdown failed after the PDF was written");
        }

        let report = ExportReport {
            output: self.job.output.clone(),
            bytes,
            elapsed: started.elapsed(),
        };
        tracing::info!(
            bytes = report.bytes,
            elapsed_ms = u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
            "export complete"
        );
        Ok(report)
    }

    async fn print_and_write(
        &self,
        session: &mut dyn PdfSession,
        url: &url::Url,
    ) -> ExportResult<usize> {
        session.open(url, self.job.idle_timeout).await?;
        tracing::debug!("network idle");

        let pdf = session.print(&self.job.print).await?;
        if pdf.is_empty() {
            return Err(ExportError::Export("browser returned an empty PDF".to_string()));
        }

        tokio::fs::write(&self.job.output, &pdf)
            .await
            .map_err(|source| ExportError::Write {
                path: self.job.output.display().to_string(),
                source,
            })?;
        Ok(pdf.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_line_format() {
        let report = ExportReport {
            output: PathBuf::from("resume.pdf"),
            bytes: 48_213,
            elapsed: Duration::from_millis(900),
        };
        assert_eq!(report.confirmation(), "PDF written to resume.pdf (48213 bytes)");
    }
}
