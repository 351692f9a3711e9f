//! `export-pdf`: print `dist/index.html` to `resume.pdf`.

use anyhow::Context;
use clap::Parser;

use folio_export::cli::ExportCli;
use folio_export::telemetry::init_tracing;
use folio_export::{ChromeBackend, ExportJob, PdfExporter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = ExportCli::parse();
    init_tracing();

    let exporter = PdfExporter::new(ChromeBackend::new(), ExportJob::default());
    let report = exporter.run().await.context("PDF export failed")?;

    println!("{}", report.confirmation());
    Ok(())
}
