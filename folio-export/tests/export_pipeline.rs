//! Integration tests for the export pipeline (folio-export).
//!
//! Drives `PdfExporter` with a scripted backend: step order, print settings,
//! and what ends up on disk when a step fails.

mod common;

use std::time::Duration;

use common::backend::{Call, FailAt, FakeBackend};
use common::write_page;
use folio_export::{ExportError, ExportJob, Margins, PaperFormat, PdfExporter};

// ==========================================================================
// Success
// ==========================================================================

#[tokio::test]
async fn test_export_runs_steps_in_order_and_writes_before_close() {
    let dir = tempfile::tempdir().expect("tempdir");
    let page = write_page(dir.path());
    let output = dir.path().join("resume.pdf");
    let backend = FakeBackend::new(&output);
    let job = ExportJob::new(&page, &output).with_idle_timeout(Duration::from_secs(5));

    let report = PdfExporter::new(backend.clone(), job)
        .run()
        .await
        .expect("export");

    assert_eq!(std::fs::read(&output).expect("read pdf"), backend.pdf());
    assert_eq!(report.bytes, backend.pdf().len());
    assert_eq!(report.output, output);

    let calls = backend.calls();
    assert_eq!(calls.len(), 4, "{calls:?}");
    assert_eq!(calls[0], Call::Launch);
    match &calls[1] {
        Call::Open { url, idle_timeout } => {
            assert_eq!(url.scheme(), "file");
            assert!(url.path().ends_with("/dist/index.html"));
            assert_eq!(*idle_timeout, Duration::from_secs(5));
        }
        other => panic!("expected open, got {other:?}"),
    }
    match &calls[2] {
        Call::Print(options) => {
            assert_eq!(options.paper, PaperFormat::A4);
            assert_eq!(options.margins, Margins::zero());
            assert!(options.print_background);
        }
        other => panic!("expected print, got {other:?}"),
    }
    assert_eq!(calls[3], Call::Close { output_written: true });
}

#[tokio::test]
async fn test_confirmation_names_output_and_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    let page = write_page(dir.path());
    let output = dir.path().join("resume.pdf");
    let backend = FakeBackend::new(&output).returning(vec![b'%'; 1234]);

    let report = PdfExporter::new(backend, ExportJob::new(&page, &output))
        .run()
        .await
        .expect("export");

    assert_eq!(
        report.confirmation(),
        format!("PDF written to {} (1234 bytes)", output.display())
    );
}

#[tokio::test]
async fn test_existing_output_is_overwritten() {
    let dir = tempfile::tempdir().expect("tempdir");
    let page = write_page(dir.path());
    let output = dir.path().join("resume.pdf");
    std::fs::write(&output, b"stale").expect("seed output");

    PdfExporter::new(FakeBackend::new(&output), ExportJob::new(&page, &output))
        .run()
        .await
        .expect("export");

    assert!(std::fs::read(&output).expect("read").starts_with(b"%PDF"));
}

// ==========================================================================
// Failures
// ==========================================================================

#[tokio::test]
async fn test_missing_source_fails_before_launch() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("resume.pdf");
    let backend = FakeBackend::new(&output);
    let job = ExportJob::new(dir.path().join("dist/index.html"), &output);

    let err = PdfExporter::new(backend.clone(), job)
        .run()
        .await
        .expect_err("missing source");

    assert!(matches!(err, ExportError::SourceMissing { .. }));
    assert!(backend.calls().is_empty());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_launch_failure_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let page = write_page(dir.path());
    let output = dir.path().join("resume.pdf");
    let backend = FakeBackend::new(&output).failing_at(FailAt::Launch);

    let err = PdfExporter::new(backend.clone(), ExportJob::new(&page, &output))
        .run()
        .await
        .expect_err("launch");

    assert!(matches!(err, ExportError::Launch(_)));
    assert_eq!(backend.calls(), vec![Call::Launch]);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_navigation_failure_closes_browser_and_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let page = write_page(dir.path());
    let output = dir.path().join("resume.pdf");
    let backend = FakeBackend::new(&output).failing_at(FailAt::Open);

    let err = PdfExporter::new(backend.clone(), ExportJob::new(&page, &output))
        .run()
        .await
        .expect_err("navigation");

    assert!(matches!(err, ExportError::Navigation { .. }));
    assert!(!output.exists());
    assert_eq!(
        backend.calls().last(),
        Some(&Call::Close { output_written: false })
    );
}

#[tokio::test]
async fn test_print_failure_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let page = write_page(dir.path());
    let output = dir.path().join("resume.pdf");
    let backend = FakeBackend::new(&output).failing_at(FailAt::Print);

    let err = PdfExporter::new(backend, ExportJob::new(&page, &output))
        .run()
        .await
        .expect_err("print");

    assert!(matches!(err, ExportError::Export(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_empty_pdf_is_an_export_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let page = write_page(dir.path());
    let output = dir.path().join("resume.pdf");
    let backend = FakeBackend::new(&output).returning(Vec::new());

    let err = PdfExporter::new(backend, ExportJob::new(&page, &output))
        .run()
        .await
        .expect_err("empty");

    assert!(matches!(err, ExportError::Export(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_a_write_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let page = write_page(dir.path());
    let output = dir.path().join("missing-dir").join("resume.pdf");
    let backend = FakeBackend::new(&output);

    let err = PdfExporter::new(backend.clone(), ExportJob::new(&page, &output))
        .run()
        .await
        .expect_err("write");

    assert!(matches!(err, ExportError::Write { .. }));
    assert_eq!(
        backend.calls().last(),
        Some(&Call::Close { output_written: false })
    );
}
