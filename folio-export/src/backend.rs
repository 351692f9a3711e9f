//! Browser backends that turn a page into PDF bytes.
//!
//! [`PdfBackend`] starts a browser and hands back a [`PdfSession`]; the
//! session opens one document, prints it and shuts the browser down. The
//! exporter drives these steps in order so the output file is written
//! before the browser terminates.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::{
    EventLifecycleEvent, NavigateParams, PrintToPdfParams, SetLifecycleEventsEnabledParams,
};
use chromiumoxide::Page;
use futures::{Stream, StreamExt};
use tokio::task::JoinHandle;
use url::Url;

use crate::error::{ExportError, ExportResult};
use crate::job::PrintOptions;

/// Lifecycle event name Chrome emits once no requests have been in flight
/// for 500 ms.
pub const NETWORK_IDLE: &str = "networkIdle";

const BEFORE_PRINT_SCRIPT: &str = "window.dispatchEvent(new Event('beforeprint'))";

/// Starts browsers.
#[async_trait]
pub trait PdfBackend: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Start an isolated browser.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Launch`] if the browser cannot be started.
    async fn launch(&self) -> ExportResult<Box<dyn PdfSession>>;
}

/// One running browser with at most one open document.
#[async_trait]
pub trait PdfSession: Send {
    /// Open `url` and wait until its network has been quiet, bounded by
    /// `idle_timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Navigation`] if the document fails to load or
    /// never goes idle.
    async fn open(&mut self, url: &Url, idle_timeout: Duration) -> ExportResult<()>;

    /// Print the open document.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Export`] if nothing is open or printing fails.
    async fn print(&mut self, options: &PrintOptions) -> ExportResult<Vec<u8>>;

    /// Terminate the browser.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Launch`] if the process cannot be shut down.
    async fn close(self: Box<Self>) -> ExportResult<()>;
}

/// One lifecycle notification, reduced to what the idle wait needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleSignal {
    /// Loader that produced the event.
    pub loader_id: String,
    /// Event name, e.g. `load` or `networkIdle`.
    pub name: String,
}

impl LifecycleSignal {
    /// Signal from raw parts.
    pub fn new(loader_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            loader_id: loader_id.into(),
            name: name.into(),
        }
    }
}

/// Wait for [`NETWORK_IDLE`] from `loader_id` (any loader when `None`).
///
/// # Errors
///
/// Returns [`ExportError::Navigation`] if the stream ends first or
/// `timeout` elapses.
pub async fn wait_for_network_idle<S>(
    events: S,
    loader_id: Option<&str>,
    url: &str,
    timeout: Duration,
) -> ExportResult<()>
where
    S: Stream<Item = LifecycleSignal>,
{
    let mut events = std::pin::pin!(events);
    let wait = async {
        while let Some(signal) = events.next().await {
            let same_loader = !loader_id.is_some_and(|id| id != signal.loader_id);
            if same_loader && signal.name == NETWORK_IDLE {
                return Ok(());
            }
        }
        Err(ExportError::navigation(url, "page closed before the network went idle"))
    };
    match tokio::time::timeout(timeout, wait).await {
        Ok(outcome) => outcome,
        Err(_) => Err(ExportError::navigation(
            url,
            format!("network still busy after {}s", timeout.as_secs_f64()),
        )),
    }
}

/// Headless Chrome through the DevTools protocol.
#[derive(Debug, Clone)]
pub struct ChromeBackend {
    executable: Option<PathBuf>,
    sandbox: bool,
}

impl Default for ChromeBackend {
    fn default() -> Self {
        Self {
            executable: None,
            sandbox: true,
        }
    }
}

impl ChromeBackend {
    /// Backend that locates Chrome on its own.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific Chrome or Chromium binary.
    #[must_use]
    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    /// Disable Chrome's sandbox, as containers running as root require.
    #[must_use]
    pub fn without_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }

    fn config(&self) -> ExportResult<BrowserConfig> {
        let mut builder = BrowserConfig::builder();
        if let Some(path) = &self.executable {
            builder = builder.chrome_executable(path);
        }
        if !self.sandbox {
            builder = builder.no_sandbox();
        }
        builder.build().map_err(ExportError::Launch)
    }
}

#[async_trait]
impl PdfBackend for ChromeBackend {
    fn name(&self) -> &'static str {
        "chrome"
    }

    async fn launch(&self) -> ExportResult<Box<dyn PdfSession>> {
        let (browser, mut handler) = Browser::launch(self.config()?)
            .await
            .map_err(|e| ExportError::Launch(e.to_string()))?;
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(err) = event {
                    tracing::debug!(%err, "devtools handler error");
                }
            }
        });
        tracing::debug!("browser started");
        Ok(Box::new(ChromeSession {
            browser,
            handler,
            page: None,
        }))
    }
}

struct ChromeSession {
    browser: Browser,
    handler: JoinHandle<()>,
    page: Option<Page>,
}

#[async_trait]
impl PdfSession for ChromeSession {
    async fn open(&mut self, url: &Url, idle_timeout: Duration) -> ExportResult<()> {
        let failed = |e: chromiumoxide::error::CdpError| ExportError::navigation(url.as_str(), e);

        let page = self.browser.new_page("about:blank").await.map_err(failed)?;
        page.execute(SetLifecycleEventsEnabledParams::new(true))
            .await
            .map_err(failed)?;
        let events = page
            .event_listener::<EventLifecycleEvent>()
            .await
            .map_err(failed)?
            .map(|event| LifecycleSignal::new(event.loader_id.inner().clone(), event.name.clone()));

        let navigation = page
            .execute(NavigateParams::new(url.as_str()))
            .await
            .map_err(failed)?;
        if let Some(error) = &navigation.result.error_text {
            return Err(ExportError::navigation(url.as_str(), error));
        }
        let loader_id = navigation.result.loader_id.as_ref().map(|id| id.inner().as_str());
        tracing::debug!(%url, loader = ?loader_id, "navigated, waiting for network idle");

        wait_for_network_idle(events, loader_id, url.as_str(), idle_timeout).await?;
        self.page = Some(page);
        Ok(())
    }

    async fn print(&mut self, options: &PrintOptions) -> ExportResult<Vec<u8>> {
        let page = self
            .page
            .as_ref()
            .ok_or_else(|| ExportError::Export("no document open".to_string()))?;
        // printToPDF does not fire print events; animated content settles on this one.
        page.evaluate(BEFORE_PRINT_SCRIPT)
            .await
            .map_err(|e| ExportError::Export(format!("beforeprint dispatch failed: {e}")))?;
        let params = PrintToPdfParams {
            paper_width: Some(options.paper.width_in()),
            paper_height: Some(options.paper.height_in()),
            margin_top: Some(options.margins.top),
            margin_right: Some(options.margins.right),
            margin_bottom: Some(options.margins.bottom),
            margin_left: Some(options.margins.left),
            print_background: Some(options.print_background),
            ..PrintToPdfParams::default()
        };
        page.pdf(params)
            .await
            .map_err(|e| ExportError::Export(e.to_string()))
    }

    async fn close(mut self: Box<Self>) -> ExportResult<()> {
        self.page = None;
        self.browser
            .close()
            .await
            .map_err(|e| ExportError::Launch(format!("close failed: {e}")))?;
        if let Err(err) = self.browser.wait().await {
            tracing::warn!(%err, "browser process did not exit cleanly");
        }
        self.handler.abort();
        tracing::debug!("browser closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn signals(items: &[(&str, &str)]) -> Vec<LifecycleSignal> {
        items
            .iter()
            .map(|(loader, name)| LifecycleSignal::new(*loader, *name))
            .collect()
    }

    #[tokio::test]
    async fn idle_from_navigated_loader_completes() {
        let events = stream::iter(signals(&[
            ("blank", "networkIdle"),
            ("doc", "init"),
            ("doc", "load"),
            ("doc", "networkAlmostIdle"),
            ("doc", "networkIdle"),
        ]));
        wait_for_network_idle(events, Some("doc"), "file:///x", Duration::from_secs(1))
            .await
            .expect("idle");
    }

    #[tokio::test]
    async fn idle_from_other_loader_is_ignored() {
        let events = stream::iter(signals(&[("blank", "networkIdle"), ("doc", "load")]));
        let err = wait_for_network_idle(events, Some("doc"), "file:///x", Duration::from_secs(1))
            .await
            .expect_err("never idle");
        assert!(matches!(err, ExportError::Navigation { .. }));
    }

    #[tokio::test]
    async fn unknown_loader_accepts_any_idle() {
        let events = stream::iter(signals(&[("a", "load"), ("b", "networkIdle")]));
        wait_for_network_idle(events, None, "file:///x", Duration::from_secs(1))
            .await
            .expect("idle");
    }

    #[tokio::test]
    async fn silent_page_times_out() {
        let events = stream::pending::<LifecycleSignal>();
        let err = wait_for_network_idle(events, Some("doc"), "file:///x", Duration::from_millis(50))
            .await
            .expect_err("timeout");
        assert!(err.to_string().contains("network still busy after 0.05s"));
    }

    #[test]
    fn chrome_backend_builds_config_options() {
        let backend = ChromeBackend::new().without_sandbox();
        assert!(!backend.sandbox);
        assert_eq!(backend.name(), "chrome");
    }
}
