//! `build-page`: write the composed résumé page to `dist/index.html`.

use anyhow::Context;
use clap::Parser;

use folio_export::cli::BuildPageCli;
use folio_export::telemetry::init_tracing;
use folio_renderer::content::resume;
use folio_renderer::{PageConfig, PageRenderer};

fn main() -> anyhow::Result<()> {
    let cli = BuildPageCli::parse();
    init_tracing();

    let config = if cli.static_page {
        PageConfig::static_page()
    } else {
        PageConfig::default()
    };
    let path = PageRenderer::new(config)
        .write_to(&resume(), &cli.out_dir)
        .with_context(|| format!("failed to build page in {}", cli.out_dir.display()))?;

    println!("Page written to {}", path.display());
    Ok(())
}
