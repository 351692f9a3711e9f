//! Command-line interfaces of the two binaries.

use std::path::PathBuf;

use clap::Parser;

/// `export-pdf`: prints `dist/index.html` to `resume.pdf`.
///
/// Takes no options; both paths are fixed and resolved against the working
/// directory.
#[derive(Debug, Clone, Parser)]
#[command(name = "export-pdf")]
#[command(about = "Print dist/index.html to resume.pdf (A4, no margins) with headless Chrome")]
#[command(version)]
pub struct ExportCli {}

/// `build-page`: composes the résumé page for the exporter and the browser.
#[derive(Debug, Clone, Parser)]
#[command(name = "build-page")]
#[command(about = "Write the composed résumé page to <out-dir>/index.html")]
#[command(version)]
pub struct BuildPageCli {
    /// Directory to write `index.html` into.
    #[arg(long, default_value = "dist")]
    pub out_dir: PathBuf,

    /// Leave out the script and animation descriptors.
    #[arg(long)]
    pub static_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_cli_accepts_no_arguments() {
        assert!(ExportCli::try_parse_from(["export-pdf"]).is_ok());
        assert!(ExportCli::try_parse_from(["export-pdf", "out.pdf"]).is_err());
        assert!(ExportCli::try_parse_from(["export-pdf", "--output", "x"]).is_err());
    }

    #[test]
    fn build_page_defaults_to_dist() {
        let cli = BuildPageCli::try_parse_from(["build-page"]).expect("parse");
        assert_eq!(cli.out_dir, PathBuf::from("dist"));
        assert!(!cli.static_page);

        let cli = BuildPageCli::try_parse_from(["build-page", "--out-dir", "public", "--static-page"])
            .expect("parse");
        assert_eq!(cli.out_dir, PathBuf::from("public"));
        assert!(cli.static_page);
    }
}
