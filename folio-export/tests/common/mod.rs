//! Shared test helpers.

#![allow(dead_code)]

pub mod backend;

use std::path::{Path, PathBuf};

/// Write a minimal page at `<dir>/dist/index.html` and return its path.
pub fn write_page(dir: &Path) -> PathBuf {
    let dist = dir.join("dist");
    std::fs::create_dir_all(&dist).expect("create dist");
    let page = dist.join("index.html");
    std::fs::write(&page, "<!DOCTYPE html><html><body><h1>Test</h1></body></html>")
        .expect("write page");
    page
}
