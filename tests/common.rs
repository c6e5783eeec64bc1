//! Shared test utilities for integration tests.
//!
//! Provides region layouts and output helpers used across multiple test
//! files.

#![allow(dead_code)]

use aalekhan::{HitMap, Rect, Region};
use anyhow::Result;
use std::path::Path;

/// Desktop header layout: a full-width bar with the menu drawer in the
/// middle, the solutions dropdown hanging below it and the toggle button at
/// the right edge.
pub fn desktop_hit_map() -> HitMap {
    HitMap::default()
        .with(Region::HeaderRoot, Rect::new(0.0, 0.0, 1280.0, 80.0))
        .with(Region::NavMenu, Rect::new(400.0, 0.0, 700.0, 80.0))
        .with(Region::NavDropdown, Rect::new(520.0, 60.0, 300.0, 420.0))
        .with(Region::MenuButton, Rect::new(1200.0, 20.0, 40.0, 40.0))
}

/// Reads a generated file as a string.
///
/// # Errors
///
/// Returns error if the file cannot be read
pub fn read(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Writes a replay script to `dir` and returns its path.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_script(dir: &Path, name: &str, json: &str) -> Result<std::path::PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, json)?;
    Ok(path)
}
