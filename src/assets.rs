//! Static asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::debug;

const BASE: &str = include_str!("../assets/base.css");
const HEADER: &str = include_str!("../assets/components/header.css");
const CARDS: &str = include_str!("../assets/components/cards.css");
const CONTACT: &str = include_str!("../assets/components/contact.css");
const FOOTER: &str = include_str!("../assets/components/footer.css");

const HOME_PAGE: &str = include_str!("../assets/page-home.css");

const NAV_SCRIPT: &str = include_str!("../assets/nav.js");

/// Writes the bundled stylesheet and the navigation script to `assets_dir`.
pub fn write_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(
        assets_dir,
        "site.css",
        &[BASE, HEADER, CARDS, CONTACT, FOOTER, HOME_PAGE],
    )?;
    write_bundled(assets_dir, "nav.js", &[NAV_SCRIPT])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let content = parts.join("\n");
    fs::write(dir.join(name), content)
        .with_context(|| format!("Failed to write asset: {}", name))?;
    debug!(asset = name, "Wrote asset");
    Ok(())
}
