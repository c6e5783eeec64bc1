//! Site generation into an output directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::assets::write_assets;
use crate::controllers::page::PageController;
use crate::document::Document;
use crate::pages::home;

/// Paths written by a site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    pub index: PathBuf,
    pub assets: PathBuf,
}

/// Generates the complete site.
///
/// Creates `output` and `output/assets`, writes the bundled assets, runs
/// the home page's load-time initialization against a document at `url`,
/// and renders `index.html`.
///
/// # Arguments
///
/// * `output`: Output directory, created if missing
/// * `url`: Public URL of the page, used for the canonical link
/// * `year`: Copyright year shown in the footer
///
/// # Returns
///
/// Paths of the generated index page and assets directory
///
/// # Errors
///
/// Returns error if a directory cannot be created or a file cannot be
/// written.
///
/// # Examples
///
/// ```no_run
/// use aalekhan::generate_site;
/// use std::path::Path;
///
/// let site = generate_site(Path::new("dist"), "https://aalekhansoftware.com", 2026)?;
/// println!("{}", site.index.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_site(output: &Path, url: &str, year: i32) -> Result<GeneratedSite> {
    fs::create_dir_all(output).with_context(|| {
        format!("Failed to create output directory: {}", output.display())
    })?;

    let assets = output.join("assets");
    fs::create_dir_all(&assets).context("Failed to create assets directory")?;
    write_assets(&assets).context("Failed to write assets")?;

    let mut page = PageController::new(year);
    let mut document = Document::new(url);
    page.on_load(&mut document);

    let html = home::generate(&page, &document);

    let index = output.join("index.html");
    fs::write(&index, html.into_string())
        .with_context(|| format!("Failed to write home page to {}", index.display()))?;

    info!(path = %index.display(), "Generated home page");

    Ok(GeneratedSite { index, assets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_site_writes_files() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let output = dir.path().join("dist");

        // Act
        let site = generate_site(&output, "https://aalekhansoftware.com/", 2026)?;

        // Assert
        assert_eq!(site.index, output.join("index.html"));
        assert!(site.index.exists());
        assert!(site.assets.join("site.css").exists());
        assert!(site.assets.join("nav.js").exists());

        let html = fs::read_to_string(&site.index)?;
        assert!(html.contains(r#"href="https://aalekhansoftware.com/""#));
        assert!(html.contains("\u{a9} 2026"));
        Ok(())
    }

    #[test]
    fn test_generate_site_output_is_file() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let output = dir.path().join("occupied");
        fs::write(&output, "not a directory")?;

        // Act
        let result = generate_site(&output, "https://aalekhansoftware.com/", 2026);

        // Assert
        assert!(result.is_err());
        Ok(())
    }
}
