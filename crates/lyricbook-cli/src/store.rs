//! Catalog persistence for the command-line host
//!
//! The catalog is kept as one pretty-printed JSON document.

use std::path::Path;

use lyricbook_core::{Catalog, Result};
use tracing::debug;

/// Load the catalog at `path`, or an empty one if the file does not exist yet
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        debug!("No catalog at {}, starting empty", path.display());
        return Ok(Catalog::new());
    }

    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write the catalog to `path`, creating parent directories
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, content)?;
    debug!("Saved {} albums to {}", catalog.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyricbook_core::{Album, Song};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let catalog = load_catalog(&dir.path().join("catalog.json")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("catalog.json");

        let mut catalog = Catalog::new();
        let mut album = Album::new("The Day");
        album.add_song(Song::new("Freely", "2015/9/7"));
        catalog.add_album(album);

        save_catalog(&path, &catalog).unwrap();
        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_catalog(&path).is_err());
    }
}
