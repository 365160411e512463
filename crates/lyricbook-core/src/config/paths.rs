//! Default file locations

use std::path::PathBuf;

const APP_DIR: &str = "lyricbook";

/// `<config dir>/lyricbook/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR).join("config.json"))
}

/// `<data dir>/lyricbook/catalog.json`
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(APP_DIR).join("catalog.json"))
}
