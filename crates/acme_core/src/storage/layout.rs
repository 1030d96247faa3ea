//! `.acme/` directory layout.
//!
//! - `theme.db` + WAL: key-value store holding the persisted theme.
//! - `env`: optional env file loaded by the CLI.

use std::path::{Path, PathBuf};

use anyhow::Context;

use acme_constant::app::THEME_DB;

use crate::error::Result;

/// Ensures `data_dir` exists; returns the path of `theme.db` inside it.
pub fn ensure_data_dir_at(data_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("create data dir {}", data_dir.display()))?;
    Ok(data_dir.join(THEME_DB))
}

#[cfg(test)]
mod tests {
    use acme_constant::app::DATA_DIR;

    use super::*;

    #[test]
    fn test_ensure_data_dir_creates_layout() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = ensure_data_dir_at(&dir.path().join(DATA_DIR)).unwrap();
        assert_eq!(db_path, dir.path().join(DATA_DIR).join(THEME_DB));
        assert!(dir.path().join(DATA_DIR).is_dir());
    }
}
