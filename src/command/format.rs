use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::document;
use crate::error::NormalizeError;

/// Sort the mapping override of one config file and write it back in place.
#[derive(Debug)]
pub struct Format {
    pub path: PathBuf,
}

impl Format {
    pub fn run(self) -> Result<()> {
        let text = fs::read(&self.path).map_err(|source| NormalizeError::NotFound {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = text.len(), "Read config");

        // Nothing is written unless the whole document normalizes.
        let s = document::normalize(&text).map_err(|e| e.at(&self.path))?;

        fs::write(&self.path, &s).map_err(|source| NormalizeError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = s.len(), "Wrote file");
        Ok(())
    }
}
