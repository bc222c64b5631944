use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenError;

/// One generated file: where it goes and its full contents.
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

impl Artifact {
    pub fn new(path: &Path, contents: String) -> Self {
        Artifact {
            path: path.to_path_buf(),
            contents,
        }
    }

    /// Overwrites the target, creating parent directories as needed.
    pub fn write(&self) -> Result<(), GenError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| GenError::io(parent, err))?;
            }
        }
        fs::write(&self.path, &self.contents).map_err(|err| GenError::io(&self.path, err))?;
        info!(
            "Wrote '{}' ({} bytes)",
            self.path.display(),
            self.contents.len()
        );
        Ok(())
    }

    /// Whether the file on disk already holds exactly these contents.
    pub fn is_current(&self) -> bool {
        fs::read(&self.path).is_ok_and(|existing| existing == self.contents.as_bytes())
    }
}

/// Writes every artifact, only after all of them have been rendered.
pub fn write_all(artifacts: &[Artifact]) -> Result<(), GenError> {
    for artifact in artifacts {
        artifact.write()?;
    }
    Ok(())
}

/// Fails with the list of artifacts that are missing or differ on disk.
pub fn check_all(artifacts: &[Artifact]) -> Result<(), GenError> {
    let stale: Vec<PathBuf> = artifacts
        .iter()
        .filter(|artifact| !artifact.is_current())
        .map(|artifact| artifact.path.clone())
        .collect();

    if stale.is_empty() {
        info!("{} generated file(s) up to date", artifacts.len());
        Ok(())
    } else {
        Err(GenError::Stale(stale))
    }
}
