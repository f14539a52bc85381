use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::loader::{DataLoadError, load_file};
use super::model::OfferDataset;

/// A loaded dataset together with the file it came from.
///
/// Created once before the first query and handed out by reference. The
/// snapshot only changes through [`DatasetHandle::reload_if_changed`], and
/// only when the file's modification time moved.
#[derive(Debug)]
pub struct DatasetHandle {
    path: PathBuf,
    modified: Option<SystemTime>,
    dataset: OfferDataset,
}

impl DatasetHandle {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DataLoadError> {
        let path = path.into();
        let modified = modified_time(&path);
        let dataset = load_file(&path)?;
        log::info!(
            "Loaded {} offers ({} courses) from {}",
            dataset.len(),
            dataset.courses().len(),
            path.display()
        );
        Ok(Self {
            path,
            modified,
            dataset,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dataset(&self) -> &OfferDataset {
        &self.dataset
    }

    /// Whether the file on disk no longer matches the loaded snapshot.
    pub fn is_stale(&self) -> bool {
        modified_time(&self.path) != self.modified
    }

    /// Reload when stale. Returns whether a new snapshot was taken; on error
    /// the previous snapshot stays in place.
    pub fn reload_if_changed(&mut self) -> Result<bool, DataLoadError> {
        if !self.is_stale() {
            log::debug!("{} unchanged, keeping cached dataset", self.path.display());
            return Ok(false);
        }
        *self = Self::open(self.path.clone())?;
        Ok(true)
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
