//! By-path dataset cache.
//!
//! Repeated selections of the same source must not re-parse the file; the
//! cache has no invalidation beyond process lifetime.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::dataset::{load_dataset, Dataset};
use crate::error::StoreError;

#[derive(Debug, Clone, Default)]
pub struct DatasetCache {
    inner: Arc<Mutex<HashMap<PathBuf, Arc<Dataset>>>>,
}

impl DatasetCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, loading it on first access.
    ///
    /// The lock is held across the load so two concurrent first accesses
    /// cannot parse the same file twice.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from [`load_dataset`]; failed loads are not
    /// cached, so a later request retries.
    ///
    /// # Panics
    ///
    /// Panics if the cache mutex was poisoned by a panicking thread.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Dataset>, StoreError> {
        let mut cache = self.inner.lock().expect("dataset cache mutex poisoned");
        if let Some(dataset) = cache.get(path) {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load_dataset(path)?);
        cache.insert(path.to_path_buf(), Arc::clone(&dataset));
        tracing::debug!(path = %path.display(), rows = dataset.rows.len(), "dataset cached");
        Ok(dataset)
    }
}
