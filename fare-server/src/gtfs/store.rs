//! Reloadable handle to the loaded GTFS tables.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use super::error::GtfsError;
use super::load::load_dir;
use super::tables::GtfsTables;

/// Shared, reloadable access to the GTFS tables.
///
/// Handlers take a cheap `Arc` snapshot via [`GtfsStore::get`] and work
/// against that for the whole request, so a concurrent reload can never
/// change the data mid-request. `None` means the tables failed to load
/// and have not been successfully reloaded since.
#[derive(Clone)]
pub struct GtfsStore {
    inner: Arc<RwLock<Option<Arc<GtfsTables>>>>,
    dir: PathBuf,
}

impl GtfsStore {
    /// Load tables from `dir` and wrap them in a store.
    pub fn load(dir: impl Into<PathBuf>) -> Result<Self, GtfsError> {
        let dir = dir.into();
        let tables = load_dir(&dir)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(Some(Arc::new(tables)))),
            dir,
        })
    }

    /// Create a store with no data yet.
    ///
    /// Used when the initial load fails: the service still starts and
    /// answers health checks, and a later [`GtfsStore::reload`] can
    /// bring the data up.
    pub fn empty(dir: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            dir: dir.into(),
        }
    }

    /// Take a snapshot of the current tables, if loaded.
    pub async fn get(&self) -> Option<Arc<GtfsTables>> {
        let guard = self.inner.read().await;
        guard.clone()
    }

    /// Reload the tables from the data directory, replacing the
    /// snapshot wholesale.
    ///
    /// On failure the existing snapshot is preserved and the error is
    /// returned. Returns the number of stops in the new snapshot.
    pub async fn reload(&self) -> Result<usize, GtfsError> {
        let tables = load_dir(&self.dir)?;
        let count = tables.stops.len();

        let mut guard = self.inner.write().await;
        *guard = Some(Arc::new(tables));

        info!(stops = count, dir = %self.dir.display(), "reloaded GTFS tables");
        Ok(count)
    }

    /// The data directory this store loads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
