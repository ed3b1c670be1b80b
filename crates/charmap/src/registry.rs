//! Lazily built, overridable default character map.
//!
//! [`CharMapRegistry`] owns the "current default" map used whenever a caller
//! does not pass one explicitly. It is built on first use from an injected
//! loader, can be replaced with [`set`](CharMapRegistry::set), and returns to
//! the loader's table on [`reset`](CharMapRegistry::reset).
//!
//! Callers never see the live table: [`get`](CharMapRegistry::get) hands out
//! a clone, so mutating the result has no effect on later lookups.
//!
//! The process-wide instance behind [`global`] loads the bundled table.
//! Tests and embedders that need isolation build their own registry instead.

use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::error::CharMapError;
use crate::map::CharMap;

/// Produces the default table for a registry.
pub type CharMapLoader = Box<dyn Fn() -> Result<CharMap, CharMapError> + Send + Sync>;

/// Thread-safe holder of the default [`CharMap`].
pub struct CharMapRegistry {
    loader: CharMapLoader,
    current: RwLock<Option<CharMap>>,
}

impl CharMapRegistry {
    /// Creates a registry that builds its default table with `loader`.
    ///
    /// The loader runs lazily: on the first [`get`](Self::get) and on every
    /// [`reset`](Self::reset).
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<CharMap, CharMapError> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            current: RwLock::new(None),
        }
    }

    /// Registry backed by the table bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(CharMap::bundled)
    }

    /// Registry whose default table is a fixed in-memory map.
    pub fn from_map(map: CharMap) -> Self {
        Self::new(move || Ok(map.clone()))
    }

    /// Returns a private copy of the current default map, building it first
    /// if needed.
    ///
    /// Concurrent first callers serialize on the write lock, so the loader
    /// runs once and everyone observes the same fully built table. A failed
    /// build is not cached; the next call tries again.
    pub fn get(&self) -> Result<CharMap, CharMapError> {
        if let Some(map) = self.read().as_ref() {
            return Ok(map.clone());
        }

        let mut guard = self.write();
        if let Some(map) = guard.as_ref() {
            return Ok(map.clone());
        }

        let map = self.load()?;
        debug!(entries = map.len(), "charmap_built");
        *guard = Some(map.clone());
        Ok(map)
    }

    /// Replaces the default map for all subsequent [`get`](Self::get) calls.
    pub fn set(&self, map: CharMap) {
        debug!(entries = map.len(), "charmap_override_installed");
        *self.write() = Some(map);
    }

    /// Drops any override and rebuilds the table from the loader.
    ///
    /// On failure the registry is left empty, so the next
    /// [`get`](Self::get) retries the loader rather than serving a stale
    /// override.
    pub fn reset(&self) -> Result<(), CharMapError> {
        let mut guard = self.write();
        *guard = None;
        let map = self.load()?;
        debug!(entries = map.len(), "charmap_reset");
        *guard = Some(map);
        Ok(())
    }

    /// Whether a table is currently cached (built or overridden).
    pub fn is_loaded(&self) -> bool {
        self.read().is_some()
    }

    fn load(&self) -> Result<CharMap, CharMapError> {
        (self.loader)().inspect_err(|err| {
            warn!(error = %err, "charmap_load_failure");
        })
    }

    // The table is only ever replaced wholesale, so a poisoned lock still
    // guards a consistent value.
    fn read(&self) -> RwLockReadGuard<'_, Option<CharMap>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<CharMap>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CharMapRegistry {
    fn default() -> Self {
        Self::bundled()
    }
}

impl fmt::Debug for CharMapRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharMapRegistry")
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}

/// Process-wide registry backed by the bundled table.
pub fn global() -> &'static CharMapRegistry {
    static GLOBAL: OnceLock<CharMapRegistry> = OnceLock::new();
    GLOBAL.get_or_init(CharMapRegistry::bundled)
}
