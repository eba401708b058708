//! Thread-safe handle to a world map.
//!
//! Some hosts deliver regeneration requests and detection callbacks on
//! different threads. [`SharedWorldMap`] puts the whole map behind one
//! mutex so every read-modify-write of the entry table is serialized.
//! Nothing is atomic across two calls.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::entity::{EntityId, MapEntry};
use super::map::{RegenerateResult, WorldMap};
use super::sources::{Detection, LocalizationSource, PerceptionSource};

/// Cloneable, mutex-guarded world map.
#[derive(Clone, Debug)]
pub struct SharedWorldMap {
    inner: Arc<Mutex<WorldMap>>,
}

impl SharedWorldMap {
    /// Wrap a map.
    pub fn new(map: WorldMap) -> Self {
        Self {
            inner: Arc::new(Mutex::new(map)),
        }
    }

    /// See [`WorldMap::regenerate`].
    pub fn regenerate<L, P>(&self, localization: &L, perception: &P) -> RegenerateResult
    where
        L: LocalizationSource + ?Sized,
        P: PerceptionSource + ?Sized,
    {
        self.inner.lock().regenerate(localization, perception)
    }

    /// See [`WorldMap::handle_observation`].
    pub fn handle_observation<L>(&self, detection: &Detection, localization: &L) -> bool
    where
        L: LocalizationSource + ?Sized,
    {
        self.inner.lock().handle_observation(detection, localization)
    }

    /// Copy of one entry.
    pub fn get(&self, id: &EntityId) -> Option<MapEntry> {
        self.inner.lock().get(id).cloned()
    }

    /// Copy of every entry.
    pub fn snapshot(&self) -> HashMap<EntityId, MapEntry> {
        self.inner.lock().objects().clone()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run `f` with the map locked.
    pub fn with_map<R>(&self, f: impl FnOnce(&WorldMap) -> R) -> R {
        f(&*self.inner.lock())
    }
}

impl From<WorldMap> for SharedWorldMap {
    fn from(map: WorldMap) -> Self {
        Self::new(map)
    }
}
