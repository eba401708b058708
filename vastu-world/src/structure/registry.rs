//! Landmark → structure lookup table.
//!
//! The registry is populated once through [`StructureRegistryBuilder`] while
//! configuration loads, then frozen. The frozen [`StructureRegistry`] has no
//! mutating methods; share it with `Arc` across every map that needs it.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use vastu_world::structure::{LandmarkId, MarkerPlacement, StructureRegistry, StructureSpec};
//!
//! let mut landmarks = BTreeMap::new();
//! landmarks.insert(LandmarkId(1), MarkerPlacement::front(10.0));
//! let spec = StructureSpec::new(100.0, landmarks, vec![]).unwrap();
//!
//! let registry = StructureRegistry::builder().register(spec).unwrap().build();
//! assert_eq!(registry.lookup(LandmarkId(1)).map(|s| s.id()), Some(LandmarkId(1)));
//! ```

use std::collections::HashMap;

use thiserror::Error;

use super::landmark::LandmarkId;
use super::spec::StructureSpec;

/// Registry build errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two structures claim the same landmark.
    #[error("landmark {landmark} already belongs to structure {existing}, cannot add it to structure {incoming}")]
    DuplicateLandmark {
        /// Landmark claimed twice
        landmark: LandmarkId,
        /// Structure that registered it first
        existing: LandmarkId,
        /// Structure that tried to register it again
        incoming: LandmarkId,
    },
}

/// Accumulates structure specs and validates landmark ownership.
#[derive(Debug, Default)]
pub struct StructureRegistryBuilder {
    specs: Vec<StructureSpec>,
    by_landmark: HashMap<LandmarkId, usize>,
}

impl StructureRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every landmark of `spec` as belonging to it.
    ///
    /// # Errors
    /// [`RegistryError::DuplicateLandmark`] if any landmark is already owned
    /// by a previously registered structure. The builder is consumed either
    /// way; nothing from a rejected spec is kept.
    pub fn register(mut self, spec: StructureSpec) -> Result<Self, RegistryError> {
        for landmark in spec.landmarks().keys() {
            if let Some(&index) = self.by_landmark.get(landmark) {
                return Err(RegistryError::DuplicateLandmark {
                    landmark: *landmark,
                    existing: self.specs[index].id(),
                    incoming: spec.id(),
                });
            }
        }

        let index = self.specs.len();
        for landmark in spec.landmarks().keys() {
            self.by_landmark.insert(*landmark, index);
        }
        self.specs.push(spec);
        Ok(self)
    }

    /// Register several specs in order, stopping at the first conflict.
    pub fn register_all<I>(self, specs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = StructureSpec>,
    {
        specs.into_iter().try_fold(self, Self::register)
    }

    /// Freeze the registry.
    pub fn build(self) -> StructureRegistry {
        log::info!(
            "Structure registry built: {} structures, {} landmarks",
            self.specs.len(),
            self.by_landmark.len()
        );
        StructureRegistry {
            specs: self.specs,
            by_landmark: self.by_landmark,
        }
    }
}

/// Immutable landmark → structure table.
#[derive(Debug, Default)]
pub struct StructureRegistry {
    specs: Vec<StructureSpec>,
    by_landmark: HashMap<LandmarkId, usize>,
}

impl StructureRegistry {
    /// Start building a registry.
    pub fn builder() -> StructureRegistryBuilder {
        StructureRegistryBuilder::new()
    }

    /// Empty registry (every landmark is unregistered).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Structure that owns `landmark`, if any.
    #[inline]
    pub fn lookup(&self, landmark: LandmarkId) -> Option<&StructureSpec> {
        self.by_landmark
            .get(&landmark)
            .map(|&index| &self.specs[index])
    }

    /// Id of the structure that owns `landmark`, if any.
    #[inline]
    pub fn structure_id_for(&self, landmark: LandmarkId) -> Option<LandmarkId> {
        self.lookup(landmark).map(StructureSpec::id)
    }

    /// All registered structures, in registration order.
    pub fn specs(&self) -> impl Iterator<Item = &StructureSpec> {
        self.specs.iter()
    }

    /// Number of structures.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True if no structures are registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Number of registered landmarks across all structures.
    pub fn landmark_count(&self) -> usize {
        self.by_landmark.len()
    }
}
