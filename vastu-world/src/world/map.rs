//! World map orchestration.
//!
//! # Pipeline
//!
//! ```text
//!  regenerate()                                handle_observation()
//!       │                                              │
//!       ▼                                              ▼
//! ┌──────────────────┐                       ┌──────────────────┐
//! │ Landmark groups  │ registry lookup       │ Custom detection │ kind filter
//! └────────┬─────────┘                       └────────┬─────────┘
//!          ▼                                          │
//! ┌──────────────────┐                                │
//! │ infer_structure  │ first resolvable marker        │
//! └────────┬─────────┘                                │
//!          ▼                                          ▼
//! ┌──────────────────┐                       ┌──────────────────┐
//! │ Light cube poses │──── to_world_frame ───│  to_world_frame  │
//! └────────┬─────────┘                       └────────┬─────────┘
//!          └──────────────────┬───────────────────────┘
//!                             ▼
//!                  objects: EntityId → MapEntry
//! ```
//!
//! Entries are overwritten, never merged and never aged out. A structure that
//! cannot be inferred this cycle keeps whatever entry it had before.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::entity::{EntityId, MapEntry, MovableKind, MovableObject, ObjectSizes};
use super::sources::{Detection, DetectionKind, LocalizationSource, PerceptionSource};
use crate::core::{LocalDelta, Pose2D, to_world_frame};
use crate::structure::{
    LandmarkEstimate, LandmarkId, Structure, StructureRegistry, infer_structure,
};

/// Counters from one regeneration pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegenerateResult {
    /// Structures written to the map
    pub structures_updated: usize,
    /// Structure groups for which inference produced nothing
    pub structures_unresolved: usize,
    /// Landmark estimates that belong to no registered structure
    pub landmarks_unregistered: usize,
    /// Movable objects written to the map
    pub objects_updated: usize,
    /// Movable objects skipped because their pose was invalid
    pub objects_skipped: usize,
}

impl RegenerateResult {
    /// Merge another result into this one
    pub fn merge(&mut self, other: &RegenerateResult) {
        self.structures_updated += other.structures_updated;
        self.structures_unresolved += other.structures_unresolved;
        self.landmarks_unregistered += other.landmarks_unregistered;
        self.objects_updated += other.objects_updated;
        self.objects_skipped += other.objects_skipped;
    }
}

/// World-frame map of structures and movable objects.
///
/// Owned by a single robot session. Methods take `&mut self`, so the
/// borrow checker serializes regeneration and observation handling; wrap
/// the map in [`SharedWorldMap`](super::SharedWorldMap) when callbacks
/// arrive on different threads.
#[derive(Debug)]
pub struct WorldMap {
    objects: HashMap<EntityId, MapEntry>,
    registry: Arc<StructureRegistry>,
    sizes: ObjectSizes,
}

impl WorldMap {
    /// Create an empty map using default object sizes.
    pub fn new(registry: Arc<StructureRegistry>) -> Self {
        Self::with_sizes(registry, ObjectSizes::default())
    }

    /// Create an empty map with explicit object sizes.
    pub fn with_sizes(registry: Arc<StructureRegistry>, sizes: ObjectSizes) -> Self {
        Self {
            objects: HashMap::new(),
            registry,
            sizes,
        }
    }

    /// Structure registry this map resolves landmarks against.
    pub fn registry(&self) -> &StructureRegistry {
        &self.registry
    }

    /// Object sizes used for new entries.
    pub fn sizes(&self) -> &ObjectSizes {
        &self.sizes
    }

    // =========================================================================
    // UPDATE METHODS
    // =========================================================================

    /// Rebuild structures from landmark estimates, then refresh light cubes.
    ///
    /// Structures are always applied before movable objects.
    pub fn regenerate<L, P>(&mut self, localization: &L, perception: &P) -> RegenerateResult
    where
        L: LocalizationSource + ?Sized,
        P: PerceptionSource + ?Sized,
    {
        let mut result = self.regenerate_structures(localization);
        result.merge(&self.refresh_light_cubes(localization, perception));

        log::debug!(
            "Map regenerated: {} structures ({} unresolved, {} stray landmarks), {} cubes ({} invalid)",
            result.structures_updated,
            result.structures_unresolved,
            result.landmarks_unregistered,
            result.objects_updated,
            result.objects_skipped
        );
        result
    }

    /// Infer every structure with at least one visible landmark.
    ///
    /// Unresolvable groups leave their previous entry in place.
    pub fn regenerate_structures<L>(&mut self, localization: &L) -> RegenerateResult
    where
        L: LocalizationSource + ?Sized,
    {
        let mut result = RegenerateResult::default();

        let mut groups: BTreeMap<LandmarkId, Vec<(LandmarkId, LandmarkEstimate)>> =
            BTreeMap::new();
        for (landmark, estimate) in localization.landmark_estimates() {
            match self.registry.structure_id_for(landmark) {
                Some(structure_id) => groups
                    .entry(structure_id)
                    .or_default()
                    .push((landmark, estimate)),
                None => {
                    log::trace!("Landmark {} belongs to no structure", landmark);
                    result.landmarks_unregistered += 1;
                }
            }
        }

        for (structure_id, observations) in groups {
            match infer_structure(&self.registry, structure_id, &observations) {
                Some(structure) => {
                    self.objects.insert(
                        EntityId::Structure(structure.id),
                        MapEntry::Structure(structure),
                    );
                    result.structures_updated += 1;
                }
                None => {
                    log::debug!(
                        "Structure {} unresolved from {} landmarks, keeping previous entry",
                        structure_id,
                        observations.len()
                    );
                    result.structures_unresolved += 1;
                }
            }
        }

        result
    }

    /// Place every light cube that has a valid pose, overwriting old entries.
    pub fn refresh_light_cubes<L, P>(&mut self, localization: &L, perception: &P) -> RegenerateResult
    where
        L: LocalizationSource + ?Sized,
        P: PerceptionSource + ?Sized,
    {
        let mut result = RegenerateResult::default();
        let robot = localization.current_pose();

        for (id, delta) in perception.movable_object_poses() {
            match delta {
                Some(delta) => {
                    self.place(MovableKind::LightCube(id), robot, delta);
                    result.objects_updated += 1;
                }
                None => {
                    log::trace!("Light cube {} has no valid pose", id);
                    result.objects_skipped += 1;
                }
            }
        }

        result
    }

    /// Apply one detection event.
    ///
    /// Only custom objects with a valid pose are placed. They are keyed by
    /// type, so two physical objects of the same type share one slot and the
    /// latest detection wins. Returns `true` if the map changed.
    pub fn handle_observation<L>(&mut self, detection: &Detection, localization: &L) -> bool
    where
        L: LocalizationSource + ?Sized,
    {
        if detection.kind != DetectionKind::CustomObject {
            return false;
        }
        let Some(delta) = detection.pose else {
            log::trace!("Detection of {} has no valid pose", detection.object_type);
            return false;
        };

        let robot = localization.current_pose();
        self.place(
            MovableKind::CustomCube(detection.object_type.clone()),
            robot,
            delta,
        );
        true
    }

    fn place(&mut self, kind: MovableKind, robot: Pose2D, delta: LocalDelta) {
        let object = MovableObject {
            size: self.sizes.size_of(&kind),
            pose: to_world_frame(robot, delta),
            kind,
        };
        self.objects
            .insert(object.entity_id(), MapEntry::Movable(object));
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    // =========================================================================
    // QUERY METHODS
    // =========================================================================

    /// All entries.
    pub fn objects(&self) -> &HashMap<EntityId, MapEntry> {
        &self.objects
    }

    /// Entry for one identity.
    pub fn get(&self, id: &EntityId) -> Option<&MapEntry> {
        self.objects.get(id)
    }

    /// Structure by id.
    pub fn structure(&self, id: LandmarkId) -> Option<&Structure> {
        self.get(&EntityId::Structure(id))
            .and_then(MapEntry::as_structure)
    }

    /// All structures.
    pub fn structures(&self) -> impl Iterator<Item = &Structure> {
        self.objects.values().filter_map(MapEntry::as_structure)
    }

    /// All movable objects.
    pub fn movable_objects(&self) -> impl Iterator<Item = &MovableObject> {
        self.objects.values().filter_map(MapEntry::as_movable)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
