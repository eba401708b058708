//! The world map and its collaborators.
//!
//! - [`WorldMap`]: identity-keyed map of structures and movable objects
//! - [`SharedWorldMap`]: mutex-guarded handle for multi-threaded hosts
//! - [`LocalizationSource`] / [`PerceptionSource`]: snapshot inputs
//! - [`EntityId`] / [`MapEntry`]: typed keys and values

mod entity;
mod map;
mod shared;
mod sources;

pub use entity::{
    EntityId, MapEntry, MovableKind, MovableObject, ObjectId, ObjectSizes, ObjectType, Size3,
};
pub use map::{RegenerateResult, WorldMap};
pub use shared::SharedWorldMap;
pub use sources::{Detection, DetectionKind, LocalizationSource, PerceptionSource};
