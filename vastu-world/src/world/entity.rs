//! Map keys and entries.
//!
//! The map holds three kinds of identity that used to share one untyped
//! keyspace. [`EntityId`] keeps them apart so a landmark number can never
//! collide with a camera object id or a custom object type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Pose2D;
use crate::structure::{LandmarkId, Structure};

/// Per-instance identity assigned by perception (e.g. a light cube id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a custom marked object.
///
/// All instances of one type share a single map slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectType(pub String);

impl ObjectType {
    /// Create an object type from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Type name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of a world map entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityId {
    /// Structure, keyed by its smallest landmark id
    Structure(LandmarkId),
    /// Movable object tracked per instance
    Object(ObjectId),
    /// Custom object tracked per type (one slot per type)
    ObjectType(ObjectType),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Structure(id) => write!(f, "structure:{}", id),
            EntityId::Object(id) => write!(f, "object:{}", id),
            EntityId::ObjectType(ty) => write!(f, "type:{}", ty),
        }
    }
}

/// What a movable object is, with the identity it is tracked by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovableKind {
    /// Light cube, tracked per instance
    LightCube(ObjectId),
    /// Custom marked cube, tracked per type
    CustomCube(ObjectType),
}

impl MovableKind {
    /// Map key for this object.
    pub fn entity_id(&self) -> EntityId {
        match self {
            MovableKind::LightCube(id) => EntityId::Object(*id),
            MovableKind::CustomCube(ty) => EntityId::ObjectType(ty.clone()),
        }
    }
}

/// Bounding box dimensions (x, y, z).
pub type Size3 = [f32; 3];

/// Fixed bounding box per movable object kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectSizes {
    /// Light cube dimensions
    #[serde(default = "default_light_cube_size")]
    pub light_cube: Size3,
    /// Custom cube dimensions
    #[serde(default = "default_custom_cube_size")]
    pub custom_cube: Size3,
}

fn default_light_cube_size() -> Size3 {
    [44.0, 44.0, 44.0]
}

fn default_custom_cube_size() -> Size3 {
    [50.0, 50.0, 50.0]
}

impl Default for ObjectSizes {
    fn default() -> Self {
        Self {
            light_cube: default_light_cube_size(),
            custom_cube: default_custom_cube_size(),
        }
    }
}

impl ObjectSizes {
    /// Size for an object kind.
    pub fn size_of(&self, kind: &MovableKind) -> Size3 {
        match kind {
            MovableKind::LightCube(_) => self.light_cube,
            MovableKind::CustomCube(_) => self.custom_cube,
        }
    }
}

/// Object observed directly by the camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovableObject {
    /// Object kind and identity
    pub kind: MovableKind,
    /// World-frame pose
    pub pose: Pose2D,
    /// Bounding box
    pub size: Size3,
}

impl MovableObject {
    /// Map key for this object.
    pub fn entity_id(&self) -> EntityId {
        self.kind.entity_id()
    }
}

impl fmt::Display for MovableObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MovableKind::LightCube(id) => write!(f, "<LightCube {}: {}>", id, self.pose),
            MovableKind::CustomCube(ty) => write!(f, "<CustomCube {}: {}>", ty, self.pose),
        }
    }
}

/// Value stored in the world map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MapEntry {
    /// Landmark-inferred structure
    Structure(Structure),
    /// Directly observed object
    Movable(MovableObject),
}

impl MapEntry {
    /// World-frame pose of the entry.
    pub fn pose(&self) -> Pose2D {
        match self {
            MapEntry::Structure(s) => s.pose,
            MapEntry::Movable(m) => m.pose,
        }
    }

    /// The structure, if this entry is one.
    pub fn as_structure(&self) -> Option<&Structure> {
        match self {
            MapEntry::Structure(s) => Some(s),
            MapEntry::Movable(_) => None,
        }
    }

    /// The movable object, if this entry is one.
    pub fn as_movable(&self) -> Option<&MovableObject> {
        match self {
            MapEntry::Movable(m) => Some(m),
            MapEntry::Structure(_) => None,
        }
    }
}

impl fmt::Display for MapEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapEntry::Structure(s) => fmt::Display::fmt(s, f),
            MapEntry::Movable(m) => fmt::Display::fmt(m, f),
        }
    }
}
