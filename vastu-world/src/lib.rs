//! # VastuWorld
//!
//! World-frame object map for a small mobile robot: walls inferred from
//! fixed visual markers and cubes observed directly by the camera.
//!
//! ## Overview
//!
//! Localization and perception report what the robot sees relative to
//! itself. VastuWorld turns that into a persistent map in the world frame,
//! keyed by stable identity:
//!
//! - **Structures** - Walls located from one of their markers
//! - **Light cubes** - Tracked per instance, refreshed on regeneration
//! - **Custom cubes** - Tracked per type, updated on every detection
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use std::sync::Arc;
//! use vastu_world::{
//!     LandmarkEstimate, LandmarkId, LocalDelta, LocalizationSource, MarkerPlacement,
//!     ObjectId, PerceptionSource, Pose2D, StructureRegistry, StructureSpec, WorldMap,
//! };
//!
//! struct Robot;
//!
//! impl LocalizationSource for Robot {
//!     fn current_pose(&self) -> Pose2D {
//!         Pose2D::identity()
//!     }
//!     fn landmark_estimates(&self) -> BTreeMap<LandmarkId, LandmarkEstimate> {
//!         BTreeMap::from([(LandmarkId(1), LandmarkEstimate::exact(40.0, 0.0, 0.0))])
//!     }
//! }
//!
//! impl PerceptionSource for Robot {
//!     fn movable_object_poses(&self) -> BTreeMap<ObjectId, Option<LocalDelta>> {
//!         BTreeMap::new()
//!     }
//! }
//!
//! let spec = StructureSpec::new(
//!     100.0,
//!     BTreeMap::from([(LandmarkId(1), MarkerPlacement::front(10.0))]),
//!     vec![],
//! )
//! .unwrap();
//! let registry = Arc::new(StructureRegistry::builder().register(spec).unwrap().build());
//!
//! let mut map = WorldMap::new(registry);
//! map.regenerate(&Robot, &Robot);
//!
//! let wall = map.structure(LandmarkId(1)).unwrap();
//! assert!((wall.pose.y + 40.0).abs() < 1e-3);
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (positive ahead of robot)
//! - Y: Left (positive to robot's left)
//! - Theta: Rotation in radians, CCW positive from +X axis, kept in (-π, π]

// Core geometry
pub mod core;

// Structures, landmarks, inference
pub mod structure;

// World map and collaborators
pub mod world;

// YAML configuration
pub mod config;

pub mod error;

// Re-export commonly used types
pub use self::core::{LocalDelta, Pose2D, WorldPoint, normalize_angle, to_world_frame};

pub use structure::{
    Covariance2D, Doorway, LandmarkEstimate, LandmarkId, MarkerFacing, MarkerPlacement,
    RegistryError, SpecError, Structure, StructureRegistry, StructureRegistryBuilder,
    StructureSpec, infer_structure,
};

pub use world::{
    Detection, DetectionKind, EntityId, LocalizationSource, MapEntry, MovableKind, MovableObject,
    ObjectId, ObjectSizes, ObjectType, PerceptionSource, RegenerateResult, SharedWorldMap,
    WorldMap,
};

pub use config::{ConfigLoadError, WorldConfig};
pub use error::{Result, WorldError};
