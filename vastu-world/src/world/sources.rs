//! Collaborator interfaces feeding the world map.
//!
//! The map never owns localization or perception; it reads a snapshot from
//! each at call time. Implement these traits on whatever the host uses
//! (particle filter, camera pipeline, simulator, test fixture).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entity::{ObjectId, ObjectType};
use crate::core::{LocalDelta, Pose2D};
use crate::structure::{LandmarkEstimate, LandmarkId};

/// World-frame estimates supplied by the localizer.
pub trait LocalizationSource {
    /// Current robot pose in the world frame.
    fn current_pose(&self) -> Pose2D;

    /// Every landmark currently estimated, in ascending id order.
    fn landmark_estimates(&self) -> BTreeMap<LandmarkId, LandmarkEstimate>;
}

/// Robot-relative object poses supplied by perception.
pub trait PerceptionSource {
    /// Light cube poses relative to the robot. `None` marks an object whose
    /// pose is currently invalid.
    fn movable_object_poses(&self) -> BTreeMap<ObjectId, Option<LocalDelta>>;
}

/// Source category of a detection event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectionKind {
    /// Light cube (refreshed only by full regeneration)
    LightCube,
    /// Custom marked object (updated per event)
    CustomObject,
}

/// One object-observed event from perception.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Source category
    pub kind: DetectionKind,
    /// Object type reported by perception
    pub object_type: ObjectType,
    /// Pose relative to the robot, `None` if invalid
    pub pose: Option<LocalDelta>,
}

impl Detection {
    /// Custom object detection with a valid pose.
    pub fn custom(object_type: impl Into<String>, pose: LocalDelta) -> Self {
        Self {
            kind: DetectionKind::CustomObject,
            object_type: ObjectType::new(object_type),
            pose: Some(pose),
        }
    }

    /// Light cube detection with a valid pose.
    pub fn light_cube(object_type: impl Into<String>, pose: LocalDelta) -> Self {
        Self {
            kind: DetectionKind::LightCube,
            object_type: ObjectType::new(object_type),
            pose: Some(pose),
        }
    }

    /// Same detection with its pose marked invalid.
    pub fn without_pose(mut self) -> Self {
        self.pose = None;
        self
    }
}
