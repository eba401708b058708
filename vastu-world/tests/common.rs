//! Test utilities for VastuWorld.
//!
//! A scripted robot that plays both collaborator roles, plus registry helpers.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use vastu_world::{
    LandmarkEstimate, LandmarkId, LocalDelta, LocalizationSource, MarkerPlacement, ObjectId,
    PerceptionSource, Pose2D, StructureRegistry, StructureSpec,
};

/// Scripted localization + perception snapshot.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRobot {
    pub pose: Pose2D,
    pub landmarks: BTreeMap<LandmarkId, LandmarkEstimate>,
    pub cubes: BTreeMap<ObjectId, Option<LocalDelta>>,
}

impl ScriptedRobot {
    pub fn at(x: f32, y: f32, theta: f32) -> Self {
        Self {
            pose: Pose2D::new(x, y, theta),
            ..Default::default()
        }
    }

    pub fn sees_landmark(mut self, id: u32, x: f32, y: f32, orientation: f32) -> Self {
        self.landmarks
            .insert(LandmarkId(id), LandmarkEstimate::exact(x, y, orientation));
        self
    }

    pub fn sees_cube(mut self, id: u32, dx: f32, dy: f32, orientation: f32) -> Self {
        self.cubes
            .insert(ObjectId(id), Some(LocalDelta::planar(dx, dy, orientation)));
        self
    }

    pub fn lost_cube(mut self, id: u32) -> Self {
        self.cubes.insert(ObjectId(id), None);
        self
    }
}

impl LocalizationSource for ScriptedRobot {
    fn current_pose(&self) -> Pose2D {
        self.pose
    }

    fn landmark_estimates(&self) -> BTreeMap<LandmarkId, LandmarkEstimate> {
        self.landmarks.clone()
    }
}

impl PerceptionSource for ScriptedRobot {
    fn movable_object_poses(&self) -> BTreeMap<ObjectId, Option<LocalDelta>> {
        self.cubes.clone()
    }
}

/// Build a spec from `(landmark id, offset)` pairs.
pub fn wall(length: f32, markers: &[(u32, f32)]) -> StructureSpec {
    let landmarks: BTreeMap<_, _> = markers
        .iter()
        .map(|&(id, offset)| (LandmarkId(id), MarkerPlacement::front(offset)))
        .collect();
    StructureSpec::new(length, landmarks, vec![]).expect("valid wall spec")
}

/// Shared registry over the given specs.
pub fn registry(specs: Vec<StructureSpec>) -> Arc<StructureRegistry> {
    Arc::new(
        StructureRegistry::builder()
            .register_all(specs)
            .expect("no duplicate landmarks")
            .build(),
    )
}
