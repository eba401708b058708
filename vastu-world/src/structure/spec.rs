//! Static structure specifications.
//!
//! A [`StructureSpec`] describes a rigid structure (a wall segment) and where
//! each of its landmarks is mounted. Specs are immutable once built; register
//! them into a [`StructureRegistry`](super::StructureRegistry) before the map
//! runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::landmark::LandmarkId;

/// Which face of the structure a marker is mounted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerFacing {
    /// Marker faces the structure's front side
    #[serde(rename = "+")]
    Front,
    /// Marker faces the structure's back side
    #[serde(rename = "-")]
    Back,
}

/// Mounting position of one marker on a structure.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerPlacement {
    /// Face the marker is mounted on
    pub facing: MarkerFacing,
    /// Distance along the structure's length, measured from its start
    pub offset: f32,
    /// Height of the marker centre above the floor
    #[serde(default)]
    pub height: f32,
}

impl MarkerPlacement {
    /// Create a placement at `offset` along the structure.
    pub fn new(facing: MarkerFacing, offset: f32, height: f32) -> Self {
        Self {
            facing,
            offset,
            height,
        }
    }

    /// Front-facing marker at floor height.
    pub fn front(offset: f32) -> Self {
        Self::new(MarkerFacing::Front, offset, 0.0)
    }
}

/// Opening in a structure.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Doorway {
    /// Centre of the opening, measured along the structure from its start
    pub center: f32,
    /// Width of the opening
    pub width: f32,
}

/// Errors raised while building a [`StructureSpec`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// A structure needs at least one landmark to be identified.
    #[error("structure has no landmarks")]
    NoLandmarks,

    /// Length must be finite and positive.
    #[error("invalid structure length {0}")]
    InvalidLength(f32),
}

/// Immutable description of a static structure.
///
/// The structure id is the smallest landmark id it carries.
#[derive(Clone, Debug, PartialEq)]
pub struct StructureSpec {
    id: LandmarkId,
    length: f32,
    landmarks: BTreeMap<LandmarkId, MarkerPlacement>,
    doorways: Vec<Doorway>,
}

impl StructureSpec {
    /// Build a structure spec.
    ///
    /// # Errors
    /// [`SpecError::NoLandmarks`] if `landmarks` is empty,
    /// [`SpecError::InvalidLength`] if `length` is not finite and positive.
    pub fn new(
        length: f32,
        landmarks: BTreeMap<LandmarkId, MarkerPlacement>,
        doorways: Vec<Doorway>,
    ) -> Result<Self, SpecError> {
        if !(length.is_finite() && length > 0.0) {
            return Err(SpecError::InvalidLength(length));
        }
        let id = *landmarks.keys().next().ok_or(SpecError::NoLandmarks)?;

        Ok(Self {
            id,
            length,
            landmarks,
            doorways,
        })
    }

    /// Structure identity (smallest landmark id).
    #[inline]
    pub fn id(&self) -> LandmarkId {
        self.id
    }

    /// Structure length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Landmarks mounted on this structure, in ascending id order.
    pub fn landmarks(&self) -> &BTreeMap<LandmarkId, MarkerPlacement> {
        &self.landmarks
    }

    /// Placement of one landmark, if it belongs to this structure.
    pub fn placement(&self, landmark: LandmarkId) -> Option<&MarkerPlacement> {
        self.landmarks.get(&landmark)
    }

    /// Doorways, in configuration order.
    pub fn doorways(&self) -> &[Doorway] {
        &self.doorways
    }
}
