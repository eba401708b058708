//! Landmark identifiers and localizer estimates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;

/// Identifier of a visual landmark (marker).
///
/// Ordered so that the smallest landmark on a structure can serve as the
/// structure's identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkId(pub u32);

impl LandmarkId {
    /// Create a landmark id
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw identifier
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LandmarkId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Symmetric 2x2 position covariance:
/// ```text
/// | xx  xy |
/// | xy  yy |
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Covariance2D {
    /// Variance along X
    pub xx: f32,
    /// Variance along Y
    pub yy: f32,
    /// X/Y covariance
    pub xy: f32,
}

impl Covariance2D {
    /// Isotropic covariance with the given variance.
    pub fn isotropic(variance: f32) -> Self {
        Self {
            xx: variance,
            yy: variance,
            xy: 0.0,
        }
    }
}

/// Localizer estimate of a landmark, already expressed in the world frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandmarkEstimate {
    /// Mean position
    pub position: WorldPoint,
    /// Marker orientation (radians)
    pub orientation: f32,
    /// Position uncertainty
    pub covariance: Covariance2D,
}

impl LandmarkEstimate {
    /// Create an estimate.
    pub fn new(position: WorldPoint, orientation: f32, covariance: Covariance2D) -> Self {
        Self {
            position,
            orientation,
            covariance,
        }
    }

    /// Estimate with zero covariance. Handy for fixtures and simulators.
    pub fn exact(x: f32, y: f32, orientation: f32) -> Self {
        Self::new(WorldPoint::new(x, y), orientation, Covariance2D::default())
    }
}
