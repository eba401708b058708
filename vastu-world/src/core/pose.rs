//! 2D pose type for world-frame positions and headings.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::math::{angles_approx_equal, normalize_angle, rad_to_deg};
use super::point::WorldPoint;

/// A 2D pose representing position and orientation.
///
/// - Position: (x, y) in map units
/// - Theta: heading in radians, counter-clockwise from X-axis, kept in (-π, π]
///
/// Always build poses through [`Pose2D::new`] so the heading is normalized
/// before it is stored or compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Heading angle in radians (-π, π], CCW positive from X-axis.
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose. `theta` is normalized to (-π, π].
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// Create an identity pose (origin, facing forward).
    #[inline]
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    /// Create a pose from position and angle.
    #[inline]
    pub fn from_position_angle(position: WorldPoint, theta: f32) -> Self {
        Self::new(position.x, position.y, theta)
    }

    /// Get the position as a WorldPoint.
    #[inline]
    pub fn position(self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    /// Heading in degrees.
    #[inline]
    pub fn theta_degrees(self) -> f32 {
        rad_to_deg(self.theta)
    }

    /// Check if this pose is approximately equal to another.
    #[inline]
    pub fn approx_eq(self, other: Pose2D, pos_epsilon: f32, angle_epsilon: f32) -> bool {
        (self.x - other.x).abs() <= pos_epsilon
            && (self.y - other.y).abs() <= pos_epsilon
            && angles_approx_equal(self.theta, other.theta, angle_epsilon)
    }
}

impl fmt::Display for Pose2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.1},{:.1}) @ {:.0} deg.",
            self.x,
            self.y,
            self.theta_degrees()
        )
    }
}
