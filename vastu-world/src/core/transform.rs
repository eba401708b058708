//! Robot-frame to world-frame conversion.
//!
//! Perception reports object poses relative to the robot. Combined with the
//! localizer's world-frame estimate of the robot pose, [`to_world_frame`]
//! produces the object's absolute pose:
//!
//! ```text
//!        world Y
//!          ▲            ● object
//!          │          ╱
//!          │    dist ╱  world_bearing = θr + atan2(dy, dx)
//!          │        ╱
//!          │   ◆───╱─► robot heading θr
//!          │ (rx, ry)
//!          └──────────────────► world X
//! ```
//!
//! The map is planar, so the vertical offset `dz` never contributes.

use serde::{Deserialize, Serialize};

use super::math::normalize_angle;
use super::pose::Pose2D;

/// Object pose expressed in the robot's egocentric frame.
///
/// `dx` is forward, `dy` is left, `dz` is up. `relative_orientation` is the
/// object's heading relative to the robot's heading (radians).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalDelta {
    /// Forward offset
    pub dx: f32,
    /// Leftward offset
    pub dy: f32,
    /// Vertical offset (ignored by the planar map)
    pub dz: f32,
    /// Heading relative to the robot (radians)
    pub relative_orientation: f32,
}

impl LocalDelta {
    /// Create a delta from its components.
    #[inline]
    pub fn new(dx: f32, dy: f32, dz: f32, relative_orientation: f32) -> Self {
        Self {
            dx,
            dy,
            dz,
            relative_orientation,
        }
    }

    /// Planar delta with no vertical offset.
    #[inline]
    pub fn planar(dx: f32, dy: f32, relative_orientation: f32) -> Self {
        Self::new(dx, dy, 0.0, relative_orientation)
    }

    /// Planar distance from the robot.
    #[inline]
    pub fn distance(&self) -> f32 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    /// Bearing from the robot's heading, in radians.
    #[inline]
    pub fn bearing(&self) -> f32 {
        self.dy.atan2(self.dx)
    }
}

/// Convert a robot-relative pose into a world-frame pose.
///
/// # Arguments
/// * `robot` - Robot pose in the world frame
/// * `delta` - Object pose relative to the robot
///
/// # Example
/// ```
/// use vastu_world::core::{LocalDelta, Pose2D, to_world_frame};
/// use std::f32::consts::FRAC_PI_2;
///
/// let robot = Pose2D::new(0.0, 0.0, FRAC_PI_2);
/// let world = to_world_frame(robot, LocalDelta::planar(10.0, 0.0, 0.0));
/// assert!(world.x.abs() < 1e-4);
/// assert!((world.y - 10.0).abs() < 1e-4);
/// ```
#[inline]
pub fn to_world_frame(robot: Pose2D, delta: LocalDelta) -> Pose2D {
    let dist = delta.distance();
    let world_bearing = normalize_angle(robot.theta + delta.bearing());
    let (sin, cos) = world_bearing.sin_cos();

    Pose2D::new(
        robot.x + dist * cos,
        robot.y + dist * sin,
        robot.theta + delta.relative_orientation,
    )
}
