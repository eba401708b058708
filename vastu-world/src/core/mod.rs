//! Core geometric types for the world map.
//!
//! All types follow the ROS REP-103 planar convention:
//! - **X-axis**: Forward
//! - **Y-axis**: Left
//! - **Theta**: Counter-clockwise rotation from +X axis (radians, (-π, π])
//!
//! - [`Pose2D`]: Position (x, y) and heading (theta)
//! - [`WorldPoint`]: World-frame position
//! - [`LocalDelta`]: Pose relative to the robot, as perception reports it
//! - [`to_world_frame`]: Robot-relative → world-frame conversion

pub mod math;
mod point;
mod pose;
mod transform;

pub use math::normalize_angle;
pub use point::WorldPoint;
pub use pose::Pose2D;
pub use transform::{LocalDelta, to_world_frame};
