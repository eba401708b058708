//! Structure pose inference from landmark estimates.
//!
//! Each marker sits at a known offset along its wall, so one marker estimate
//! fixes the whole wall:
//!
//! ```text
//!   start                   centre                      end
//!     ├───────●───────────────┼───────────────────────────┤
//!           marker   ◄─────── dist = length/2 − offset
//! ```
//!
//! The wall runs perpendicular to the marker's facing direction, so the
//! centre is found by walking `dist` along `orientation − π/2`.
//!
//! # Single-observation policy
//!
//! Only the first observation that resolves to a registered structure is
//! used. Heading is taken straight from that marker; no averaging or
//! least-squares fit across markers is attempted.

use std::f32::consts::FRAC_PI_2;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::landmark::{LandmarkEstimate, LandmarkId};
use super::registry::StructureRegistry;
use super::spec::Doorway;
use crate::core::Pose2D;

/// Static structure (wall segment) located in the world frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    /// Structure identity (smallest landmark id on it)
    pub id: LandmarkId,
    /// Pose of the structure's centre; theta is the marker facing direction
    pub pose: Pose2D,
    /// Structure length
    pub length: f32,
    /// Openings along the structure
    #[serde(default)]
    pub doorways: Vec<Doorway>,
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Wall {}: {} for {:.1}>",
            self.id, self.pose, self.length
        )
    }
}

/// Infer a structure's world pose from its landmark observations.
///
/// # Arguments
/// * `registry` - Landmark → structure table
/// * `structure_id` - Structure the observations were grouped under
/// * `observations` - Landmark estimates in caller-defined order
///
/// # Returns
/// The structure located from the first registered landmark, or `None` if no
/// observation resolves (the caller must then leave the map untouched).
pub fn infer_structure(
    registry: &StructureRegistry,
    structure_id: LandmarkId,
    observations: &[(LandmarkId, LandmarkEstimate)],
) -> Option<Structure> {
    for (landmark, estimate) in observations {
        let Some(spec) = registry.lookup(*landmark) else {
            log::trace!("Landmark {} is not on any structure, skipping", landmark);
            continue;
        };
        let Some(placement) = spec.placement(*landmark) else {
            continue;
        };

        if spec.id() != structure_id {
            log::debug!(
                "Landmark {} grouped under structure {} but belongs to {}",
                landmark,
                structure_id,
                spec.id()
            );
        }

        let dist = spec.length() / 2.0 - placement.offset;
        let orientation = estimate.orientation;
        let (sin, cos) = (orientation - FRAC_PI_2).sin_cos();

        return Some(Structure {
            id: spec.id(),
            pose: Pose2D::new(
                estimate.position.x + dist * cos,
                estimate.position.y + dist * sin,
                orientation,
            ),
            length: spec.length(),
            doorways: spec.doorways().to_vec(),
        });
    }

    None
}
