//! Structure configuration section.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::structure::{Doorway, LandmarkId, MarkerPlacement, SpecError, StructureSpec};

/// One structure as written in the configuration file
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StructureSection {
    /// Human-readable label (not used for identity)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Structure length (default: 100)
    #[serde(default = "defaults::structure_length")]
    pub length: f32,

    /// Markers keyed by landmark id
    pub markers: BTreeMap<LandmarkId, MarkerPlacement>,

    /// Doorways in order along the structure
    #[serde(default)]
    pub doorways: Vec<Doorway>,
}

impl StructureSection {
    /// Convert to a validated [`StructureSpec`]
    pub fn to_spec(&self) -> Result<StructureSpec, SpecError> {
        StructureSpec::new(self.length, self.markers.clone(), self.doorways.clone())
    }

    /// Smallest configured landmark id
    pub fn first_landmark(&self) -> Option<LandmarkId> {
        self.markers.keys().next().copied()
    }
}
