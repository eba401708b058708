//! Static structures located through landmarks.
//!
//! - [`StructureSpec`]: configured geometry of one structure and its markers
//! - [`StructureRegistry`]: frozen landmark → structure table
//! - [`infer_structure`]: world pose of a structure from marker estimates

mod inference;
mod landmark;
mod registry;
mod spec;

pub use inference::{Structure, infer_structure};
pub use landmark::{Covariance2D, LandmarkEstimate, LandmarkId};
pub use registry::{RegistryError, StructureRegistry, StructureRegistryBuilder};
pub use spec::{Doorway, MarkerFacing, MarkerPlacement, SpecError, StructureSpec};
