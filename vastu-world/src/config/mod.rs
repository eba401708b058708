//! Configuration loading for VastuWorld.
//!
//! Structures and object sizes come from a single YAML file.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_world::config::WorldConfig;
//!
//! // Load from default path (configs/world.yaml), or defaults if absent
//! let config = WorldConfig::load_default()?;
//!
//! // Validate structures and freeze the landmark registry
//! let map = config.build_map()?;
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! structures:
//!   - name: kitchen
//!     length: 300.0
//!     markers:
//!       # landmark id: face ("+" front, "-" back), offset along the wall
//!       37: { facing: "+", offset: 40.0, height: 60.0 }
//!       38: { facing: "+", offset: 260.0, height: 60.0 }
//!     doorways:
//!       - { center: 150.0, width: 75.0 }
//!
//! objects:
//!   light_cube: [44.0, 44.0, 44.0]
//!   custom_cube: [50.0, 50.0, 50.0]
//! ```

mod defaults;
mod error;
mod structures;
mod world;

pub use error::ConfigLoadError;
pub use structures::StructureSection;
pub use world::WorldConfig;
