//! Main WorldConfig and conversion methods.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigLoadError;
use super::structures::StructureSection;
use crate::error::{Result, WorldError};
use crate::structure::StructureRegistry;
use crate::world::{ObjectSizes, WorldMap};

/// Full VastuWorld configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct WorldConfig {
    /// Known structures
    #[serde(default)]
    pub structures: Vec<StructureSection>,

    /// Movable object sizes
    #[serde(default)]
    pub objects: ObjectSizes,
}

impl WorldConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/world.yaml)
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new(defaults::config_path());
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to a YAML string
    pub fn to_yaml_string(&self) -> std::result::Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate every structure and build the landmark registry.
    ///
    /// Fails on the first structure without landmarks or with a bad length,
    /// and on any landmark claimed by two structures.
    pub fn build_registry(&self) -> Result<StructureRegistry> {
        let mut builder = StructureRegistry::builder();
        for (index, section) in self.structures.iter().enumerate() {
            let spec = section.to_spec().map_err(|source| WorldError::Spec {
                structure: index,
                first_landmark: section.first_landmark(),
                source,
            })?;
            builder = builder.register(spec)?;
        }
        Ok(builder.build())
    }

    /// Build an empty world map over this configuration
    pub fn build_map(&self) -> Result<WorldMap> {
        let registry = Arc::new(self.build_registry()?);
        Ok(WorldMap::with_sizes(registry, self.objects))
    }

    /// Load a YAML file and build an empty world map from it
    pub fn load_map(path: &Path) -> Result<WorldMap> {
        Self::load(path)?.build_map()
    }
}
