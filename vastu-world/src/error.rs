//! Error types for VastuWorld

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::structure::{LandmarkId, RegistryError, SpecError};

/// VastuWorld error type
///
/// Only configuration can fail. Map updates degrade to "no change this
/// cycle" instead of returning errors.
#[derive(Error, Debug)]
pub enum WorldError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("Invalid structure {structure}: {source}")]
    Spec {
        /// Position of the structure in the configuration (0-based)
        structure: usize,
        /// Smallest configured landmark, if any
        first_landmark: Option<LandmarkId>,
        #[source]
        source: SpecError,
    },

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

pub type Result<T> = std::result::Result<T, WorldError>;
