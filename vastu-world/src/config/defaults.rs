//! Default value functions for serde deserialization.

pub fn structure_length() -> f32 {
    100.0
}

pub fn config_path() -> &'static str {
    "configs/world.yaml"
}
