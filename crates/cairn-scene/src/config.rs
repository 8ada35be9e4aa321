//! YAML scene configuration deserialisation.
//!
//! The external schema is a sequence of model entries:
//!
//! ```yaml
//! - name: chair_01
//!   transform:
//!     R: [[1,0,0],[0,1,0],[0,0,1]]
//!     T: [0,0,0]
//! ```
//!
//! The `transform` field is polymorphic: a mapping with `R` and `T` keys
//! describes exactly one transform, while a sequence of such mappings
//! describes several. Parsing resolves both shapes into an ordered
//! `Vec<TransformSpec>` once, up front.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors while reading or validating a scene description.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene description: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Model '{model}' has an empty transform list")]
    NoTransforms { model: String },
}

/// One rigid transform: a 3x3 rotation block and a translation vector.
///
/// Both fields are mandatory and must have full arity. There is no
/// identity fallback for a missing or partial entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransformSpec {
    /// Rotation block, row-major.
    #[serde(rename = "R")]
    pub rotation: [[f64; 3]; 3],
    /// Translation vector.
    #[serde(rename = "T")]
    pub translation: [f64; 3],
}

/// The polymorphic `transform` field as it appears on disk.
///
/// A mapping that exposes `R` directly is a single spec; anything else
/// must be a sequence of specs. A mapping without `R` matches neither
/// shape and is rejected at parse time.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransformField {
    Single(TransformSpec),
    Many(Vec<TransformSpec>),
}

/// A raw model entry, as deserialised from the scene file.
#[derive(Debug, Clone, Deserialize)]
struct ModelConfig {
    name: String,
    transform: TransformField,
}

impl ModelConfig {
    /// Resolve the polymorphic transform field into a uniform list.
    fn resolve(self) -> Result<ModelEntry, ConfigError> {
        let transforms = match self.transform {
            TransformField::Single(spec) => vec![spec],
            TransformField::Many(specs) => {
                if specs.is_empty() {
                    return Err(ConfigError::NoTransforms { model: self.name });
                }
                specs
            }
        };
        Ok(ModelEntry {
            name: self.name,
            transforms,
        })
    }
}

/// A model entry with its transforms resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEntry {
    /// Name used to locate the model's source grid.
    pub name: String,
    /// Ordered transforms to apply to the source grid. Never empty.
    pub transforms: Vec<TransformSpec>,
}

/// Parse a scene description from a string.
pub fn parse_scene(content: &str) -> Result<Vec<ModelEntry>, ConfigError> {
    let raw: Vec<ModelConfig> = serde_yaml::from_str(content)?;
    raw.into_iter().map(ModelConfig::resolve).collect()
}

/// Load and parse a scene description file.
pub fn load_scene(path: &Path) -> Result<Vec<ModelEntry>, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_scene(&content)
}
