//! # Cairn Scene
//!
//! Scene description handling for the Cairn compositor. A scene is a YAML
//! sequence of named models, each carrying one or more rigid transforms.
//! The [`config`] module deserialises the file and resolves the
//! schema-flexible transform field into a uniform list per model, so the
//! rest of the pipeline never sees the single-vs-sequence distinction.

pub mod config;

pub use config::{load_scene, parse_scene, ConfigError, ModelEntry, TransformSpec};
