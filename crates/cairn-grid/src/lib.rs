//! # Cairn Grid
//!
//! Volumetric core of the Cairn compositing framework. This crate provides
//! the sparse scalar grid type and the operations the compositing pipeline
//! is built from:
//!
//! - [`grid`] — Sparse 3D scalar fields with a background value for
//!   unstored voxels.
//! - [`transform`] — Homogeneous 4x4 transforms built from a rotation
//!   block and a translation vector.
//! - [`resample`] — Nearest-neighbour resampling of a grid under a
//!   homogeneous transform.
//! - [`composite`] — Sum compositing of a contribution grid into a
//!   persistent output grid.

pub mod composite;
pub mod grid;
pub mod resample;
pub mod transform;
