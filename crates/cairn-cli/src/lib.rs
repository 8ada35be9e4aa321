//! # Cairn CLI
//!
//! Command-line front end for the Cairn compositor. The [`runner`] module
//! drives the full pipeline: scene configuration in, one accumulated
//! voxel grid out.

pub mod runner;
