//! # Cairn Store
//!
//! On-disk storage for the Cairn compositor. This crate provides:
//!
//! - **Grid archives** ([`archive`]) — gzip-compressed binary files
//!   holding one or more named voxel grids.
//! - **Name resolution** ([`resolver`]) — mapping a model name to the
//!   grid file that holds its voxelised form.

use std::path::PathBuf;

use thiserror::Error;

pub mod archive;
pub mod resolver;

pub use archive::{read_archive, read_grid, write_grid, NamedGrid, DEFAULT_GRID_NAME};
pub use resolver::StorageResolver;

/// Errors while loading or persisting voxel grids.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open grid file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Grid file {} could not be decoded: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Failed to write grid file {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    #[error("Grid '{name}' not found in {}", path.display())]
    MissingGrid { name: String, path: PathBuf },
}
