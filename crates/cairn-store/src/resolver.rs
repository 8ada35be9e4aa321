//! Model-name to grid-file resolution.
//!
//! The compositor refers to models by name; the resolver maps a name to
//! the archive file expected to hold its voxelised grid. The models
//! directory is explicit configuration handed to the pipeline at
//! construction time, not a process-wide constant.

use std::path::{Path, PathBuf};

use cairn_grid::grid::VoxelGrid;

use crate::archive::{self, DEFAULT_GRID_NAME};
use crate::StoreError;

/// File extension used for grid archives.
pub const GRID_EXTENSION: &str = "vxg";

/// Resolves model names against a directory of grid archives.
#[derive(Debug, Clone)]
pub struct StorageResolver {
    root: PathBuf,
}

impl StorageResolver {
    /// Create a resolver rooted at a models directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The models directory this resolver reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The path expected to hold the named model's grid.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{GRID_EXTENSION}"))
    }

    /// Load the named model's source grid.
    pub fn load_source(&self, name: &str) -> Result<VoxelGrid, StoreError> {
        archive::read_grid(&self.resolve(name), DEFAULT_GRID_NAME)
    }
}
