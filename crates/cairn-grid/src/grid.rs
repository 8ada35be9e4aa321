//! Sparse 3D scalar grids.
//!
//! A [`VoxelGrid`] stores scalar values at integer index-space coordinates.
//! Only explicitly written voxels are kept ("active" voxels); every other
//! coordinate reads as the grid's background value. Grids are the unit of
//! storage for voxelised models and the unit of exchange between the
//! resampling and compositing stages.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An integer index-space coordinate.
pub type GridCoord = [i32; 3];

/// A sparse 3D scalar field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoxelGrid {
    voxels: HashMap<GridCoord, f32>,
    background: f32,
}

impl VoxelGrid {
    /// Create an empty grid with a zero background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty grid with the given background value.
    pub fn with_background(background: f32) -> Self {
        Self {
            voxels: HashMap::new(),
            background,
        }
    }

    /// The value returned for coordinates with no active voxel.
    pub fn background(&self) -> f32 {
        self.background
    }

    /// Read the value at a coordinate, falling back to the background.
    pub fn value(&self, coord: GridCoord) -> f32 {
        self.voxels.get(&coord).copied().unwrap_or(self.background)
    }

    /// Read the value at a coordinate if the voxel is active.
    pub fn get(&self, coord: GridCoord) -> Option<f32> {
        self.voxels.get(&coord).copied()
    }

    /// Write a value, marking the voxel active.
    pub fn set(&mut self, coord: GridCoord, value: f32) {
        self.voxels.insert(coord, value);
    }

    /// Number of active voxels.
    pub fn active_count(&self) -> usize {
        self.voxels.len()
    }

    /// Whether the grid has no active voxels.
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Iterate over active voxels.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, f32)> + '_ {
        self.voxels.iter().map(|(&coord, &value)| (coord, value))
    }

    /// Consume the grid, yielding its active voxels.
    pub fn into_active(self) -> impl Iterator<Item = (GridCoord, f32)> {
        self.voxels.into_iter()
    }

    /// Inclusive bounding box of the active voxels, or `None` if the grid
    /// is empty.
    pub fn active_bounds(&self) -> Option<(GridCoord, GridCoord)> {
        let mut coords = self.voxels.keys();
        let first = *coords.next()?;
        let mut min = first;
        let mut max = first;
        for &coord in coords {
            for axis in 0..3 {
                min[axis] = min[axis].min(coord[axis]);
                max[axis] = max[axis].max(coord[axis]);
            }
        }
        Some((min, max))
    }
}
