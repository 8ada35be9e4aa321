//! Grid archive codec.
//!
//! An archive is a gzip-compressed bincode stream holding a list of named
//! grids. Model files conventionally hold a single grid named
//! [`DEFAULT_GRID_NAME`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use bincode2::{deserialize_from, serialize_into};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use cairn_grid::grid::VoxelGrid;

use crate::StoreError;

/// Conventional name of the primary grid in a model file.
pub const DEFAULT_GRID_NAME: &str = "voxelgrid";

/// A grid stored under a name inside an archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedGrid {
    pub name: String,
    pub grid: VoxelGrid,
}

#[derive(Debug, Serialize, Deserialize)]
struct GridArchive {
    grids: Vec<NamedGrid>,
}

/// Write a single grid to an archive file under the given name.
///
/// Any existing file at `path` is replaced.
pub fn write_grid(path: &Path, name: &str, grid: &VoxelGrid) -> Result<(), StoreError> {
    let archive = GridArchive {
        grids: vec![NamedGrid {
            name: name.to_string(),
            grid: grid.clone(),
        }],
    };

    let file = File::create(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    serialize_into(&mut encoder, &archive).map_err(|e| StoreError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut writer = encoder.finish().map_err(|e| StoreError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    writer.flush().map_err(|e| StoreError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(())
}

/// Read every grid stored in an archive file.
pub fn read_archive(path: &Path) -> Result<Vec<NamedGrid>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = GzDecoder::new(BufReader::new(file));
    let archive: GridArchive = deserialize_from(decoder).map_err(|e| StoreError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(archive.grids)
}

/// Read one named grid from an archive file.
pub fn read_grid(path: &Path, name: &str) -> Result<VoxelGrid, StoreError> {
    let grids = read_archive(path)?;
    grids
        .into_iter()
        .find(|named| named.name == name)
        .map(|named| named.grid)
        .ok_or_else(|| StoreError::MissingGrid {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}
