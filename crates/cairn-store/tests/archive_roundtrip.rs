//! Integration tests for the grid archive codec.

use std::path::PathBuf;

use cairn_grid::grid::VoxelGrid;
use cairn_store::{read_archive, read_grid, write_grid, StoreError, DEFAULT_GRID_NAME};

fn temp_archive(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cairn_archive_{tag}_{}.vxg", std::process::id()))
}

fn sample_grid() -> VoxelGrid {
    let mut grid = VoxelGrid::new();
    grid.set([0, 0, 0], 1.0);
    grid.set([-4, 2, 17], 0.125);
    grid.set([3, 3, 3], 2.5);
    grid
}

#[test]
fn test_write_then_read_round_trip() {
    let path = temp_archive("round_trip");
    let grid = sample_grid();

    write_grid(&path, DEFAULT_GRID_NAME, &grid).unwrap();
    let loaded = read_grid(&path, DEFAULT_GRID_NAME).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, grid);
}

#[test]
fn test_counts_and_bounds_survive_the_codec() {
    let path = temp_archive("accounting");
    let grid = sample_grid();

    write_grid(&path, DEFAULT_GRID_NAME, &grid).unwrap();
    let loaded = read_grid(&path, DEFAULT_GRID_NAME).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.active_count(), grid.active_count());
    assert_eq!(loaded.active_bounds(), grid.active_bounds());
}

#[test]
fn test_absent_grid_name_is_reported() {
    let path = temp_archive("absent_name");
    write_grid(&path, DEFAULT_GRID_NAME, &sample_grid()).unwrap();

    let result = read_grid(&path, "no_such_grid");
    std::fs::remove_file(&path).ok();

    assert!(matches!(
        result,
        Err(StoreError::MissingGrid { name, .. }) if name == "no_such_grid"
    ));
}

#[test]
fn test_read_archive_lists_stored_grids() {
    let path = temp_archive("listing");
    write_grid(&path, DEFAULT_GRID_NAME, &sample_grid()).unwrap();

    let grids = read_archive(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(grids.len(), 1);
    assert_eq!(grids[0].name, DEFAULT_GRID_NAME);
    assert_eq!(grids[0].grid.active_count(), 3);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let path = temp_archive("never_written");
    assert!(matches!(
        read_grid(&path, DEFAULT_GRID_NAME),
        Err(StoreError::Io { .. })
    ));
}
