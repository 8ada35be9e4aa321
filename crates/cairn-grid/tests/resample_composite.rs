//! Integration tests: resampling feeding directly into compositing.

use cairn_grid::composite::accumulate;
use cairn_grid::grid::VoxelGrid;
use cairn_grid::resample::resample;
use cairn_grid::transform::HomogeneousTransform;

const IDENTITY_R: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

#[test]
fn test_identity_applied_twice_doubles_values() {
    let mut source = VoxelGrid::new();
    source.set([0, 0, 0], 1.0);
    source.set([2, 1, -1], 0.5);

    let mut output = VoxelGrid::new();
    for _ in 0..2 {
        let transform = HomogeneousTransform::from_parts(IDENTITY_R, [0.0; 3]);
        let contribution = resample(&source, &transform).unwrap();
        accumulate(&mut output, contribution);
    }

    assert_eq!(output.active_count(), source.active_count());
    for (coord, value) in source.iter() {
        assert!((output.value(coord) - 2.0 * value).abs() < 1e-6);
    }
}

#[test]
fn test_translated_copies_compose_into_one_grid() {
    let mut source = VoxelGrid::new();
    source.set([0, 0, 0], 1.0);

    let shifts = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

    let mut output = VoxelGrid::new();
    for shift in shifts {
        let transform = HomogeneousTransform::from_parts(IDENTITY_R, shift);
        let contribution = resample(&source, &transform).unwrap();
        accumulate(&mut output, contribution);
    }

    assert_eq!(output.active_count(), 3);
    assert_eq!(output.get([0, 0, 0]), Some(1.0));
    assert_eq!(output.get([1, 0, 0]), Some(1.0));
    assert_eq!(output.get([0, 1, 0]), Some(1.0));
}
