//! Sum compositing of voxel grids.
//!
//! [`accumulate`] folds a contribution grid into a persistent output grid
//! by per-voxel addition. The contribution is consumed: its voxel data is
//! transferred into the output, so the caller gives up the grid rather
//! than keeping an emptied shell. Accumulation order is commutative up to
//! floating-point rounding.

use crate::grid::VoxelGrid;

/// Add every active voxel of `contribution` into `output`.
///
/// Output voxels with no counterpart in the contribution are untouched.
/// Where the output has no active voxel yet, the contribution is added to
/// the output's background value.
pub fn accumulate(output: &mut VoxelGrid, contribution: VoxelGrid) {
    for (coord, value) in contribution.into_active() {
        let sum = output.value(coord) + value;
        output.set(coord, sum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_grids_union() {
        let mut output = VoxelGrid::new();
        output.set([0, 0, 0], 1.0);

        let mut contribution = VoxelGrid::new();
        contribution.set([5, 5, 5], 2.0);

        accumulate(&mut output, contribution);
        assert_eq!(output.active_count(), 2);
        assert_eq!(output.get([0, 0, 0]), Some(1.0));
        assert_eq!(output.get([5, 5, 5]), Some(2.0));
    }

    #[test]
    fn test_overlapping_voxels_sum() {
        let mut output = VoxelGrid::new();
        output.set([1, 2, 3], 1.5);

        let mut contribution = VoxelGrid::new();
        contribution.set([1, 2, 3], 0.25);

        accumulate(&mut output, contribution);
        assert_eq!(output.active_count(), 1);
        assert!((output.value([1, 2, 3]) - 1.75).abs() < 1e-6);
    }

    #[test]
    fn test_accumulation_order_is_commutative() {
        let mut a = VoxelGrid::new();
        a.set([0, 0, 0], 0.1);
        a.set([1, 0, 0], 0.2);

        let mut b = VoxelGrid::new();
        b.set([0, 0, 0], 0.3);
        b.set([2, 0, 0], 0.4);

        let mut ab = VoxelGrid::new();
        accumulate(&mut ab, a.clone());
        accumulate(&mut ab, b.clone());

        let mut ba = VoxelGrid::new();
        accumulate(&mut ba, b);
        accumulate(&mut ba, a);

        assert_eq!(ab.active_count(), ba.active_count());
        for (coord, value) in ab.iter() {
            assert!((value - ba.value(coord)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_accumulate_into_empty_output() {
        let mut contribution = VoxelGrid::new();
        contribution.set([-3, 0, 9], 4.0);

        let mut output = VoxelGrid::new();
        accumulate(&mut output, contribution);
        assert_eq!(output.get([-3, 0, 9]), Some(4.0));
    }
}
