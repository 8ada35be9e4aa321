//! Nearest-neighbour grid resampling.
//!
//! [`resample`] produces a new grid whose voxels are the source grid seen
//! through a homogeneous transform. Each target voxel inside the
//! transformed extent of the source samples the source at the
//! inverse-transformed coordinate, snapped to the nearest integer
//! coordinate. No blending across neighbouring voxels takes place, which
//! keeps the operation deterministic and cheap; the output is destined for
//! summation, not direct inspection.

use thiserror::Error;

use crate::grid::{GridCoord, VoxelGrid};
use crate::transform::HomogeneousTransform;

/// Errors during grid resampling.
#[derive(Debug, Error)]
pub enum ResampleError {
    #[error("Transform is not invertible (zero determinant)")]
    NonInvertibleTransform,
}

/// Resample a grid under a homogeneous transform.
///
/// The source grid is only read; the returned grid carries the same
/// background value. Target voxels whose inverse-transformed coordinate
/// does not land on an active source voxel stay at the background.
pub fn resample(
    source: &VoxelGrid,
    transform: &HomogeneousTransform,
) -> Result<VoxelGrid, ResampleError> {
    let inverse = transform
        .inverse()
        .ok_or(ResampleError::NonInvertibleTransform)?;

    let mut target = VoxelGrid::with_background(source.background());
    let Some((min, max)) = source.active_bounds() else {
        return Ok(target);
    };

    // Each source voxel owns a half-open unit cell around its centre, so
    // the reachable target region is the image of the active box grown by
    // half a voxel on every side.
    let lo = [
        f64::from(min[0]) - 0.5,
        f64::from(min[1]) - 0.5,
        f64::from(min[2]) - 0.5,
    ];
    let hi = [
        f64::from(max[0]) + 0.5,
        f64::from(max[1]) + 0.5,
        f64::from(max[2]) + 0.5,
    ];
    let (tmin, tmax) = transformed_bounds(lo, hi, transform);

    for x in tmin[0]..=tmax[0] {
        for y in tmin[1]..=tmax[1] {
            for z in tmin[2]..=tmax[2] {
                let src = inverse.apply([f64::from(x), f64::from(y), f64::from(z)]);
                let nearest: GridCoord = [
                    src[0].round() as i32,
                    src[1].round() as i32,
                    src[2].round() as i32,
                ];
                if let Some(value) = source.get(nearest) {
                    target.set([x, y, z], value);
                }
            }
        }
    }

    Ok(target)
}

/// Axis-aligned integer bounds of a box's image under a transform.
fn transformed_bounds(
    lo: [f64; 3],
    hi: [f64; 3],
    transform: &HomogeneousTransform,
) -> (GridCoord, GridCoord) {
    let mut tmin = [f64::INFINITY; 3];
    let mut tmax = [f64::NEG_INFINITY; 3];

    for corner in 0..8u8 {
        let p = [
            if corner & 1 == 0 { lo[0] } else { hi[0] },
            if corner & 2 == 0 { lo[1] } else { hi[1] },
            if corner & 4 == 0 { lo[2] } else { hi[2] },
        ];
        let q = transform.apply(p);
        for axis in 0..3 {
            tmin[axis] = tmin[axis].min(q[axis]);
            tmax[axis] = tmax[axis].max(q[axis]);
        }
    }

    (
        [
            tmin[0].floor() as i32,
            tmin[1].floor() as i32,
            tmin[2].floor() as i32,
        ],
        [
            tmax[0].ceil() as i32,
            tmax[1].ceil() as i32,
            tmax[2].ceil() as i32,
        ],
    )
}
