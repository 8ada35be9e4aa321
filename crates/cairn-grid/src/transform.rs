//! Homogeneous transforms for grid resampling.
//!
//! A [`HomogeneousTransform`] is a 4x4 matrix combining a 3x3 rotation
//! block and a translation vector, applied to index-space coordinates.
//! The bottom row is always `[0, 0, 0, 1]` by construction.

use nalgebra::{Matrix4, Vector4};

/// A rigid (rotation plus translation) transform in homogeneous form.
#[derive(Debug, Clone, PartialEq)]
pub struct HomogeneousTransform {
    matrix: Matrix4<f64>,
}

impl HomogeneousTransform {
    /// Build a transform from a 3x3 rotation block and a translation
    /// vector.
    ///
    /// Rows 0 to 2 of the result hold `[R[i][0], R[i][1], R[i][2], T[i]]`;
    /// row 3 is the fixed `[0, 0, 0, 1]`. The transform rotates and then
    /// translates in the grid's coordinate frame.
    pub fn from_parts(rotation: [[f64; 3]; 3], translation: [f64; 3]) -> Self {
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            rotation[0][0], rotation[0][1], rotation[0][2], translation[0],
            rotation[1][0], rotation[1][1], rotation[1][2], translation[1],
            rotation[2][0], rotation[2][1], rotation[2][2], translation[2],
            0.0,            0.0,            0.0,            1.0,
        );
        Self { matrix }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// The underlying 4x4 matrix.
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Apply the transform to a point.
    pub fn apply(&self, point: [f64; 3]) -> [f64; 3] {
        let v = self.matrix * Vector4::new(point[0], point[1], point[2], 1.0);
        [v.x, v.y, v.z]
    }

    /// The inverse transform, or `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix
            .try_inverse()
            .map(|matrix| Self { matrix })
    }
}
