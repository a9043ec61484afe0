//! Rotation - axis-angle rotation via Rodrigues' formula

use super::matrix::Matrix4;
use super::vector::Vector3;

impl Matrix4 {
    /// Rotation by `angle` radians about `axis` (right-handed).
    ///
    /// Returns `None` when the rotation is a no-op: a zero-length axis or an
    /// angle of exactly zero. The axis does not need to be unit length.
    pub fn rotation(axis: Vector3, angle: f64) -> Option<Self> {
        if angle == 0.0 {
            return None;
        }
        let Vector3 { x, y, z } = axis.normalized()?;

        // R = I + sin(t) K + (1 - cos(t)) K^2
        let k = [[0.0, -z, y], [z, 0.0, -x], [-y, x, 0.0]];
        let (sin, versine) = (angle.sin(), 1.0 - angle.cos());
        let mut block = [[0.0; 3]; 3];
        for (i, row) in block.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let k2: f64 = (0..3).map(|n| k[i][n] * k[n][j]).sum();
                let identity = if i == j { 1.0 } else { 0.0 };
                *cell = identity + sin * k[i][j] + versine * k2;
            }
        }
        Some(Self::from_linear(block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn rotated_css(axis: [f64; 3], angle: f64) -> String {
        Matrix4::rotation(Vector3::from(axis), angle)
            .unwrap_or_default()
            .to_css()
    }

    #[test]
    fn degenerate_rotations_are_none() {
        assert_eq!(Matrix4::rotation(Vector3::ZERO, 10.0), None);
        assert_eq!(Matrix4::rotation(Vector3::ONE, 0.0), None);
    }

    #[test]
    fn rotate_x() {
        assert_eq!(
            rotated_css([1.0, 0.0, 0.0], PI / 4.0),
            "matrix3d(1, 0, 0, 0, 0, 0.707107, 0.707107, 0, 0, -0.707107, 0.707107, 0, 0, 0, 0, 1)"
        );
    }

    #[test]
    fn rotate_y() {
        assert_eq!(
            rotated_css([0.0, 1.0, 0.0], PI / 2.0),
            "matrix3d(0, 0, -1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1)"
        );
    }

    #[test]
    fn rotate_z() {
        assert_eq!(
            rotated_css([0.0, 0.0, 1.0], -PI / 3.0),
            "matrix3d(0.5, -0.866025, 0, 0, 0.866025, 0.5, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1)"
        );
    }

    #[test]
    fn non_unit_axis_is_normalized() {
        assert_eq!(
            rotated_css([2.0, -4.0, 0.6], 0.4242),
            "matrix3d(0.928781, 0.019905, 0.370094, 0, -0.089556, 0.98102, 0.171987, 0, \
             -0.359646, -0.192883, 0.912935, 0, 0, 0, 0, 1)"
        );
    }

    #[test]
    fn rotation_keeps_bottom_row() {
        let m = Matrix4::rotation(Vector3::new(1.0, 2.0, 3.0), 1.0).unwrap();
        assert_eq!(m.rows()[3], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(m.translation_part(), Vector3::ZERO);
    }
}
