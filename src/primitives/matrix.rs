//! Matrix4 - 4x4 homogeneous transform
//!
//! Row-major storage with the column-vector convention (`p' = M * p`), so the
//! translation lives in column 3. CSS `matrix3d()` lists components column by
//! column; [`Matrix4::to_css`] and [`Matrix4::from_column_major`] do that
//! reordering.

use super::number::format_number;
use super::vector::Vector3;

/// Immutable 4x4 matrix of doubles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    rows: [[f64; 4]; 4],
}

impl Matrix4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Build from 16 components in CSS `matrix3d()` order.
    pub fn from_column_major(c: [f64; 16]) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, value) in c.into_iter().enumerate() {
            rows[i % 4][i / 4] = value;
        }
        Self { rows }
    }

    pub fn translation(v: Vector3) -> Self {
        Self::IDENTITY.with_translation(v)
    }

    pub fn scaling(v: Vector3) -> Self {
        let mut rows = Self::IDENTITY.rows;
        rows[0][0] = v.x;
        rows[1][1] = v.y;
        rows[2][2] = v.z;
        Self { rows }
    }

    /// Embed a 3x3 linear block in an otherwise-identity matrix.
    pub fn from_linear(block: [[f64; 3]; 3]) -> Self {
        let mut rows = Self::IDENTITY.rows;
        for (row, src) in rows.iter_mut().zip(block) {
            row[..3].copy_from_slice(&src);
        }
        Self { rows }
    }

    /// Standard product `self * rhs`; `rhs` acts on a point first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Self { rows }
    }

    pub const fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    pub const fn rows(&self) -> &[[f64; 4]; 4] {
        &self.rows
    }

    /// The 16 components in row-major reading order.
    pub fn components(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (i, value) in out.iter_mut().enumerate() {
            *value = self.rows[i / 4][i % 4];
        }
        out
    }

    /// The 16 components in CSS `matrix3d()` order.
    pub fn column_major(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (i, value) in out.iter_mut().enumerate() {
            *value = self.rows[i % 4][i / 4];
        }
        out
    }

    pub fn translation_part(&self) -> Vector3 {
        Vector3::new(self.rows[0][3], self.rows[1][3], self.rows[2][3])
    }

    /// Same matrix with its translation column replaced.
    pub fn with_translation(&self, v: Vector3) -> Self {
        let mut rows = self.rows;
        rows[0][3] = v.x;
        rows[1][3] = v.y;
        rows[2][3] = v.z;
        Self { rows }
    }

    fn column(&self, j: usize) -> Vector3 {
        Vector3::new(self.rows[0][j], self.rows[1][j], self.rows[2][j])
    }

    /// Gram-Schmidt over the linear columns, as CSS `unmatrix` does.
    ///
    /// Yields each axis' unit direction (`None` once it has collapsed) and
    /// its scale. What Gram-Schmidt strips off a column is its skew.
    fn axes(&self) -> [(Option<Vector3>, f64); 3] {
        let mut out: [(Option<Vector3>, f64); 3] = [(None, 0.0); 3];
        for j in 0..3 {
            let mut c = self.column(j);
            for q in out[..j].iter().filter_map(|(q, _)| *q) {
                c = c - q * q.dot(c);
            }
            let scale = c.length();
            let direction = (scale > COLLAPSED).then(|| c * (1.0 / scale));
            out[j] = (direction, if direction.is_some() { scale } else { 0.0 });
        }
        out
    }

    /// Per-axis scale of the linear block, skew and rotation factored out.
    pub fn scale_part(&self) -> Vector3 {
        let [(_, x), (_, y), (_, z)] = self.axes();
        Vector3::new(x, y, z)
    }

    /// Same matrix with its per-axis scale replaced.
    ///
    /// Rotation, skew and translation are kept. A collapsed axis has no
    /// direction left, so it is rebuilt perpendicular to the surviving ones.
    pub fn with_scale(&self, v: Vector3) -> Self {
        let axes = self.axes();
        let target = v.to_array();
        let mut basis: Vec<Vector3> = axes.iter().filter_map(|(q, _)| *q).collect();
        let mut rows = self.rows;
        for (j, (direction, scale)) in axes.into_iter().enumerate() {
            let column = match direction {
                Some(_) => self.column(j) * (target[j] / scale),
                None => {
                    let q = perpendicular(&basis, j);
                    basis.push(q);
                    q * target[j]
                }
            };
            for (row, value) in rows.iter_mut().zip(column.to_array()) {
                row[j] = value;
            }
        }
        Self { rows }
    }

    /// CSS `matrix3d(...)` serialization.
    pub fn to_css(&self) -> String {
        let parts: Vec<String> = self.column_major().into_iter().map(format_number).collect();
        format!("matrix3d({})", parts.join(", "))
    }
}

/// Column length below which an axis counts as collapsed.
const COLLAPSED: f64 = 1e-12;

/// A unit vector perpendicular to every vector in `basis`, preferring axis `j`.
fn perpendicular(basis: &[Vector3], j: usize) -> Vector3 {
    let unit = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ];
    (0..3)
        .map(|k| unit[(j + k) % 3])
        .map(|e| basis.iter().fold(e, |c, q| c - *q * q.dot(c)))
        .find_map(|c| c.normalized().filter(|_| c.length() > COLLAPSED))
        .unwrap_or(unit[j])
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for Matrix4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
