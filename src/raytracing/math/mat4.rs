use std::ops;

use approx::AbsDiffEq;

use super::Vec4;

/// 4x4 matrix stored row-major, applied to column vectors as `M * v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    value: [f64; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Mat4::identity()
    }
}

impl Mat4 {
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Mat4 {
        let mut value = [0.0; 16];
        for (row, values) in rows.iter().enumerate() {
            value[row * 4..row * 4 + 4].copy_from_slice(values);
        }
        Mat4 { value }
    }

    pub fn identity() -> Mat4 {
        Mat4 {
            value: [
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translate(tx: f64, ty: f64, tz: f64) -> Mat4 {
        Mat4 {
            value: [
                1.0, 0.0, 0.0, tx, 0.0, 1.0, 0.0, ty, 0.0, 0.0, 1.0, tz, 0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn scale(sx: f64, sy: f64, sz: f64) -> Mat4 {
        Mat4 {
            value: [
                sx, 0.0, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 0.0, sz, 0.0, 0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Right-handed rotation around the x axis, angle in radians.
    pub fn rotate_x(angle: f64) -> Mat4 {
        let (sin_t, cos_t) = angle.sin_cos();
        Mat4::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos_t, -sin_t, 0.0],
            [0.0, sin_t, cos_t, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotate_y(angle: f64) -> Mat4 {
        let (sin_t, cos_t) = angle.sin_cos();
        Mat4::from_rows([
            [cos_t, 0.0, sin_t, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin_t, 0.0, cos_t, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotate_z(angle: f64) -> Mat4 {
        let (sin_t, cos_t) = angle.sin_cos();
        Mat4::from_rows([
            [cos_t, -sin_t, 0.0, 0.0],
            [sin_t, cos_t, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.value[row * 4 + col]
    }

    // Determinant of the 3x3 matrix left after removing a row and a column
    fn minor(&self, row_to_remove: usize, col_to_remove: usize) -> f64 {
        let mut m = [0.0; 9];
        let mut idx = 0;
        for row in (0..4).filter(|r| *r != row_to_remove) {
            for col in (0..4).filter(|c| *c != col_to_remove) {
                m[idx] = self.at(row, col);
                idx += 1;
            }
        }
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    fn cofactor(&self, row: usize, col: usize) -> f64 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col)
    }

    pub fn determinant(&self) -> f64 {
        (0..4).map(|col| self.at(0, col) * self.cofactor(0, col)).sum()
    }

    /// Inverse through the adjugate. A singular matrix is not rejected:
    /// the division by a zero determinant leaves non-finite entries.
    pub fn inverse(&self) -> Mat4 {
        let det = self.determinant();
        let mut value = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                // transposed in place
                value[col * 4 + row] = self.cofactor(row, col) / det;
            }
        }
        Mat4 { value }
    }

    pub fn transpose(&self) -> Mat4 {
        let mut value = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                value[col * 4 + row] = self.at(row, col);
            }
        }
        Mat4 { value }
    }

    /// Composes two transforms: the result applies `self` first, then `other`.
    pub fn then(&self, other: &Mat4) -> Mat4 {
        *other * *self
    }
}

impl ops::Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut value = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                value[row * 4 + col] = (0..4).map(|k| self.at(row, k) * rhs.at(k, col)).sum();
            }
        }
        Mat4 { value }
    }
}

impl ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline(always)]
    fn mul(self, v: Vec4) -> Self::Output {
        &self * v
    }
}

impl ops::Mul<Vec4> for &Mat4 {
    type Output = Vec4;

    #[inline(always)]
    fn mul(self, v: Vec4) -> Self::Output {
        let m = &self.value;
        Vec4::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3] * v.w,
            m[4] * v.x + m[5] * v.y + m[6] * v.z + m[7] * v.w,
            m[8] * v.x + m[9] * v.y + m[10] * v.z + m[11] * v.w,
            m[12] * v.x + m[13] * v.y + m[14] * v.z + m[15] * v.w,
        )
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.value
            .iter()
            .zip(other.value.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

pub fn identity() -> Mat4 {
    Mat4::identity()
}

pub fn translate(tx: f64, ty: f64, tz: f64) -> Mat4 {
    Mat4::translate(tx, ty, tz)
}

pub fn scale(sx: f64, sy: f64, sz: f64) -> Mat4 {
    Mat4::scale(sx, sy, sz)
}

pub fn rotate_x(angle: f64) -> Mat4 {
    Mat4::rotate_x(angle)
}

pub fn rotate_y(angle: f64) -> Mat4 {
    Mat4::rotate_y(angle)
}

pub fn rotate_z(angle: f64) -> Mat4 {
    Mat4::rotate_z(angle)
}
