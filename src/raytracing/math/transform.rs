use super::Mat4;

/// An affine map together with its inverse and inverse-transpose.
///
/// All three matrices are computed once when the transform is built and the
/// fields are private, so a shape can only swap the whole triple at once.
/// The matrix is expected to be invertible; a singular one produces
/// non-finite entries that propagate into every query using the transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    m: Mat4,
    inv: Mat4,
    inv_t: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Transform::new(Mat4::identity())
    }
}

impl From<Mat4> for Transform {
    fn from(m: Mat4) -> Self {
        Transform::new(m)
    }
}

impl Transform {
    pub fn new(m: Mat4) -> Transform {
        Transform::with_inverse(m, m.inverse())
    }

    /// Builds the transform from a matrix whose inverse is already known,
    /// skipping the inversion.
    pub fn with_inverse(m: Mat4, inv: Mat4) -> Transform {
        Transform {
            m,
            inv,
            inv_t: inv.transpose(),
        }
    }

    #[inline]
    pub fn matrix(&self) -> &Mat4 {
        &self.m
    }

    #[inline]
    pub fn inverse(&self) -> &Mat4 {
        &self.inv
    }

    #[inline]
    pub fn inverse_transpose(&self) -> &Mat4 {
        &self.inv_t
    }
}
