use super::{Mat4, Vec4};

/// Half-line starting at `origin` travelling along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec4,
    direction: Vec4,
}

impl Ray {
    pub fn new(origin: Vec4, direction: Vec4) -> Ray {
        Ray { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Vec4 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec4 {
        self.direction
    }

    /// Point reached after travelling `t` units of `direction`.
    pub fn at(&self, t: f64) -> Vec4 {
        self.origin + self.direction * t
    }

    /// Maps the ray through `m`. The direction has `w = 0`, so the
    /// translation part of `m` only moves the origin.
    pub fn transform(&self, m: &Mat4) -> Ray {
        Ray {
            origin: m * self.origin,
            direction: m * self.direction,
        }
    }
}
