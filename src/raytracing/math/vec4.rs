use std::ops;

use approx::AbsDiffEq;

/// Homogeneous 4-component value. Points carry `w = 1`, directions `w = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl From<[f64; 4]> for Vec4 {
    #[inline(always)]
    fn from(value: [f64; 4]) -> Self {
        Vec4::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Vec4> for [f64; 4] {
    #[inline(always)]
    fn from(value: Vec4) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

impl ops::Add<Vec4> for Vec4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl ops::Sub<Vec4> for Vec4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl ops::Neg for Vec4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Vec4 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl ops::Mul<f64> for Vec4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f64) -> Self::Output {
        Vec4 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

impl ops::Div<f64> for Vec4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: f64) -> Self::Output {
        Vec4 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}

impl AbsDiffEq for Vec4 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl Vec4 {
    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Vec4 {
        Vec4 { x, y, z, w }
    }

    #[inline(always)]
    pub fn point(x: f64, y: f64, z: f64) -> Vec4 {
        Vec4 { x, y, z, w: 1.0 }
    }

    #[inline(always)]
    pub fn vector(x: f64, y: f64, z: f64) -> Vec4 {
        Vec4 { x, y, z, w: 0.0 }
    }

    /// The point at the origin of the current coordinate frame.
    #[inline(always)]
    pub fn origin() -> Vec4 {
        Vec4::point(0.0, 0.0, 0.0)
    }

    #[inline(always)]
    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    #[inline(always)]
    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// Same spatial components with `w` forced to zero.
    #[inline(always)]
    pub fn to_vector(self) -> Vec4 {
        Vec4::vector(self.x, self.y, self.z)
    }

    /// Dot product over x, y, z. The homogeneous component is ignored.
    #[inline(always)]
    pub fn dot(&self, other: Vec4) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product over x, y, z. The result is always a direction.
    #[inline(always)]
    pub fn cross(self, other: Vec4) -> Vec4 {
        Vec4::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline(always)]
    pub fn squared_len(self) -> f64 {
        self.dot(self)
    }

    #[inline(always)]
    pub fn len(self) -> f64 {
        self.squared_len().sqrt()
    }

    /// Scales the spatial part to unit length, leaving `w` untouched.
    /// A zero-length input yields NaN components.
    #[inline(always)]
    pub fn normalize(&self) -> Vec4 {
        let len = self.len();
        Vec4::new(self.x / len, self.y / len, self.z / len, self.w)
    }

    #[inline(always)]
    pub fn reflect(self, normal: Vec4) -> Vec4 {
        // mirror around the normal, which is expected to be unit length
        self - normal * 2.0 * self.dot(normal)
    }
}

#[inline(always)]
pub fn point(x: f64, y: f64, z: f64) -> Vec4 {
    Vec4::point(x, y, z)
}

#[inline(always)]
pub fn vector(x: f64, y: f64, z: f64) -> Vec4 {
    Vec4::vector(x, y, z)
}

#[inline(always)]
pub fn dot(u: Vec4, v: Vec4) -> f64 {
    u.dot(v)
}

#[inline(always)]
pub fn cross(u: Vec4, v: Vec4) -> Vec4 {
    u.cross(v)
}

#[inline(always)]
pub fn reflect(v: Vec4, n: Vec4) -> Vec4 {
    v.reflect(n)
}
