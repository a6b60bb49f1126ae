use std::cmp::Ordering;
use std::fmt;

use super::math::{Color, Ray, Vec3, Vec4};
use super::shape::Shape;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    /// Share of the ambient light reflected, in `[0, 1]`.
    pub ambient: f64,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            color: Vec3::one(),
            ambient: 0.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec4,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Vec4, intensity: Color) -> Self {
        PointLight {
            position,
            intensity,
        }
    }
}

/// A single crossing between a ray and a shape.
///
/// `point` and `normal` are in world space, `time` is the ray parameter and may
/// be negative when the crossing lies behind the ray origin. The shape is
/// borrowed, never owned, so a record cannot outlive the shape that produced it.
#[derive(Clone, Copy)]
pub struct Interaction<'a> {
    pub point: Vec4,
    pub normal: Vec4,
    pub time: f64,
    pub shape: &'a dyn Shape,
}

impl<'a> Interaction<'a> {
    pub fn new(point: Vec4, normal: Vec4, time: f64, shape: &'a dyn Shape) -> Self {
        Interaction {
            point,
            normal,
            time,
            shape,
        }
    }

    /// True when this record was produced by `shape`.
    pub fn is_on(&self, shape: &dyn Shape) -> bool {
        std::ptr::addr_eq(self.shape, shape)
    }
}

impl fmt::Debug for Interaction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interaction")
            .field("point", &self.point)
            .field("normal", &self.normal)
            .field("time", &self.time)
            .field("shape", &format_args!("{:p}", self.shape))
            .finish()
    }
}

/// Picks the visible record: the lowest `time` that is not negative.
///
/// Among equal times the record that came first in `interactions` wins.
/// Records with a NaN time are never visible. Returns `None` when every
/// record lies behind the ray origin.
pub fn hit<'a>(interactions: &[Interaction<'a>]) -> Option<Interaction<'a>> {
    // NaN fails the filter, so the remaining times are totally ordered
    interactions
        .iter()
        .filter(|interaction| interaction.time >= 0.0)
        .min_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal))
        .copied()
}

/// Collects the records of `ray` against every shape, in shape order.
pub fn intersect_all<'a>(shapes: &'a [Box<dyn Shape>], ray: &Ray) -> Vec<Interaction<'a>> {
    shapes
        .iter()
        .flat_map(|shape| shape.intersect(ray))
        .collect()
}
