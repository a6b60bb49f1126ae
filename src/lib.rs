//! Geometric core of a ray tracer: homogeneous point and vector algebra,
//! cached affine transforms, ray-shape intersection and hit selection.

pub mod raytracing;

pub use raytracing::core::{hit, intersect_all, Interaction, Material, PointLight};
pub use raytracing::shape::{Shape, Sphere};
