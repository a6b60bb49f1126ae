use std::fmt::Debug;

use log::{debug, trace};

use super::core::{Interaction, Material};
use super::math::{Ray, Transform, Vec4};

/// Something a ray can be intersected with.
///
/// Implementors own a [`Material`] and a [`Transform`] placing them in the
/// world. Queries take `&self`, so a shape can be shared between threads as
/// long as nobody replaces its transform or material meanwhile.
pub trait Shape: Debug + Send + Sync {
    fn material(&self) -> &Material;

    fn set_material(&mut self, material: Material);

    fn transform(&self) -> &Transform;

    /// Replaces the matrix, inverse and inverse-transpose together.
    fn set_transform(&mut self, transform: Transform);

    /// Every crossing of the world-space `ray` with the shape, including the
    /// ones behind the ray origin. Use [`hit`](super::core::hit) to pick the
    /// visible one.
    fn intersect(&self, ray: &Ray) -> Vec<Interaction<'_>>;

    /// Unit surface normal, in world space, at the world-space `point`.
    fn normal_at(&self, point: Vec4) -> Vec4;
}

/// Unit sphere centered on the local origin. Size and placement come
/// entirely from its transform.
#[derive(Debug, Clone, Default)]
pub struct Sphere {
    material: Material,
    transform: Transform,
}

impl Sphere {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(transform: Transform) -> Self {
        Sphere {
            material: Material::default(),
            transform,
        }
    }
}

impl Shape for Sphere {
    fn material(&self) -> &Material {
        &self.material
    }

    fn set_material(&mut self, material: Material) {
        debug!("sphere material set to {:?}", material);
        self.material = material;
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        debug!("sphere transform set to {:?}", transform.matrix());
        self.transform = transform;
    }

    fn intersect(&self, ray: &Ray) -> Vec<Interaction<'_>> {
        let local_ray = ray.transform(self.transform.inverse());
        let sphere_to_ray = local_ray.origin() - Vec4::origin();
        let direction = local_ray.direction();

        let a = direction.dot(direction);
        let b = 2.0 * direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.0;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            trace!("ray {:?} misses sphere", ray);
            return Vec::new();
        }

        // a tangent ray still yields two coincident crossings
        let sqrt_d = discriminant.sqrt();
        let t0 = (-b - sqrt_d) / (2.0 * a);
        let t1 = (-b + sqrt_d) / (2.0 * a);
        trace!("ray {:?} crosses sphere at t = {} and t = {}", ray, t0, t1);

        [t0, t1]
            .into_iter()
            .map(|t| {
                let point = self.transform.matrix() * local_ray.at(t);
                Interaction::new(point, self.normal_at(point), t, self)
            })
            .collect()
    }

    fn normal_at(&self, point: Vec4) -> Vec4 {
        let local_point = self.transform.inverse() * point;
        let local_normal = local_point - Vec4::origin();
        // the inverse-transpose does not preserve w, reset it before normalizing
        let world_normal = (self.transform.inverse_transpose() * local_normal).to_vector();
        world_normal.normalize()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::raytracing::core::hit;
    use crate::raytracing::math::{color, point, rotate_z, scale, translate, vector};
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-6;

    fn times(xs: &[Interaction]) -> Vec<f64> {
        xs.iter().map(|i| i.time).collect()
    }

    #[test]
    fn test_ray_intersects_at_two_points() {
        let s = Sphere::new();
        let ray = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        let xs = s.intersect(&ray);
        assert_eq!(times(&xs), vec![4.0, 6.0]);
        assert_eq!(xs[0].point, point(0.0, 0.0, -1.0));
        assert_eq!(xs[1].point, point(0.0, 0.0, 1.0));
        assert_eq!(xs[0].normal, vector(0.0, 0.0, -1.0));
        assert_eq!(xs[1].normal, vector(0.0, 0.0, 1.0));
        assert!(xs.iter().all(|i| i.is_on(&s)));
    }

    #[test]
    fn test_ray_tangent_yields_two_coincident_records() {
        let s = Sphere::new();
        let ray = Ray::new(point(0.0, 1.0, -5.0), vector(0.0, 0.0, 1.0));
        let xs = s.intersect(&ray);
        assert_eq!(times(&xs), vec![5.0, 5.0]);
        assert_eq!(xs[0].point, point(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_ray_misses() {
        let s = Sphere::new();
        let ray = Ray::new(point(0.0, 2.0, -5.0), vector(0.0, 0.0, 1.0));
        assert!(s.intersect(&ray).is_empty());
    }

    #[test]
    fn test_ray_originates_inside() {
        let s = Sphere::new();
        let ray = Ray::new(point(0.0, 0.0, 0.0), vector(0.0, 0.0, 1.0));
        assert_eq!(times(&s.intersect(&ray)), vec![-1.0, 1.0]);
    }

    #[test]
    fn test_sphere_behind_ray() {
        let s = Sphere::new();
        let ray = Ray::new(point(0.0, 0.0, 5.0), vector(0.0, 0.0, 1.0));
        let xs = s.intersect(&ray);
        assert_eq!(times(&xs), vec![-6.0, -4.0]);
        assert!(hit(&xs).is_none());
    }

    #[test]
    fn test_default_transform_and_material() {
        let s = Sphere::new();
        assert_eq!(*s.transform(), Transform::default());
        assert_eq!(*s.material(), Material::default());
    }

    #[test]
    fn test_set_transform_replaces_whole_triple() {
        let mut s = Sphere::new();
        let t = Transform::new(translate(2.0, 3.0, 4.0));
        s.set_transform(t);
        assert_eq!(*s.transform(), t);
        assert_eq!(*s.transform().inverse(), *t.inverse());
    }

    #[test]
    fn test_set_material() {
        let mut s = Sphere::new();
        let m = Material {
            color: color(1.0, 0.2, 1.0),
            ambient: 1.0,
        };
        s.set_material(m);
        assert_eq!(*s.material(), m);
    }

    #[test]
    fn test_scaled_sphere_intersection() {
        let s = Sphere::with_transform(Transform::new(scale(2.0, 2.0, 2.0)));
        let ray = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        let xs = s.intersect(&ray);
        assert_eq!(xs.len(), 2);
        assert_abs_diff_eq!(xs[0].time, 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(xs[1].time, 7.0, epsilon = EPSILON);
        assert_abs_diff_eq!(xs[0].point, point(0.0, 0.0, -2.0), epsilon = EPSILON);
        assert_abs_diff_eq!(xs[1].point, point(0.0, 0.0, 2.0), epsilon = EPSILON);
    }

    #[test]
    fn test_translated_sphere_misses() {
        let s = Sphere::with_transform(Transform::new(translate(5.0, 0.0, 0.0)));
        let ray = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        assert!(s.intersect(&ray).is_empty());
    }

    #[test]
    fn test_intersect_points_are_world_space() {
        let s = Sphere::with_transform(Transform::new(translate(0.0, 0.0, 3.0)));
        let ray = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        let xs = s.intersect(&ray);
        assert_eq!(times(&xs), vec![7.0, 9.0]);
        for i in &xs {
            assert_abs_diff_eq!(i.point, ray.at(i.time), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_normal_on_axes() {
        let s = Sphere::new();
        assert_eq!(s.normal_at(point(1.0, 0.0, 0.0)), vector(1.0, 0.0, 0.0));
        assert_eq!(s.normal_at(point(0.0, 1.0, 0.0)), vector(0.0, 1.0, 0.0));
        assert_eq!(s.normal_at(point(0.0, 0.0, 1.0)), vector(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_normal_at_non_axial_point() {
        let s = Sphere::new();
        let k = 3.0_f64.sqrt() / 3.0;
        let n = s.normal_at(point(k, k, k));
        assert_abs_diff_eq!(n, vector(k, k, k), epsilon = EPSILON);
        assert_abs_diff_eq!(n, n.normalize(), epsilon = EPSILON);
    }

    #[test]
    fn test_normal_on_translated_sphere() {
        let s = Sphere::with_transform(Transform::new(translate(0.0, 1.0, 0.0)));
        let n = s.normal_at(point(0.0, 1.70711, -0.70711));
        assert_abs_diff_eq!(n, vector(0.0, 0.70711, -0.70711), epsilon = 1e-5);
        assert!(n.is_vector());
    }

    #[test]
    fn test_normal_on_transformed_sphere() {
        let m = scale(1.0, 0.5, 1.0) * rotate_z(PI / 5.0);
        let s = Sphere::with_transform(Transform::new(m));
        let k = 2.0_f64.sqrt() / 2.0;
        let n = s.normal_at(point(0.0, k, -k));
        assert_abs_diff_eq!(n, vector(0.0, 0.97014, -0.24254), epsilon = 1e-5);
        assert_abs_diff_eq!(n.len(), 1.0, epsilon = EPSILON);
        assert!(n.is_vector());
    }

    #[test]
    fn test_normal_under_non_uniform_scale_uses_inverse_transpose() {
        let s = Sphere::with_transform(Transform::new(scale(2.0, 1.0, 1.0)));
        // (sqrt(2), sqrt(2)/2, 0) lies on the ellipsoid x^2/4 + y^2 = 1
        let p = point(2.0_f64.sqrt(), 2.0_f64.sqrt() / 2.0, 0.0);
        let n = s.normal_at(p);
        // gradient of the implicit surface is (x/2, 2y, 0)
        let expected = vector(p.x / 2.0, 2.0 * p.y, 0.0).normalize();
        assert_abs_diff_eq!(n, expected, epsilon = EPSILON);
        assert_abs_diff_eq!(n.len(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_intersection_normals_are_unit_length() {
        let m = translate(1.0, -1.0, 2.0) * scale(3.0, 0.5, 1.5);
        let s = Sphere::with_transform(Transform::new(m));
        let ray = Ray::new(point(1.0, -1.0, -10.0), vector(0.1, 0.02, 1.0));
        let xs = s.intersect(&ray);
        assert_eq!(xs.len(), 2);
        for i in &xs {
            assert_abs_diff_eq!(i.normal.len(), 1.0, epsilon = EPSILON);
            assert!(i.normal.is_vector());
            assert!(i.point.is_point());
        }
    }

    #[test]
    fn test_singular_transform_propagates_nan() {
        let s = Sphere::with_transform(Transform::new(scale(0.0, 0.0, 0.0)));
        let ray = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        let xs = s.intersect(&ray);
        assert_eq!(xs.len(), 2);
        assert!(xs.iter().all(|i| i.time.is_nan()));
        assert!(hit(&xs).is_none());
    }

    #[test]
    fn test_zero_length_direction_propagates_nan() {
        let s = Sphere::new();
        let ray = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 0.0));
        let xs = s.intersect(&ray);
        assert_eq!(xs.len(), 2);
        assert!(xs.iter().all(|i| i.time.is_nan()));
        assert!(hit(&xs).is_none());
    }
}
