//! Box-proxy model and ray caster.
//!
//! Stands in for a real scene graph where only the model's bounds matter:
//! headless simulation and tests. Hits are computed against the model's
//! scaled, translated bounding box; rotation is ignored.

use glam::Vec3;

use super::{Intersection, Light, MeshSettings, Ray, Raycaster, SceneModel};

/// Minimal scene object: a bounding box, a root transform, attached lights
/// and per-mesh render flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyModel {
    /// Unscaled half-size of the bounding box.
    pub half_extents: Vec3,
    /// Current root scale.
    pub scale: Vec3,
    /// Current root translation.
    pub position: Vec3,
    /// Current root rotation (Euler XYZ, radians).
    pub rotation: Vec3,
    /// Lights parented to the root.
    pub lights: Vec<Light>,
    /// One entry per mesh in the subtree.
    pub meshes: Vec<MeshSettings>,
}

impl ProxyModel {
    /// Unit-scaled proxy with `mesh_count` meshes.
    pub fn new(half_extents: Vec3, mesh_count: usize) -> Self {
        Self {
            half_extents,
            scale: Vec3::ONE,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            lights: Vec::new(),
            meshes: vec![MeshSettings::default(); mesh_count],
        }
    }

    /// World-space box corners (min, max).
    pub fn world_bounds(&self) -> (Vec3, Vec3) {
        let half = self.half_extents * self.scale.abs();
        (self.position - half, self.position + half)
    }
}

impl SceneModel for ProxyModel {
    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    fn visit_meshes(&mut self, visit: &mut dyn FnMut(&mut MeshSettings)) {
        for mesh in &mut self.meshes {
            visit(mesh);
        }
    }
}

/// Slab-test ray caster against [`ProxyModel::world_bounds`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsRaycaster;

/// Entry or exit event on one slab.
#[derive(Clone, Copy)]
struct SlabHit {
    t: f32,
    normal: Vec3,
}

impl Raycaster<ProxyModel> for BoundsRaycaster {
    fn cast(&self, ray: &Ray, model: &ProxyModel) -> Vec<Intersection> {
        let (min, max) = model.world_bounds();
        let mut enter = SlabHit {
            t: f32::NEG_INFINITY,
            normal: Vec3::ZERO,
        };
        let mut exit = SlabHit {
            t: f32::INFINITY,
            normal: Vec3::ZERO,
        };

        for axis in 0..3 {
            let o = ray.origin[axis];
            let d = ray.direction[axis];
            if d.abs() < f32::EPSILON {
                if o < min[axis] || o > max[axis] {
                    return Vec::new();
                }
                continue;
            }
            let mut axis_normal = Vec3::ZERO;
            axis_normal[axis] = d.signum();
            let t1 = (min[axis] - o) / d;
            let t2 = (max[axis] - o) / d;
            let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
            if near > enter.t {
                // Entering through the face the ray points against
                enter = SlabHit {
                    t: near,
                    normal: -axis_normal,
                };
            }
            if far < exit.t {
                exit = SlabHit {
                    t: far,
                    normal: axis_normal,
                };
            }
        }

        if enter.t > exit.t || exit.t < 0.0 {
            return Vec::new();
        }

        [enter, exit]
            .into_iter()
            .filter(|hit| hit.t >= 0.0)
            .map(|hit| Intersection {
                normal: hit.normal,
                point: ray.at(hit.t),
                distance: hit.t,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> ProxyModel {
        ProxyModel::new(Vec3::ONE, 2)
    }

    #[test]
    fn head_on_hit_reports_front_face_first() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let hits = BoundsRaycaster.cast(&ray, &unit_box());
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].normal, Vec3::Z);
        assert!((hits[0].distance - 4.0).abs() < 1e-5);
        assert_eq!(hits[1].normal, Vec3::NEG_Z);
        assert!(hits[0].distance < hits[1].distance);
    }

    #[test]
    fn miss_returns_nothing() {
        let ray = Ray::new(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(BoundsRaycaster.cast(&ray, &unit_box()).is_empty());
    }

    #[test]
    fn box_behind_ray_is_not_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(BoundsRaycaster.cast(&ray, &unit_box()).is_empty());
    }

    #[test]
    fn origin_inside_reports_exit_only() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let hits = BoundsRaycaster.cast(&ray, &unit_box());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].normal, Vec3::Y);
    }

    #[test]
    fn respects_scale_and_position() {
        let mut model = unit_box();
        model.set_scale(Vec3::splat(0.5));
        model.set_position(Vec3::new(0.0, 2.0, 0.0));
        let ray = Ray::new(Vec3::new(0.0, 2.4, 5.0), Vec3::NEG_Z);
        let hits = BoundsRaycaster.cast(&ray, &model);
        assert!((hits[0].point.z - 0.5).abs() < 1e-5);
        let above = Ray::new(Vec3::new(0.0, 2.6, 5.0), Vec3::NEG_Z);
        assert!(BoundsRaycaster.cast(&above, &model).is_empty());
    }
}
