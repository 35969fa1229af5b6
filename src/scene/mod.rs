//! Boundary with the 3D renderer: the loaded model, ray casting, and the
//! loader that delivers the model.
//!
//! The integrator only ever talks to a model through [`SceneModel`] and to
//! ray casting through [`Raycaster`]. [`proxy`] provides box-proxy
//! implementations of both for headless hosts.

mod light;
pub mod proxy;

use glam::Vec3;
pub use light::{light_rig, Light, LightRole};

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction` (normalized here).
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A ray hit on the model surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Outward face normal at the hit.
    pub normal: Vec3,
    /// World-space hit point.
    pub point: Vec3,
    /// Distance along the ray.
    pub distance: f32,
}

/// Render flags the setup pass toggles on every mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshSettings {
    /// Smooth-shaded (interpolated) normals.
    pub smooth_normals: bool,
    /// Casts shadows onto other geometry.
    pub cast_shadow: bool,
    /// Receives shadows.
    pub receive_shadow: bool,
}

/// A loaded, renderable scene object.
///
/// Rotation is Euler XYZ in radians.
pub trait SceneModel {
    /// Uniform or per-axis scale.
    fn set_scale(&mut self, scale: Vec3);
    /// Root translation.
    fn set_position(&mut self, position: Vec3);
    /// Root rotation.
    fn set_rotation(&mut self, rotation: Vec3);
    /// Parent a light to the model root.
    fn add_light(&mut self, light: Light);
    /// Visit every mesh in the model's subtree.
    fn visit_meshes(&mut self, visit: &mut dyn FnMut(&mut MeshSettings));
}

/// Casts rays against a model.
pub trait Raycaster<M: ?Sized> {
    /// Intersections ordered nearest first; empty on a miss.
    fn cast(&self, ray: &Ray, model: &M) -> Vec<Intersection>;
}

/// Progress of an asynchronous model load.
#[derive(Debug)]
pub enum LoadEvent<M> {
    /// Bytes received so far.
    Progress {
        /// Bytes loaded.
        loaded: u64,
        /// Total bytes, if known.
        total: Option<u64>,
    },
    /// The model is ready.
    Completed(M),
    /// The load failed; the message is for logs and the host UI.
    Failed(String),
}

/// Loads models by URL and reports progress through [`LoadEvent`]s.
pub trait SceneLoader {
    /// The model type produced.
    type Model: SceneModel;

    /// Begin loading `url`.
    fn load(&mut self, url: &str);

    /// Next pending event, if any.
    fn poll_event(&mut self) -> Option<LoadEvent<Self::Model>>;
}
