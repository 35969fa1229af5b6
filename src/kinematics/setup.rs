//! One-shot model setup: uniform scale, starting orientation and scene
//! decoration.

use glam::Vec3;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::input::Viewport;
use crate::options::{KinematicsOptions, LightingOptions};
use crate::scene::{light_rig, MeshSettings, SceneModel};

/// Uniform scale fitting the model to the viewport: the smaller of
/// width/divisor and height/divisor, capped at `max_scale`.
pub fn model_scale(viewport: &Viewport, options: &KinematicsOptions) -> f32 {
    let divisor = options.scale_divisor(viewport.device);
    (viewport.width / divisor)
        .min(viewport.height / divisor)
        .min(options.max_scale)
}

/// Pick one preset uniformly at random. An empty table yields no rotation.
pub fn pick_orientation<R: Rng + ?Sized>(
    rng: &mut R,
    presets: &[[f32; 3]],
) -> Vec3 {
    presets
        .choose(rng)
        .map_or(Vec3::ZERO, |&preset| Vec3::from_array(preset))
}

/// Parent the light rig to the model and turn on smooth shading and
/// shadows for every mesh.
pub fn decorate_scene<M: SceneModel + ?Sized>(
    model: &mut M,
    lighting: &LightingOptions,
) {
    for light in light_rig(lighting) {
        model.add_light(light);
    }
    let mut meshes = 0usize;
    model.visit_meshes(&mut |mesh: &mut MeshSettings| {
        mesh.smooth_normals = true;
        mesh.cast_shadow = true;
        mesh.receive_shadow = true;
        meshes += 1;
    });
    log::debug!("decorated {meshes} meshes");
}
