//! Damped kinematics integrator.
//!
//! Scroll and pointer events feed velocities; [`KinematicsIntegrator::step`]
//! runs once per rendered frame, integrating velocity into position and
//! rotation and decaying every velocity toward zero. Nothing runs until the
//! model has loaded, and setup runs exactly once after that.

use glam::Vec3;
use rand::rngs::ThreadRng;
use rand::Rng;

use super::scroll::ScrollTracker;
use super::setup::{decorate_scene, model_scale, pick_orientation};
use super::state::{KinematicState, ScrollDirection};
use crate::camera::Camera;
use crate::error::VitrineError;
use crate::input::mouse::PointerState;
use crate::input::{SurfaceEventKind, Viewport};
use crate::options::{
    CameraOptions, DampingSet, KinematicsOptions, LightingOptions, Options,
};
use crate::scene::{Intersection, LoadEvent, Raycaster, SceneModel};

/// Where the model load stands.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Waiting for the loader.
    Pending {
        /// Fraction loaded, when the total size is known.
        progress: Option<f32>,
    },
    /// Model available; integration runs.
    Ready,
    /// The load failed; the integrator stays inert.
    Failed(String),
}

/// Drives one model's position and rotation from scroll and pointer input.
pub struct KinematicsIntegrator<M, C, G = ThreadRng> {
    options: KinematicsOptions,
    damping: DampingSet,
    lighting: LightingOptions,
    camera_options: CameraOptions,
    state: KinematicState,
    model: Option<M>,
    load: LoadState,
    raycaster: C,
    camera: Camera,
    viewport: Viewport,
    pointer: PointerState,
    scroll: ScrollTracker,
    hovered: Option<Intersection>,
    rng: G,
}

impl<M, C> KinematicsIntegrator<M, C, ThreadRng>
where
    M: SceneModel,
    C: Raycaster<M>,
{
    /// Integrator picking its starting orientation with the thread RNG.
    pub fn new(
        options: &Options,
        viewport: Viewport,
        initial_scroll: f32,
        raycaster: C,
    ) -> Result<Self, VitrineError> {
        Self::with_rng(options, viewport, initial_scroll, raycaster, rand::rng())
    }
}

impl<M, C, G> KinematicsIntegrator<M, C, G>
where
    M: SceneModel,
    C: Raycaster<M>,
    G: Rng,
{
    /// Integrator with an explicit random source for preset selection.
    pub fn with_rng(
        options: &Options,
        viewport: Viewport,
        initial_scroll: f32,
        raycaster: C,
        rng: G,
    ) -> Result<Self, VitrineError> {
        options.validate()?;
        let damping = options.kinematics.damping()?;
        Ok(Self {
            options: options.kinematics.clone(),
            damping,
            lighting: options.lighting.clone(),
            camera_options: options.camera.clone(),
            state: KinematicState::new(&damping),
            model: None,
            load: LoadState::Pending { progress: None },
            raycaster,
            camera: Camera::from_options(&options.camera, viewport.aspect()),
            viewport,
            pointer: PointerState::new(),
            scroll: ScrollTracker::new(initial_scroll),
            hovered: None,
            rng,
        })
    }

    /// Current kinematic state.
    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    /// The loaded model, if any.
    pub fn model(&self) -> Option<&M> {
        self.model.as_ref()
    }

    /// Load progress or failure.
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Nearest hit under the pointer as of the last step.
    pub fn hovered(&self) -> Option<&Intersection> {
        self.hovered.as_ref()
    }

    /// Camera used for pointer rays.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Apply a loader event.
    pub fn on_load_event(&mut self, event: LoadEvent<M>) {
        match event {
            LoadEvent::Progress { loaded, total } => {
                if self.model.is_some() {
                    return;
                }
                let progress = total
                    .filter(|&t| t > 0)
                    .map(|t| (loaded as f32 / t as f32).min(1.0));
                self.load = LoadState::Pending { progress };
            }
            LoadEvent::Completed(model) => {
                self.model = Some(model);
                self.load = LoadState::Ready;
                self.ensure_setup();
            }
            LoadEvent::Failed(message) => {
                log::warn!("model failed to load: {message}");
                self.model = None;
                self.load = LoadState::Failed(message);
            }
        }
    }

    /// The load failure, if any, as a crate error.
    pub fn load_error(&self) -> Option<VitrineError> {
        match &self.load {
            LoadState::Failed(message) => {
                Some(VitrineError::AssetLoad(message.clone()))
            }
            _ => None,
        }
    }

    /// Scroll offset changed.
    pub fn on_scroll(&mut self, offset: f32) {
        let delta = self.scroll.update(offset);
        let direction = ScrollDirection::from_delta(delta);
        self.state.scroll_direction = direction;
        if direction == ScrollDirection::Still {
            return;
        }
        self.state
            .positional_velocity
            .set(delta.abs() * self.options.scroll_velocity_gain);
    }

    /// Window resized: refit the scale and camera aspect.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera = Camera::from_options(&self.camera_options, viewport.aspect());
        if !self.state.is_setup_complete() {
            return;
        }
        let scale = model_scale(&self.viewport, &self.options);
        if let Some(model) = self.model.as_mut() {
            model.set_scale(Vec3::splat(scale));
        }
    }

    /// Pointer moved to pixel position `(x, y)`.
    pub fn on_pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.handle_pointer_moved(x, y, &self.viewport);
    }

    /// The renderer reported a pointer interaction with the model surface.
    pub fn on_surface(
        &mut self,
        kind: SurfaceEventKind,
        intersection: &Intersection,
    ) {
        if self.model.is_none() {
            return;
        }
        log::trace!("{kind:?} impulse along {}", intersection.normal);
        self.state
            .rotational_velocity
            .impulse(intersection.normal * self.options.impulse_gain);
    }

    /// Whether one-shot setup has run.
    pub fn is_setup_complete(&self) -> bool {
        self.state.is_setup_complete()
    }

    fn ensure_setup(&mut self) {
        let Some(model) = self.model.as_mut() else {
            return;
        };
        if !self.state.setup.trip() {
            return;
        }
        let scale = model_scale(&self.viewport, &self.options);
        model.set_scale(Vec3::splat(scale));
        let rotation = pick_orientation(
            &mut self.rng,
            &self.options.orientation_presets,
        );
        self.state.rotation = rotation;
        model.set_rotation(rotation);
        decorate_scene(model, &self.lighting);
        log::debug!("model setup: scale {scale:.3}, rotation {rotation}");
    }

    /// Advance one rendered frame. Returns `false` while no model is loaded.
    pub fn step(&mut self) -> bool {
        if self.model.is_none() {
            return false;
        }
        self.ensure_setup();

        if let Some(model) = self.model.as_ref() {
            // Hover only; impulses come from discrete surface events.
            let ray = self.camera.ray_from_ndc(self.pointer.ndc);
            self.hovered = self.raycaster.cast(&ray, model).into_iter().next();
        }

        self.integrate();

        if let Some(model) = self.model.as_mut() {
            model.set_position(self.state.position);
            model.set_rotation(self.state.rotation);
        }
        true
    }

    fn integrate(&mut self) {
        let state = &mut self.state;
        let direction = state.scroll_direction.sign();
        let velocity = state.positional_velocity.value();

        state.position.y += velocity * direction;
        state.position.y = self.damping.scroll.apply(state.position.y);
        state.rotation.x +=
            velocity * self.options.scroll_rotation_gain * direction;
        state.positional_velocity.decay();

        let spin = state.rotational_velocity.as_vec3()
            * self.damping.rotational_velocity.get()
            * self.options.rotation_step;
        state.rotation += spin;
        state.rotational_velocity.decay();
    }
}
