//! A mounted integrator bound to window listeners and its model loader.

use rand::Rng;

use super::integrator::KinematicsIntegrator;
use crate::input::{InputEvent, Viewport};
use crate::lifecycle::Subscription;
use crate::options::ViewportOptions;
use crate::scene::{Raycaster, SceneLoader, SceneModel};

/// Document-level signals a model stage listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowSignal {
    /// Scroll offset changes.
    Scroll,
    /// Viewport size changes.
    Resize,
}

/// Registers listeners for document-level signals.
///
/// The host delivers each signal as an [`InputEvent`] to
/// [`ModelStage::handle_event`].
pub trait WindowEvents {
    /// Start listening for `signal`.
    fn listen(&mut self, signal: WindowSignal) -> Subscription;
}

/// A kinematics integrator mounted in a page.
///
/// The per-frame callback subscription belongs to the rendering host, which
/// calls [`Self::frame`] once per rendered frame and tears that
/// subscription down itself. `&mut self` on every entry point keeps
/// callbacks from overlapping.
pub struct ModelStage<M, C, G> {
    integrator: KinematicsIntegrator<M, C, G>,
    viewport_options: ViewportOptions,
    listeners: Vec<Subscription>,
    mounted: bool,
}

impl<M, C, G> ModelStage<M, C, G>
where
    M: SceneModel,
    C: Raycaster<M>,
    G: Rng,
{
    /// Mount the integrator: start loading `url` and register scroll and
    /// resize listeners.
    pub fn mount<W, L>(
        integrator: KinematicsIntegrator<M, C, G>,
        viewport_options: ViewportOptions,
        window: &mut W,
        loader: &mut L,
        url: &str,
    ) -> Self
    where
        W: WindowEvents + ?Sized,
        L: SceneLoader<Model = M> + ?Sized,
    {
        log::debug!("loading model from {url}");
        loader.load(url);
        let listeners = vec![
            window.listen(WindowSignal::Scroll),
            window.listen(WindowSignal::Resize),
        ];
        Self {
            integrator,
            viewport_options,
            listeners,
            mounted: true,
        }
    }

    /// The mounted integrator.
    pub fn integrator(&self) -> &KinematicsIntegrator<M, C, G> {
        &self.integrator
    }

    /// Whether the stage is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Drain pending loader events into the integrator.
    pub fn poll_loader<L>(&mut self, loader: &mut L)
    where
        L: SceneLoader<Model = M> + ?Sized,
    {
        while let Some(event) = loader.poll_event() {
            self.integrator.on_load_event(event);
        }
    }

    /// Deliver one input event. Ignored after unmount.
    pub fn handle_event(&mut self, event: InputEvent) {
        if !self.mounted {
            return;
        }
        match event {
            InputEvent::Scroll { offset } => self.integrator.on_scroll(offset),
            InputEvent::Resize { width, height } => self
                .integrator
                .on_resize(Viewport::new(width, height, &self.viewport_options)),
            InputEvent::PointerMoved { x, y } => {
                self.integrator.on_pointer_moved(x, y);
            }
            InputEvent::Surface { kind, intersection } => {
                self.integrator.on_surface(kind, &intersection);
            }
        }
    }

    /// Per-frame callback. Returns whether the model was integrated.
    pub fn frame(&mut self) -> bool {
        self.integrator.step()
    }

    /// Remove the scroll and resize listeners. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        for mut listener in self.listeners.drain(..) {
            let _ = listener.cancel();
        }
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::input::{DeviceClass, SurfaceEventKind};
    use crate::options::Options;
    use crate::scene::proxy::{BoundsRaycaster, ProxyModel};
    use crate::scene::{Intersection, LoadEvent};

    #[derive(Default)]
    struct Window {
        listening: Rc<RefCell<Vec<WindowSignal>>>,
    }

    impl WindowEvents for Window {
        fn listen(&mut self, signal: WindowSignal) -> Subscription {
            self.listening.borrow_mut().push(signal);
            let listening = Rc::clone(&self.listening);
            Subscription::new("window listener", move || {
                listening.borrow_mut().retain(|s| *s != signal);
            })
        }
    }

    #[derive(Default)]
    struct QueueLoader {
        requested: Vec<String>,
        events: VecDeque<LoadEvent<ProxyModel>>,
    }

    impl SceneLoader for QueueLoader {
        type Model = ProxyModel;

        fn load(&mut self, url: &str) {
            self.requested.push(url.to_owned());
        }

        fn poll_event(&mut self) -> Option<LoadEvent<ProxyModel>> {
            self.events.pop_front()
        }
    }

    fn mounted() -> (
        ModelStage<ProxyModel, BoundsRaycaster, StdRng>,
        Window,
        QueueLoader,
    ) {
        let options = Options::default();
        let integrator = KinematicsIntegrator::with_rng(
            &options,
            Viewport::with_device(1280.0, 800.0, DeviceClass::Desktop),
            0.0,
            BoundsRaycaster,
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        let mut window = Window::default();
        let mut loader = QueueLoader::default();
        let stage = ModelStage::mount(
            integrator,
            options.viewport,
            &mut window,
            &mut loader,
            "/models/logo.glb",
        );
        (stage, window, loader)
    }

    #[test]
    fn mount_requests_model_and_listens() {
        let (_stage, window, loader) = mounted();
        assert_eq!(loader.requested, ["/models/logo.glb"]);
        assert_eq!(
            *window.listening.borrow(),
            [WindowSignal::Scroll, WindowSignal::Resize]
        );
    }

    #[test]
    fn loader_events_drive_setup() {
        let (mut stage, _window, mut loader) = mounted();
        assert!(!stage.frame());
        loader.events.push_back(LoadEvent::Progress {
            loaded: 1,
            total: None,
        });
        loader
            .events
            .push_back(LoadEvent::Completed(ProxyModel::new(Vec3::ONE, 1)));
        stage.poll_loader(&mut loader);
        assert!(stage.integrator().is_setup_complete());
        assert!(stage.frame());
    }

    #[test]
    fn events_reach_integrator() {
        let (mut stage, _window, mut loader) = mounted();
        loader
            .events
            .push_back(LoadEvent::Completed(ProxyModel::new(Vec3::ONE, 1)));
        stage.poll_loader(&mut loader);

        stage.handle_event(InputEvent::Scroll { offset: 40.0 });
        assert!(
            (stage.integrator().state().positional_velocity.value() - 0.2).abs()
                < 1e-6
        );
        stage.handle_event(InputEvent::Surface {
            kind: SurfaceEventKind::Click,
            intersection: Intersection {
                normal: Vec3::X,
                point: Vec3::ZERO,
                distance: 4.0,
            },
        });
        assert!(
            (stage.integrator().state().rotational_velocity.x.value() - 0.5)
                .abs()
                < 1e-6
        );
        // 330 px is under the mobile breakpoint: constrained divisor 550
        stage.handle_event(InputEvent::Resize {
            width: 330.0,
            height: 900.0,
        });
        let scale = stage.integrator().model().unwrap().scale.x;
        assert!((scale - 0.6).abs() < 1e-6);
    }

    #[test]
    fn unmount_removes_listeners_once() {
        let (mut stage, window, _loader) = mounted();
        stage.unmount();
        stage.unmount();
        assert!(window.listening.borrow().is_empty());
        assert!(!stage.is_mounted());
        stage.handle_event(InputEvent::Scroll { offset: 500.0 });
        assert_eq!(stage.integrator().state().positional_velocity.value(), 0.0);
    }
}
