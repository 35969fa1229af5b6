//! Headless simulation: drives a frame player and a model integrator through
//! a scripted page session on a virtual clock and logs what they do.

use std::cell::Cell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;

use glam::Vec3;
use vitrine::input::{InputEvent, SurfaceEventKind, Viewport};
use vitrine::kinematics::{
    KinematicsIntegrator, ModelStage, WindowEvents, WindowSignal,
};
use vitrine::lifecycle::Subscription;
use vitrine::options::Options;
use vitrine::scene::proxy::{BoundsRaycaster, ProxyModel};
use vitrine::scene::{Intersection, LoadEvent, SceneLoader};
use vitrine::sequence::{
    FramePlayer, FrameSequence, FrameStage, IntervalTimer, PathAssetSource,
    VisibilityObserver,
};
use vitrine::VitrineError;
use web_time::{Duration, Instant};

const FRAME_COUNT: usize = 24;
const RENDER_FRAMES: u32 = 90;

/// Interval timer whose firings are driven by the simulation loop.
#[derive(Clone, Default)]
struct VirtualTimer {
    period: Rc<Cell<Option<Duration>>>,
}

impl IntervalTimer for VirtualTimer {
    fn start(&mut self, period: Duration) -> Subscription {
        self.period.set(Some(period));
        let slot = Rc::clone(&self.period);
        Subscription::new("virtual timer", move || slot.set(None))
    }
}

struct VirtualObserver;

impl VisibilityObserver for VirtualObserver {
    fn observe(&mut self, threshold: f32) -> Option<Subscription> {
        log::info!("observing visibility at threshold {threshold}");
        Some(Subscription::detached("virtual observer"))
    }
}

struct VirtualWindow;

impl WindowEvents for VirtualWindow {
    fn listen(&mut self, signal: WindowSignal) -> Subscription {
        Subscription::new("virtual window listener", move || {
            log::info!("stopped listening for {signal:?}");
        })
    }
}

#[derive(Default)]
struct ProxyLoader {
    events: VecDeque<LoadEvent<ProxyModel>>,
}

impl SceneLoader for ProxyLoader {
    type Model = ProxyModel;

    fn load(&mut self, url: &str) {
        log::info!("loading {url}");
        self.events.push_back(LoadEvent::Progress {
            loaded: 512,
            total: Some(1024),
        });
        self.events
            .push_back(LoadEvent::Completed(ProxyModel::new(Vec3::ONE, 6)));
    }

    fn poll_event(&mut self) -> Option<LoadEvent<ProxyModel>> {
        self.events.pop_front()
    }
}

fn simulate_frames(
    options: &Options,
    viewport: &Viewport,
) -> Result<(), VitrineError> {
    let ids = (0..FRAME_COUNT).map(|i| format!("frame-{i:03}"));
    let player =
        FramePlayer::from_options(FrameSequence::new(ids)?, &options.frames)?;
    let timer = VirtualTimer::default();
    let mut stage = FrameStage::mount(
        player,
        &mut VirtualObserver,
        timer.clone(),
        viewport,
        &options.frames,
    );
    let assets = PathAssetSource::from_options(&options.frames);

    let start = Instant::now();
    let step = Duration::from_millis(1);
    let mut next_fire: Option<Duration> = None;
    let mut elapsed = Duration::ZERO;
    let mut last_index = usize::MAX;

    while elapsed <= Duration::from_millis(700) {
        if elapsed == Duration::from_millis(50) {
            stage.on_visibility(true);
        }
        if elapsed == Duration::from_millis(600) {
            stage.on_visibility(false);
        }

        match timer.period.get() {
            Some(period) => {
                let due = *next_fire.get_or_insert(elapsed + period);
                if elapsed >= due {
                    stage.on_timer();
                    next_fire = Some(elapsed + period);
                }
            }
            None => next_fire = None,
        }

        let state = stage.state();
        if state.current_index != last_index {
            last_index = state.current_index;
            // Pretend every high-res image arrives 5 ms after its frame
            stage.on_high_res_loaded(
                state.current_index,
                start + elapsed + Duration::from_millis(5),
            );
            let layers = stage.player().layers(
                &assets,
                viewport.device,
                start + elapsed,
            );
            log::info!(
                "t={:>3}ms frame {:>2} animating={} high-res={}",
                elapsed.as_millis(),
                state.current_index,
                state.is_animating,
                layers.high_res.uri,
            );
        }
        elapsed += step;
    }

    stage.unmount();
    Ok(())
}

fn simulate_model(
    options: &Options,
    viewport: Viewport,
) -> Result<(), VitrineError> {
    let integrator =
        KinematicsIntegrator::new(options, viewport, 0.0, BoundsRaycaster)?;
    let mut loader = ProxyLoader::default();
    let mut stage = ModelStage::mount(
        integrator,
        options.viewport.clone(),
        &mut VirtualWindow,
        &mut loader,
        "/models/showcase.glb",
    );
    stage.poll_loader(&mut loader);
    if let Some(err) = stage.integrator().load_error() {
        return Err(err);
    }

    let mut offset = 0.0;
    for frame in 0..RENDER_FRAMES {
        if frame < 20 && frame % 4 == 0 {
            offset += 120.0;
            stage.handle_event(InputEvent::Scroll { offset });
        }
        if frame == 30 {
            stage.handle_event(InputEvent::PointerMoved {
                x: viewport.width / 2.0,
                y: viewport.height / 2.0,
            });
            stage.handle_event(InputEvent::Surface {
                kind: SurfaceEventKind::Click,
                intersection: Intersection {
                    normal: Vec3::new(0.0, 1.0, 0.0),
                    point: Vec3::ZERO,
                    distance: 4.2,
                },
            });
        }
        let _ = stage.frame();
        if frame % 10 == 0 {
            let s = stage.integrator().state();
            log::info!(
                "frame {frame:>2} position.y={:+.4} rotation={:.3} hovered={}",
                s.position.y,
                s.rotation,
                stage.integrator().hovered().is_some(),
            );
        }
    }

    stage.unmount();
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let viewport = Viewport::new(1280.0, 800.0, &options.viewport);
    if let Err(e) = simulate_frames(&options, &viewport)
        .and_then(|()| simulate_model(&options, viewport))
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}
