//! A mounted frame player bound to its timer and visibility observer.

use web_time::{Duration, Instant};

use super::player::{FramePlayer, PlaybackState, TimerAction};
use crate::input::Viewport;
use crate::lifecycle::Subscription;
use crate::options::FrameOptions;

/// Reports whether an element intersects the viewport.
///
/// The host delivers each change to [`FrameStage::on_visibility`].
pub trait VisibilityObserver {
    /// Start observing with the given area threshold. Returns `None` when
    /// the environment has no way to observe visibility.
    fn observe(&mut self, threshold: f32) -> Option<Subscription>;
}

/// A repeating timer. Each firing is delivered to [`FrameStage::on_timer`].
pub trait IntervalTimer {
    /// Start firing every `period`. Cancelling the subscription stops it.
    fn start(&mut self, period: Duration) -> Subscription;
}

/// A frame player mounted on a host element.
///
/// Owns the timer and observer registrations; [`Self::unmount`] (or drop)
/// releases both exactly once.
pub struct FrameStage<T: IntervalTimer> {
    player: FramePlayer,
    timer: T,
    timer_sub: Option<Subscription>,
    observer_sub: Option<Subscription>,
    mounted: bool,
}

impl<T: IntervalTimer> FrameStage<T> {
    /// Mount `player`, starting visibility observation.
    ///
    /// When the observer is unavailable the element is treated as always
    /// visible and playback starts immediately.
    pub fn mount<O: VisibilityObserver + ?Sized>(
        player: FramePlayer,
        observer: &mut O,
        timer: T,
        viewport: &Viewport,
        options: &FrameOptions,
    ) -> Self {
        let threshold = options.threshold_for(viewport.device);
        let observer_sub = observer.observe(threshold);
        let mut stage = Self {
            player,
            timer,
            timer_sub: None,
            observer_sub,
            mounted: true,
        };
        if stage.observer_sub.is_none() {
            log::warn!(
                "visibility observation unavailable, playing frames unconditionally"
            );
            let action = stage.player.start();
            stage.apply(action);
        }
        stage
    }

    /// The underlying player.
    pub fn player(&self) -> &FramePlayer {
        &self.player
    }

    /// Current state snapshot.
    pub fn state(&self) -> PlaybackState {
        self.player.state()
    }

    /// Whether the stage is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether a cadence timer is currently registered.
    pub fn timer_running(&self) -> bool {
        self.timer_sub.as_ref().is_some_and(Subscription::is_active)
    }

    /// Observer callback.
    pub fn on_visibility(&mut self, intersecting: bool) {
        if !self.mounted {
            return;
        }
        let action = self.player.on_visibility(intersecting);
        self.apply(action);
    }

    /// Timer callback.
    pub fn on_timer(&mut self) {
        if !self.mounted {
            return;
        }
        let action = self.player.on_tick();
        self.apply(action);
    }

    /// High-res image load callback.
    pub fn on_high_res_loaded(&mut self, index: usize, at: Instant) {
        if self.mounted {
            self.player.on_high_res_loaded(index, at);
        }
    }

    /// High-res image error callback.
    pub fn on_high_res_failed(&mut self, index: usize) {
        if self.mounted {
            self.player.on_high_res_failed(index);
        }
    }

    /// Cancel the timer and disconnect the observer. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let Some(mut sub) = self.timer_sub.take() {
            let _ = sub.cancel();
        }
        if let Some(mut sub) = self.observer_sub.take() {
            let _ = sub.cancel();
        }
        self.mounted = false;
    }

    fn apply(&mut self, action: TimerAction) {
        match action {
            TimerAction::Keep => {}
            TimerAction::Start(period) => {
                if let Some(mut old) = self.timer_sub.take() {
                    let _ = old.cancel();
                }
                self.timer_sub = Some(self.timer.start(period));
            }
            TimerAction::Stop => {
                if let Some(mut sub) = self.timer_sub.take() {
                    let _ = sub.cancel();
                }
            }
        }
    }
}

impl<T: IntervalTimer> Drop for FrameStage<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}
