//! Visibility-gated frame player.
//!
//! Pure state machine: visibility changes and timer ticks go in, the
//! [`TimerAction`] the host must apply to its cadence timer comes out.
//! Playback starts when the element becomes visible, advances one frame per
//! tick, holds on the final frame, and rewinds to frame 0 whenever the
//! element leaves the viewport.

use web_time::{Duration, Instant};

use super::composite::{FrameLayers, HighResReveal};
use super::frames::{FrameAssetSource, FrameSequence};
use crate::error::VitrineError;
use crate::input::DeviceClass;
use crate::options::FrameOptions;

/// What the host should do with its repeating cadence timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Leave the timer as it is.
    Keep,
    /// Start a repeating timer with this period.
    Start(Duration),
    /// Cancel the running timer.
    Stop,
}

/// Snapshot of a player's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    /// Frame being shown, always within the sequence.
    pub current_index: usize,
    /// Whether the cadence timer should be running.
    pub is_animating: bool,
    /// Whether the current frame's high-res image has loaded.
    pub is_high_res_loaded: bool,
}

/// Plays a [`FrameSequence`] while its host element is on screen.
#[derive(Debug, Clone)]
pub struct FramePlayer {
    sequence: FrameSequence,
    cadence: Duration,
    crossfade: Duration,
    current_index: usize,
    animating: bool,
    reveal: HighResReveal,
}

impl FramePlayer {
    /// Player advancing every `ms_between_frame` milliseconds.
    pub fn new(
        sequence: FrameSequence,
        ms_between_frame: u64,
    ) -> Result<Self, VitrineError> {
        if ms_between_frame == 0 {
            return Err(VitrineError::InvalidCadence(ms_between_frame));
        }
        Ok(Self {
            sequence,
            cadence: Duration::from_millis(ms_between_frame),
            crossfade: FrameOptions::default().crossfade(),
            current_index: 0,
            animating: false,
            reveal: HighResReveal::default(),
        })
    }

    /// Player configured from the frame options.
    pub fn from_options(
        sequence: FrameSequence,
        options: &FrameOptions,
    ) -> Result<Self, VitrineError> {
        let mut player = Self::new(sequence, options.ms_between_frame)?;
        player.crossfade = options.crossfade();
        Ok(player)
    }

    /// Period between frame advances.
    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// The sequence being played.
    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    /// Index of the frame being shown.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Identifier of the frame being shown.
    pub fn current_frame(&self) -> &str {
        // current_index never leaves [0, len - 1]
        self.sequence.get(self.current_index).unwrap_or_default()
    }

    /// Whether playback is in progress.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Current state snapshot.
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_index: self.current_index,
            is_animating: self.animating,
            is_high_res_loaded: self.reveal.is_loaded(self.current_index),
        }
    }

    /// The host element started or stopped intersecting the viewport.
    pub fn on_visibility(&mut self, intersecting: bool) -> TimerAction {
        if intersecting {
            self.start()
        } else {
            self.rewind()
        }
    }

    /// Begin playback as if the element just became visible.
    pub fn start(&mut self) -> TimerAction {
        if self.animating || self.current_index >= self.sequence.last_index()
        {
            return TimerAction::Keep;
        }
        self.animating = true;
        log::debug!(
            "frame playback started at {}/{}",
            self.current_index,
            self.sequence.len()
        );
        TimerAction::Start(self.cadence)
    }

    fn rewind(&mut self) -> TimerAction {
        let was_animating = self.animating;
        self.animating = false;
        self.current_index = 0;
        self.reveal.clear();
        log::debug!("frame playback reset");
        if was_animating {
            TimerAction::Stop
        } else {
            TimerAction::Keep
        }
    }

    /// One cadence tick: advance a frame, stopping once the last is shown.
    pub fn on_tick(&mut self) -> TimerAction {
        if !self.animating {
            // A tick that raced a stop
            return TimerAction::Keep;
        }
        let last = self.sequence.last_index();
        if self.current_index < last {
            self.current_index += 1;
        }
        if self.current_index >= last {
            self.animating = false;
            log::debug!("frame playback holding on final frame {last}");
            return TimerAction::Stop;
        }
        TimerAction::Keep
    }

    /// The high-res image for frame `index` finished loading at `at`.
    ///
    /// Loads for frames other than the current one are ignored.
    pub fn on_high_res_loaded(&mut self, index: usize, at: Instant) {
        if index == self.current_index {
            self.reveal.mark_loaded(index, at);
        }
    }

    /// The high-res image for frame `index` failed; keep the placeholder.
    pub fn on_high_res_failed(&mut self, index: usize) {
        log::warn!(
            "high-res image for frame {index} failed to load, keeping placeholder"
        );
        if self.reveal.is_loaded(index) {
            self.reveal.clear();
        }
    }

    /// Layers to draw for the current frame at `now`.
    pub fn layers(
        &self,
        assets: &impl FrameAssetSource,
        device: DeviceClass,
        now: Instant,
    ) -> FrameLayers {
        let uris = assets.uris(self.current_frame(), device);
        self.reveal
            .layers(self.current_index, uris, now, self.crossfade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::frames::PathAssetSource;

    fn player(n: usize) -> FramePlayer {
        let ids: Vec<String> = (0..n).map(|i| format!("f{i}")).collect();
        FramePlayer::new(FrameSequence::new(ids).unwrap(), 15).unwrap()
    }

    #[test]
    fn zero_cadence_is_rejected() {
        let seq = FrameSequence::new(["f0"]).unwrap();
        assert!(matches!(
            FramePlayer::new(seq, 0),
            Err(VitrineError::InvalidCadence(0))
        ));
    }

    #[test]
    fn plays_through_and_holds_on_last_frame() {
        for n in 1..=12 {
            let mut p = player(n);
            let _ = p.on_visibility(true);
            for _ in 0..n.saturating_sub(1) {
                let _ = p.on_tick();
            }
            assert_eq!(p.current_index(), n - 1, "n = {n}");
            assert!(!p.is_animating(), "n = {n}");
            // Further ticks never loop
            let _ = p.on_tick();
            assert_eq!(p.current_index(), n - 1);
        }
    }

    #[test]
    fn three_frame_scenario() {
        let mut p = player(3);
        assert_eq!(
            p.on_visibility(true),
            TimerAction::Start(Duration::from_millis(15))
        );
        assert_eq!(p.current_frame(), "f0");
        assert_eq!(p.on_tick(), TimerAction::Keep);
        assert_eq!(p.current_index(), 1);
        assert_eq!(p.on_tick(), TimerAction::Stop);
        assert_eq!(p.current_index(), 2);
        assert_eq!(p.on_tick(), TimerAction::Keep);
        assert_eq!(p.current_index(), 2);
    }

    #[test]
    fn single_frame_never_starts() {
        let mut p = player(1);
        assert_eq!(p.on_visibility(true), TimerAction::Keep);
        assert!(!p.is_animating());
        assert_eq!(p.current_index(), 0);
    }

    #[test]
    fn leaving_viewport_resets_from_any_index() {
        for stop_after in 0..5 {
            let mut p = player(5);
            let _ = p.on_visibility(true);
            for _ in 0..stop_after {
                let _ = p.on_tick();
            }
            let expected = if p.is_animating() {
                TimerAction::Stop
            } else {
                TimerAction::Keep
            };
            assert_eq!(p.on_visibility(false), expected);
            assert_eq!(p.current_index(), 0);
            assert!(!p.is_animating());
        }
    }

    #[test]
    fn replays_after_returning_to_view() {
        let mut p = player(3);
        let _ = p.on_visibility(true);
        let _ = p.on_tick();
        let _ = p.on_tick();
        let _ = p.on_visibility(false);
        assert!(matches!(p.on_visibility(true), TimerAction::Start(_)));
    }

    #[test]
    fn repeated_visible_reports_do_not_restart_timer() {
        let mut p = player(4);
        assert!(matches!(p.on_visibility(true), TimerAction::Start(_)));
        assert_eq!(p.on_visibility(true), TimerAction::Keep);
    }

    #[test]
    fn high_res_reveal_is_per_frame() {
        let mut p = player(3);
        let now = Instant::now();
        let _ = p.on_visibility(true);
        p.on_high_res_loaded(0, now);
        assert!(p.state().is_high_res_loaded);
        let _ = p.on_tick();
        assert!(!p.state().is_high_res_loaded);
        // A late load for the previous frame is ignored
        p.on_high_res_loaded(0, now);
        assert!(!p.state().is_high_res_loaded);
        p.on_high_res_loaded(1, now);
        assert!(p.state().is_high_res_loaded);
    }

    #[test]
    fn failed_high_res_keeps_placeholder() {
        let mut p = player(2);
        let now = Instant::now();
        p.on_high_res_failed(0);
        let layers = p.layers(
            &PathAssetSource::new("/frames", "webp"),
            DeviceClass::Desktop,
            now,
        );
        assert_eq!(layers.placeholder.opacity, 1.0);
        assert_eq!(layers.placeholder.uri, "/frames/placeholder/f0.webp");
        assert_eq!(layers.high_res.opacity, 0.0);
    }
}
