use crate::{MomentumOptions, MomentumState, ScrollDirection};

/// The slide engine a [`MomentumWheel`] drives.
///
/// The engine is opaque: any component offering these operations can be plugged in. Its slide
/// set is treated as circular.
pub trait SlideEngine {
    fn scroll_to(&mut self, index: usize, animate: bool);

    /// Current scroll progress in `[0, 1)`.
    fn scroll_progress(&self) -> f64;

    /// Snap points, one per slide.
    fn scroll_snap_list(&self) -> Vec<f64>;

    fn selected_scroll_snap(&self) -> usize;

    fn scroll_prev(&mut self);

    fn scroll_next(&mut self);
}

/// Notifications a slide engine emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideEvent {
    Init,
    Select,
}

/// How a wheel event was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Vertical intent: leave the event alone.
    Ignored,
    /// Fed into the running loop. Suppress the default action.
    Consumed,
    /// Suppress the default action and request an animation frame for [`MomentumWheel::frame`].
    StartFrames,
}

impl WheelOutcome {
    pub fn prevent_default(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Converts horizontal wheel input into decaying slide navigation.
///
/// Adapters call `on_wheel` for each wheel event and `frame` from each animation frame while it
/// returns `true`. The frame loop itself supplies the perceived smoothness, so the engine is
/// always commanded without its own animation.
#[derive(Clone, Debug, Default)]
pub struct MomentumWheel {
    options: MomentumOptions,
    state: MomentumState,
}

impl MomentumWheel {
    pub fn new(options: MomentumOptions) -> Self {
        Self {
            options,
            state: MomentumState::default(),
        }
    }

    pub fn options(&self) -> &MomentumOptions {
        &self.options
    }

    pub fn state(&self) -> MomentumState {
        self.state
    }

    pub fn is_scrolling(&self) -> bool {
        self.state.is_scrolling
    }

    /// Feeds one wheel event.
    ///
    /// Only events whose horizontal delta dominates are carousel input.
    pub fn on_wheel(&mut self, delta_x: f64, delta_y: f64) -> WheelOutcome {
        if !(delta_x.abs() > delta_y.abs()) {
            return WheelOutcome::Ignored;
        }

        self.state.scroll_direction = ScrollDirection::from_delta(delta_x);
        self.state.scroll_accumulator += delta_x;

        if self.state.is_scrolling {
            return WheelOutcome::Consumed;
        }
        self.state.is_scrolling = true;
        ctrace!(
            accumulator = self.state.scroll_accumulator,
            "MomentumWheel: loop started"
        );
        WheelOutcome::StartFrames
    }

    /// Runs one frame of the decay loop.
    ///
    /// Returns `true` when another frame should be scheduled. When the accumulator has decayed
    /// to the threshold the loop stops and the accumulator is reset to exactly zero.
    pub fn frame<E: SlideEngine + ?Sized>(&mut self, engine: &mut E) -> bool {
        if !self.state.is_scrolling {
            return false;
        }
        if self.state.scroll_accumulator.abs() <= self.options.threshold {
            self.stop();
            return false;
        }

        let slide_count = engine.scroll_snap_list().len();
        if slide_count == 0 {
            self.stop();
            return false;
        }

        let progress = wrap_progress(
            engine.scroll_progress() + self.state.scroll_accumulator / self.options.progress_divisor,
        );
        let direction = self
            .state
            .scroll_direction
            .unwrap_or(ScrollDirection::Forward);
        let index = resolve_target_index(progress, slide_count, direction);
        engine.scroll_to(index, false);

        self.state.scroll_accumulator *= self.options.decay;
        true
    }

    /// Stops the loop immediately.
    pub fn stop(&mut self) {
        self.state.scroll_accumulator = 0.0;
        self.state.is_scrolling = false;
        ctrace!("MomentumWheel: loop stopped");
    }
}

/// Wraps a progress value into `[0, 1)`; the slide set is circular.
pub fn wrap_progress(progress: f64) -> f64 {
    if !progress.is_finite() {
        return 0.0;
    }
    let wrapped = progress.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Scales a progress value onto slide indexes, rounding towards the direction of travel.
///
/// Biased rounding keeps the loop from oscillating between two neighbours near a midpoint.
pub fn resolve_target_index(progress: f64, slide_count: usize, direction: ScrollDirection) -> usize {
    if slide_count == 0 {
        return 0;
    }
    let last = slide_count - 1;
    let position = progress * last as f64;
    let index = match direction {
        ScrollDirection::Forward => position.ceil(),
        ScrollDirection::Backward => position.floor(),
    };
    if !(index > 0.0) {
        0
    } else {
        (index as usize).min(last)
    }
}
