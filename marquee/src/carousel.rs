use crate::layout::{in_clone_zone, max_scroll, offset_to_index, step_size, wrap_into_real};
use crate::options::{DUPLICATE_COUNT_ATTRIBUTE, TOTAL_ITEMS_ATTRIBUTE, parse_count};
use crate::{
    CardTrack, CarouselElements, CarouselMode, CarouselOptions, CarouselState, NavButton, Nav,
    ScrollContainer, ScrollDirection, SettleDetector,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingWrap {
    target: usize,
    due_ms: u64,
}

/// A headless carousel controller.
///
/// The controller owns its element handles and one [`CarouselState`]. Your adapter forwards UI
/// events to it:
/// - `click` for the navigation buttons
/// - `on_scroll` for native scroll events on the container
/// - `on_resize` for window resizes
/// - `tick(now_ms)` from a timer, at least by [`next_deadline`](Self::next_deadline)
///
/// In infinite mode the track is laid out as `[clones][real items][clones]` and the controller
/// silently re-maps the scroll position whenever it comes to rest in a clone zone.
#[derive(Clone, Debug)]
pub struct Carousel<S, T, B> {
    options: CarouselOptions,
    mode: CarouselMode,
    scroll_container: S,
    card_container: T,
    left_button: B,
    right_button: B,
    state: CarouselState,
    settle: SettleDetector<usize>,
    mount_jump_at: Option<u64>,
    pending_wrap: Option<PendingWrap>,
    animating_until: Option<u64>,
    nav_refresh_at: Option<u64>,
}

impl<S: ScrollContainer, T: CardTrack, B: NavButton> Carousel<S, T, B> {
    /// Mounts a carousel onto its elements.
    ///
    /// Returns `None` (and touches nothing) when any element handle is missing. Infinite mode
    /// falls back to finite semantics when the duplicate/total counts are missing or zero.
    ///
    /// The initial jump onto the first real item is deferred to the first `tick` at or after
    /// `now_ms`, so the host has a chance to settle layout first.
    pub fn mount(
        options: CarouselOptions,
        elements: CarouselElements<S, T, B>,
        now_ms: u64,
    ) -> Option<Self> {
        let Some((scroll_container, card_container, left_button, right_button)) =
            elements.into_parts()
        else {
            cdebug!(
                selector = options.card_selector.as_str(),
                "Carousel::mount: missing element, skipping"
            );
            return None;
        };

        let (duplicate_count, total_items) = if options.infinite {
            let duplicate_count = options.duplicate_count.unwrap_or_else(|| {
                parse_count(card_container.data_attribute(DUPLICATE_COUNT_ATTRIBUTE).as_deref())
            });
            let total_items = options.total_items.unwrap_or_else(|| {
                parse_count(card_container.data_attribute(TOTAL_ITEMS_ATTRIBUTE).as_deref())
            });
            (duplicate_count, total_items)
        } else {
            (0, 0)
        };

        let mode = CarouselMode::resolve(options.infinite, duplicate_count, total_items);
        if options.infinite && !mode.is_infinite() {
            cwarn!(
                duplicate_count,
                total_items,
                "Carousel::mount: infinite mode needs non-zero counts, running finite"
            );
        }

        let state = CarouselState {
            current_index: match mode {
                CarouselMode::Infinite {
                    duplicate_count, ..
                } => duplicate_count,
                CarouselMode::Finite => 0,
            },
            last_scroll_left: scroll_container.scroll_left(),
            ..CarouselState::default()
        };

        if mode.is_infinite() {
            let cards = card_container.card_count(&options.card_selector);
            if cards != mode.track_len() {
                cwarn!(
                    cards,
                    expected = mode.track_len(),
                    "Carousel::mount: track length does not match clone layout"
                );
            }
        }

        let settle = SettleDetector::new(options.settle_delay_ms);
        let nav_refresh_at = Some(now_ms.saturating_add(options.mount_refresh_delay_ms));
        let mut c = Self {
            options,
            mode,
            scroll_container,
            card_container,
            left_button,
            right_button,
            state,
            settle,
            mount_jump_at: mode.is_infinite().then_some(now_ms),
            pending_wrap: None,
            animating_until: None,
            nav_refresh_at,
        };
        c.update_nav_states();
        cdebug!(
            selector = c.options.card_selector.as_str(),
            mode = ?c.mode,
            "Carousel::mount"
        );
        Some(c)
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn mode(&self) -> CarouselMode {
        self.mode
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning
    }

    pub fn scroll_container(&self) -> &S {
        &self.scroll_container
    }

    /// Mutable access for adapters that need to poke the container directly.
    ///
    /// Offsets changed this way are picked up by the next `on_scroll`.
    pub fn scroll_container_mut(&mut self) -> &mut S {
        &mut self.scroll_container
    }

    pub fn card_container(&self) -> &T {
        &self.card_container
    }

    pub fn left_button(&self) -> &B {
        &self.left_button
    }

    pub fn right_button(&self) -> &B {
        &self.right_button
    }

    /// Pixel distance of one step: first card width plus the track gap.
    ///
    /// Recomputed on every call since layout may change between events.
    pub fn scroll_amount(&self) -> f64 {
        let selector = self.options.card_selector.as_str();
        let card_width = if self.card_container.card_count(selector) > 0 {
            self.card_container.card_width(selector, 0)
        } else {
            None
        };
        step_size(
            card_width,
            self.card_container.gap(),
            self.options.fallback_gap,
            self.options.default_scroll_amount,
        )
    }

    /// True if the card horizontally overlaps the scroll container at all.
    pub fn is_card_visible(&self, index: usize) -> bool {
        self.card_container
            .card_bounds(&self.options.card_selector, index)
            .is_some_and(|card| card.overlaps(&self.scroll_container.bounds()))
    }

    /// Earliest pending timer, if any. Call `tick` no later than this.
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.mount_jump_at,
            self.pending_wrap.map(|w| w.due_ms),
            self.settle.deadline(),
            self.nav_refresh_at,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Handles a navigation button press.
    pub fn click(&mut self, nav: Nav, now_ms: u64) {
        match self.mode {
            CarouselMode::Finite => {
                let step = self.scroll_amount();
                let delta = match nav.direction() {
                    ScrollDirection::Backward => -step,
                    ScrollDirection::Forward => step,
                };
                ctrace!(delta, "Carousel::click finite");
                self.scroll_container.scroll_by(delta, true);
            }
            CarouselMode::Infinite { .. } if self.state.is_transitioning => {
                ctrace!(?nav, "Carousel::click ignored, re-map pending");
            }
            CarouselMode::Infinite { .. } => {
                let current = self.state.current_index;
                let next = match nav {
                    Nav::Left => current.saturating_sub(1),
                    Nav::Right => current.saturating_add(1),
                };
                self.settle.cancel();
                self.move_to_index(next, true);
                self.animating_until = Some(now_ms.saturating_add(self.options.wrap_delay_ms));
                self.wrap_after_animation(self.state.current_index, now_ms);
            }
        }
        self.nav_refresh_at = Some(now_ms.saturating_add(self.options.nav_refresh_delay_ms));
    }

    /// Moves the viewport to a track index, animated or silently.
    ///
    /// In infinite mode the index is clamped to the track. A silent move also records the landed
    /// offset so the scroll event it echoes is not mistaken for user input.
    pub fn move_to_index(&mut self, index: usize, animate: bool) {
        let index = self.clamp_index(index);
        let step = self.scroll_amount();
        self.scroll_container.scroll_to(index as f64 * step, animate);
        self.state.current_index = index;
        if !animate {
            let landed = self.scroll_container.scroll_left();
            self.state.last_scroll_left = landed;
            self.state.last_scroll_index = Some(self.clamp_index(offset_to_index(landed, step)));
        }
        ctrace!(index, animate, "Carousel::move_to_index");
    }

    /// Handles a native scroll event on the container.
    pub fn on_scroll(&mut self, now_ms: u64) {
        self.update_nav_states();

        let CarouselMode::Infinite {
            duplicate_count: d,
            total_items: t,
        } = self.mode
        else {
            return;
        };
        if self.state.is_transitioning {
            return;
        }

        let scroll_left = self.scroll_container.scroll_left();
        if let Some(direction) = ScrollDirection::from_delta(scroll_left - self.state.last_scroll_left)
        {
            self.state.scroll_direction = Some(direction);
        }
        self.state.last_scroll_left = scroll_left;

        if self.animating_until.is_some_and(|until| now_ms < until) {
            return;
        }

        let step = self.scroll_amount();
        let scrolled = self.clamp_index(offset_to_index(scroll_left, step));
        if self.state.last_scroll_index == Some(scrolled) {
            return;
        }

        // Fast paths win over the settle rule: a flick can cross the whole clone zone before
        // the quiet period elapses.
        let shift = t as f64 * step;
        match self.state.scroll_direction {
            Some(ScrollDirection::Backward) if scrolled <= d + 1 && self.is_card_visible(d) => {
                self.mirror_to(scroll_left + shift, step, now_ms);
                return;
            }
            Some(ScrollDirection::Forward)
                if scrolled + 2 >= d + t && self.is_card_visible(d + t - 1) =>
            {
                self.mirror_to(scroll_left - shift, step, now_ms);
                return;
            }
            _ => {}
        }

        self.settle.schedule(scrolled, now_ms);
        if !in_clone_zone(scrolled, d, t) {
            self.state.last_scroll_index = Some(scrolled);
        }
    }

    /// Re-applies button state after a viewport resize. Never touches the index.
    pub fn on_resize(&mut self) {
        self.update_nav_states();
    }

    /// Fires due timers: the mount jump, a pending re-map, the settle check and the button
    /// refresh, in that order.
    pub fn tick(&mut self, now_ms: u64) {
        if self.mount_jump_at.is_some_and(|due| now_ms >= due) {
            self.mount_jump_at = None;
            if let CarouselMode::Infinite {
                duplicate_count, ..
            } = self.mode
            {
                self.move_to_index(duplicate_count, false);
            }
        }

        if let Some(wrap) = self.pending_wrap.filter(|w| now_ms >= w.due_ms) {
            self.pending_wrap = None;
            self.move_to_index(wrap.target, false);
            self.state.is_transitioning = false;
            cdebug!(target_index = wrap.target, "Carousel: re-mapped after animation");
        }

        if self.animating_until.is_some_and(|until| now_ms >= until) {
            self.animating_until = None;
        }

        if !self.state.is_transitioning {
            let step = self.scroll_amount();
            let container = &self.scroll_container;
            let len = self.mode.track_len();
            let settled = self.settle.poll(now_ms, || {
                let index = offset_to_index(container.scroll_left(), step);
                if len == 0 { index } else { index.min(len - 1) }
            });
            if let Some(index) = settled {
                self.on_settled(index);
            }
        }

        if self.nav_refresh_at.is_some_and(|due| now_ms >= due) {
            self.nav_refresh_at = None;
            self.update_nav_states();
        }
    }

    fn on_settled(&mut self, index: usize) {
        let CarouselMode::Infinite {
            duplicate_count: d,
            total_items: t,
        } = self.mode
        else {
            return;
        };
        self.state.current_index = index;
        if in_clone_zone(index, d, t) {
            self.wrap_now(index);
        } else {
            self.state.last_scroll_index = Some(index);
        }
    }

    /// Schedules the silent re-map for a button step into a clone zone.
    fn wrap_after_animation(&mut self, index: usize, now_ms: u64) {
        let CarouselMode::Infinite {
            duplicate_count: d,
            total_items: t,
        } = self.mode
        else {
            return;
        };
        if self.state.is_transitioning || !in_clone_zone(index, d, t) {
            return;
        }
        let target = wrap_into_real(index, d, t);
        self.state.is_transitioning = true;
        self.pending_wrap = Some(PendingWrap {
            target,
            due_ms: now_ms.saturating_add(self.options.wrap_delay_ms),
        });
        ctrace!(from = index, to = target, "Carousel: re-map scheduled");
    }

    /// Silent re-map of a settled manual scroll; no extra delay.
    fn wrap_now(&mut self, index: usize) {
        let CarouselMode::Infinite {
            duplicate_count: d,
            total_items: t,
        } = self.mode
        else {
            return;
        };
        if self.state.is_transitioning || !in_clone_zone(index, d, t) {
            return;
        }
        let target = wrap_into_real(index, d, t);
        self.move_to_index(target, false);
        cdebug!(from = index, to = target, "Carousel: re-mapped settled scroll");
    }

    /// Jumps to the equivalent offset one period away, keeping the intra-card offset.
    fn mirror_to(&mut self, target_left: f64, step: f64, now_ms: u64) {
        let max = max_scroll(
            self.scroll_container.scroll_width(),
            self.scroll_container.client_width(),
        );
        let target_left = target_left.clamp(0.0, max);
        self.scroll_container.scroll_to(target_left, false);

        let landed = self.scroll_container.scroll_left();
        let index = self.clamp_index(offset_to_index(landed, step));
        self.state.current_index = index;
        self.state.last_scroll_left = landed;
        self.state.last_scroll_index = Some(index);
        // Coming to rest on a clone still needs the settle re-map.
        self.settle.schedule(index, now_ms);
        ctrace!(landed, index, "Carousel: mirrored across boundary");
    }

    fn clamp_index(&self, index: usize) -> usize {
        match self.mode.track_len() {
            0 => index,
            len => index.min(len - 1),
        }
    }

    fn update_nav_states(&mut self) {
        match self.mode {
            CarouselMode::Infinite { .. } => {
                self.left_button.set_disabled(false);
                self.right_button.set_disabled(false);
            }
            CarouselMode::Finite => {
                let scroll_left = self.scroll_container.scroll_left();
                let max = max_scroll(
                    self.scroll_container.scroll_width(),
                    self.scroll_container.client_width(),
                );
                self.left_button.set_disabled(scroll_left <= 0.0);
                self.right_button
                    .set_disabled(scroll_left >= max - self.options.edge_tolerance);
            }
        }
    }
}
