/// Fallback step (in pixels) when no card can be measured.
pub const DEFAULT_SCROLL_AMOUNT: f64 = 392.0;
/// Gap assumed when the track's computed gap cannot be read.
pub const DEFAULT_FALLBACK_GAP: f64 = 20.0;
/// Matches the duration of the host's animated scroll.
pub const DEFAULT_WRAP_DELAY_MS: u64 = 500;
/// Quiet period before a manual scroll counts as settled.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 200;

/// Data attribute carrying the number of cloned items on each side of the track.
pub const DUPLICATE_COUNT_ATTRIBUTE: &str = "data-duplicate-count";
/// Data attribute carrying the number of genuine items on the track.
pub const TOTAL_ITEMS_ATTRIBUTE: &str = "data-total-items";

/// Configuration for [`crate::Carousel`].
///
/// Options are fixed for the lifetime of a mounted carousel. With `feature = "serde"`, every
/// field except `card_selector` falls back to its default when absent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    /// Selector identifying card elements inside the track.
    pub card_selector: String,

    #[cfg_attr(feature = "serde", serde(default = "default_scroll_amount"))]
    pub default_scroll_amount: f64,

    /// Enables wrap-around semantics.
    ///
    /// Infinite mode also needs non-zero duplicate/total counts, either set here or read from
    /// the track's data attributes. Otherwise the carousel behaves as a finite one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub infinite: bool,

    /// Explicit duplicate count. When `None`, [`DUPLICATE_COUNT_ATTRIBUTE`] is read.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duplicate_count: Option<usize>,

    /// Explicit genuine item count. When `None`, [`TOTAL_ITEMS_ATTRIBUTE`] is read.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_items: Option<usize>,

    #[cfg_attr(feature = "serde", serde(default = "default_fallback_gap"))]
    pub fallback_gap: f64,

    /// How close to the maximum offset counts as "at the end" in finite mode.
    #[cfg_attr(feature = "serde", serde(default = "default_edge_tolerance"))]
    pub edge_tolerance: f64,

    /// Delay between a button-driven step into a clone zone and the silent re-map.
    #[cfg_attr(feature = "serde", serde(default = "default_wrap_delay_ms"))]
    pub wrap_delay_ms: u64,

    #[cfg_attr(feature = "serde", serde(default = "default_settle_delay_ms"))]
    pub settle_delay_ms: u64,

    /// Button state refresh after a click.
    #[cfg_attr(feature = "serde", serde(default = "default_nav_refresh_delay_ms"))]
    pub nav_refresh_delay_ms: u64,

    /// Button state refresh after mount, once late layout has settled.
    #[cfg_attr(feature = "serde", serde(default = "default_mount_refresh_delay_ms"))]
    pub mount_refresh_delay_ms: u64,
}

#[cfg(feature = "serde")]
fn default_scroll_amount() -> f64 {
    DEFAULT_SCROLL_AMOUNT
}

#[cfg(feature = "serde")]
fn default_fallback_gap() -> f64 {
    DEFAULT_FALLBACK_GAP
}

#[cfg(feature = "serde")]
fn default_edge_tolerance() -> f64 {
    2.0
}

#[cfg(feature = "serde")]
fn default_wrap_delay_ms() -> u64 {
    DEFAULT_WRAP_DELAY_MS
}

#[cfg(feature = "serde")]
fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

#[cfg(feature = "serde")]
fn default_nav_refresh_delay_ms() -> u64 {
    500
}

#[cfg(feature = "serde")]
fn default_mount_refresh_delay_ms() -> u64 {
    100
}

impl CarouselOptions {
    /// Creates finite-mode options for cards matching `card_selector`.
    pub fn new(card_selector: impl Into<String>) -> Self {
        Self {
            card_selector: card_selector.into(),
            default_scroll_amount: DEFAULT_SCROLL_AMOUNT,
            infinite: false,
            duplicate_count: None,
            total_items: None,
            fallback_gap: DEFAULT_FALLBACK_GAP,
            edge_tolerance: 2.0,
            wrap_delay_ms: DEFAULT_WRAP_DELAY_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            nav_refresh_delay_ms: 500,
            mount_refresh_delay_ms: 100,
        }
    }

    pub fn with_default_scroll_amount(mut self, amount: f64) -> Self {
        self.default_scroll_amount = amount;
        self
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Sets both counts explicitly instead of reading them from the track.
    pub fn with_counts(mut self, duplicate_count: usize, total_items: usize) -> Self {
        self.duplicate_count = Some(duplicate_count);
        self.total_items = Some(total_items);
        self
    }

    pub fn with_fallback_gap(mut self, gap: f64) -> Self {
        self.fallback_gap = gap;
        self
    }

    pub fn with_edge_tolerance(mut self, tolerance: f64) -> Self {
        self.edge_tolerance = tolerance;
        self
    }

    pub fn with_wrap_delay_ms(mut self, delay_ms: u64) -> Self {
        self.wrap_delay_ms = delay_ms;
        self
    }

    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    pub fn with_nav_refresh_delay_ms(mut self, delay_ms: u64) -> Self {
        self.nav_refresh_delay_ms = delay_ms;
        self
    }

    pub fn with_mount_refresh_delay_ms(mut self, delay_ms: u64) -> Self {
        self.mount_refresh_delay_ms = delay_ms;
        self
    }
}

/// Tuning for [`crate::MomentumWheel`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MomentumOptions {
    /// The loop stops once `|accumulator|` drops to this value or below.
    pub threshold: f64,
    /// Wheel pixels per full revolution of scroll progress.
    pub progress_divisor: f64,
    /// Per-frame multiplier applied to the accumulator.
    pub decay: f64,
}

impl Default for MomentumOptions {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            progress_divisor: 2000.0,
            decay: 0.85,
        }
    }
}

impl MomentumOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_progress_divisor(mut self, divisor: f64) -> Self {
        self.progress_divisor = divisor;
        self
    }

    /// Clamped to `[0, 0.99]` so the decay loop always terminates.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay.clamp(0.0, 0.99);
        self
    }
}

/// Parses a count attribute the way a lenient integer prefix parser does.
///
/// Leading whitespace and an optional sign are accepted, trailing garbage is ignored
/// (`"3px"` → 3). Missing, non-numeric, negative and overflowing values all yield `0`.
pub fn parse_count(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return 0;
    };
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 || negative {
        return 0;
    }
    digits[..end].parse::<usize>().unwrap_or(0)
}
