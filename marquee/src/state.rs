use crate::ScrollDirection;

/// A lightweight, serializable snapshot of a carousel's index state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    /// Logical slide position. Starts at the duplicate count in infinite mode.
    pub current_index: usize,
    /// Set while a button-driven silent re-map is pending.
    pub is_transitioning: bool,
    /// Index resolved from the last handled scroll event.
    pub last_scroll_index: Option<usize>,
    pub last_scroll_left: f64,
    pub scroll_direction: Option<ScrollDirection>,
}

/// A lightweight, serializable snapshot of the momentum wheel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MomentumState {
    /// Signed wheel delta not yet decayed away.
    pub scroll_accumulator: f64,
    /// True while the frame loop is running.
    pub is_scrolling: bool,
    pub scroll_direction: Option<ScrollDirection>,
}
