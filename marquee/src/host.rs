//! The seam between the headless carousel and a real UI.
//!
//! An adapter implements these traits over its element handles (DOM nodes, widget ids, ...).
//! Geometry is reported in CSS pixels: `bounds` are viewport coordinates, offsets are relative
//! to the scroll container's content.

use crate::Bounds;

/// The horizontally scrolling viewport.
pub trait ScrollContainer {
    fn scroll_left(&self) -> f64;
    fn scroll_width(&self) -> f64;
    fn client_width(&self) -> f64;
    fn bounds(&self) -> Bounds;

    /// Scrolls to an absolute offset. `animate = false` must jump immediately.
    fn scroll_to(&mut self, left: f64, animate: bool);

    fn scroll_by(&mut self, delta: f64, animate: bool);
}

/// The element holding the cards.
pub trait CardTrack {
    fn card_count(&self, selector: &str) -> usize;

    /// Rendered width of the `index`-th card matching `selector`.
    fn card_width(&self, selector: &str, index: usize) -> Option<f64>;

    fn card_bounds(&self, selector: &str, index: usize) -> Option<Bounds>;

    /// Computed gap between cards, `None` when unreadable.
    fn gap(&self) -> Option<f64>;

    fn data_attribute(&self, name: &str) -> Option<String>;
}

pub trait NavButton {
    fn set_disabled(&mut self, disabled: bool);
}

/// Element handles a carousel mounts onto. Any `None` skips the mount.
#[derive(Debug)]
pub struct CarouselElements<S, T, B> {
    pub scroll_container: Option<S>,
    pub card_container: Option<T>,
    pub left_button: Option<B>,
    pub right_button: Option<B>,
}

impl<S, T, B> CarouselElements<S, T, B> {
    pub fn new(scroll_container: S, card_container: T, left_button: B, right_button: B) -> Self {
        Self {
            scroll_container: Some(scroll_container),
            card_container: Some(card_container),
            left_button: Some(left_button),
            right_button: Some(right_button),
        }
    }

    pub(crate) fn into_parts(self) -> Option<(S, T, B, B)> {
        Some((
            self.scroll_container?,
            self.card_container?,
            self.left_button?,
            self.right_button?,
        ))
    }
}
