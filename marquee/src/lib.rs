//! A headless infinite carousel and momentum wheel engine.
//!
//! For page wiring (item feed, gallery markup, slide-engine glue), see the `marquee-adapter`
//! crate.
//!
//! This crate holds the parts of a showcase carousel that carry real state:
//! - index/offset math for a horizontally scrolling strip of cards
//! - wrap-around through cloned boundary items with silent re-mapping
//! - transition locking so rapid input cannot compound jumps
//! - a decaying wheel-to-slide loop over an external slide engine
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - element handles implementing [`ScrollContainer`], [`CardTrack`] and [`NavButton`]
//! - a [`SlideEngine`] for the momentum wheel
//! - a monotonic clock (`now_ms`) and a way to call `tick`/`frame` later
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod carousel;
mod host;
pub mod layout;
mod momentum;
mod options;
mod settle;
mod state;
mod types;


pub use carousel::Carousel;
pub use host::{CardTrack, CarouselElements, NavButton, ScrollContainer};
pub use momentum::{
    MomentumWheel, SlideEngine, SlideEvent, WheelOutcome, resolve_target_index, wrap_progress,
};
pub use options::{
    CarouselOptions, DEFAULT_FALLBACK_GAP, DEFAULT_SCROLL_AMOUNT, DEFAULT_SETTLE_DELAY_MS,
    DEFAULT_WRAP_DELAY_MS, DUPLICATE_COUNT_ATTRIBUTE, MomentumOptions, TOTAL_ITEMS_ATTRIBUTE,
    parse_count,
};
pub use settle::SettleDetector;
pub use state::{CarouselState, MomentumState};
pub use types::{Bounds, CarouselMode, Nav, ScrollDirection};
