//! Page wiring for the `marquee` carousel.
//!
//! The `marquee` crate holds the stateful controllers. This crate provides the pieces a showcase
//! page puts around them:
//!
//! - Loading the work-item feed (failures degrade to an empty gallery)
//! - Rendering gallery slide markup
//! - Wiring a slide engine, its active-slide marker and the momentum wheel together
//! - Presets for the technology strip
//!
//! Like `marquee`, this crate is framework-agnostic: element handles and the slide engine are
//! traits the embedding layer implements.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod feed;
mod gallery;
mod markup;
mod tech;


pub use feed::{
    FeedError, FeedResponse, FeedSource, WORK_ITEMS_PATH, WorkItem, fetch_work_items,
    load_work_items, parse_work_items,
};
pub use gallery::{ContainScroll, EngineOptions, Gallery, GalleryTrack, SlideAlign, mount_gallery};
pub use markup::render_work_gallery;
pub use tech::{TECH_CARD_SELECTOR, TECH_SCROLL_AMOUNT, mount_tech_carousel, tech_carousel_options};
