use marquee::{CardTrack, Carousel, CarouselElements, CarouselOptions, NavButton, ScrollContainer};

pub const TECH_CARD_SELECTOR: &str = ".tech-card";
pub const TECH_SCROLL_AMOUNT: f64 = 392.0;

/// Options for the technology strip: finite, stepping one tech card at a time.
pub fn tech_carousel_options() -> CarouselOptions {
    CarouselOptions::new(TECH_CARD_SELECTOR).with_default_scroll_amount(TECH_SCROLL_AMOUNT)
}

/// Mounts the technology strip. `None` when any element is missing.
pub fn mount_tech_carousel<S, T, B>(
    elements: CarouselElements<S, T, B>,
    now_ms: u64,
) -> Option<Carousel<S, T, B>>
where
    S: ScrollContainer,
    T: CardTrack,
    B: NavButton,
{
    Carousel::mount(tech_carousel_options(), elements, now_ms)
}
