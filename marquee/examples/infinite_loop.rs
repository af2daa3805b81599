// Example: drive an infinite carousel against an in-memory track.
use marquee::{
    Bounds, CardTrack, Carousel, CarouselElements, CarouselOptions, Nav, NavButton,
    ScrollContainer,
};

const CARD: f64 = 200.0;
const GAP: f64 = 16.0;
const CARDS: usize = 3 * 2 + 6;

#[derive(Debug, Default)]
struct Strip {
    scroll_left: f64,
}

impl Strip {
    fn max(&self) -> f64 {
        CARDS as f64 * (CARD + GAP) - GAP - 640.0
    }
}

impl ScrollContainer for Strip {
    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }
    fn scroll_width(&self) -> f64 {
        CARDS as f64 * (CARD + GAP) - GAP
    }
    fn client_width(&self) -> f64 {
        640.0
    }
    fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 640.0)
    }
    fn scroll_to(&mut self, left: f64, _animate: bool) {
        self.scroll_left = left.clamp(0.0, self.max());
    }
    fn scroll_by(&mut self, delta: f64, animate: bool) {
        self.scroll_to(self.scroll_left + delta, animate);
    }
}

#[derive(Debug)]
struct Track;

impl CardTrack for Track {
    fn card_count(&self, _selector: &str) -> usize {
        CARDS
    }
    fn card_width(&self, _selector: &str, _index: usize) -> Option<f64> {
        Some(CARD)
    }
    fn card_bounds(&self, _selector: &str, _index: usize) -> Option<Bounds> {
        None
    }
    fn gap(&self) -> Option<f64> {
        Some(GAP)
    }
    fn data_attribute(&self, name: &str) -> Option<String> {
        match name {
            "data-duplicate-count" => Some("3".into()),
            "data-total-items" => Some("6".into()),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Button;

impl NavButton for Button {
    fn set_disabled(&mut self, _disabled: bool) {}
}

fn main() {
    let options = CarouselOptions::new(".card").with_infinite(true);
    let elements = CarouselElements::new(Strip::default(), Track, Button, Button);
    let Some(mut carousel) = Carousel::mount(options, elements, 0) else {
        return;
    };

    let mut now_ms = 0u64;
    carousel.tick(now_ms);
    println!("mounted: {:?}", carousel.state());

    // Walk forward twice around the loop.
    for _ in 0..12 {
        now_ms += 16;
        carousel.click(Nav::Right, now_ms);
        println!(
            "t={now_ms}ms index={} transitioning={}",
            carousel.current_index(),
            carousel.is_transitioning()
        );

        while let Some(due) = carousel.next_deadline() {
            now_ms = now_ms.max(due);
            carousel.tick(now_ms);
        }
        println!(
            "  settled index={} offset={}",
            carousel.current_index(),
            carousel.scroll_container().scroll_left()
        );
    }
}
