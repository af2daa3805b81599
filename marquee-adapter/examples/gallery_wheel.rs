// Example: load the work feed, mount the gallery and spin it with a horizontal wheel flick.
use marquee::{SlideEngine, SlideEvent};
use marquee_adapter::{
    EngineOptions, FeedError, FeedResponse, GalleryTrack, WORK_ITEMS_PATH, load_work_items,
    mount_gallery,
};

const FEED: &str = r#"[
  {"project": "Atlas", "client": "Northwind", "image": "img/atlas.jpg", "services": "Design", "stack": "Rust"},
  {"project": "Beacon", "client": "Contoso", "image": "img/beacon.jpg", "services": "Build", "stack": "WASM"},
  {"project": "Cinder", "client": "Fabrikam", "image": "img/cinder.jpg", "services": "Audit", "stack": "Go"},
  {"project": "Delta", "client": "Tailspin", "image": "img/delta.jpg", "services": "Design", "stack": "Swift"}
]"#;

#[derive(Debug, Default)]
struct Track {
    active: Vec<bool>,
}

impl GalleryTrack for Track {
    fn set_inner_html(&mut self, html: String) {
        let slides = html.matches(r#"class="embla__slide""#).count();
        self.active = vec![false; slides];
    }

    fn slide_count(&self) -> usize {
        self.active.len()
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        self.active[index] = active;
    }
}

/// Circular engine with uniformly spaced snaps.
#[derive(Debug)]
struct Engine {
    slides: usize,
    selected: usize,
}

impl SlideEngine for Engine {
    fn scroll_to(&mut self, index: usize, _animate: bool) {
        self.selected = index.min(self.slides.saturating_sub(1));
    }

    fn scroll_progress(&self) -> f64 {
        self.selected as f64 / self.slides as f64
    }

    fn scroll_snap_list(&self) -> Vec<f64> {
        (0..self.slides).map(|i| i as f64 / self.slides as f64).collect()
    }

    fn selected_scroll_snap(&self) -> usize {
        self.selected
    }

    fn scroll_prev(&mut self) {
        self.selected = (self.selected + self.slides - 1) % self.slides;
    }

    fn scroll_next(&mut self) {
        self.selected = (self.selected + 1) % self.slides;
    }
}

fn main() {
    let source = |path: &str| -> Result<FeedResponse, FeedError> {
        match path {
            WORK_ITEMS_PATH => Ok(FeedResponse::ok(FEED)),
            _ => Ok(FeedResponse {
                status: 404,
                body: String::new(),
            }),
        }
    };
    let items = load_work_items(&source, WORK_ITEMS_PATH);
    println!("loaded {} items", items.len());

    let mut track = Track::default();
    let Some(mut gallery) = mount_gallery(&items, Some(&mut track), &EngineOptions::default(), |_| {
        Some(Engine {
            slides: items.len(),
            selected: 0,
        })
    }) else {
        println!("gallery not mounted");
        return;
    };
    println!("active after mount: {:?}", track.active);

    let outcome = gallery.on_wheel(900.0, 40.0);
    println!("wheel: {outcome:?} prevent_default={}", outcome.prevent_default());

    let mut frames = 0;
    while gallery.frame() {
        frames += 1;
        gallery.on_engine_event(SlideEvent::Select, &mut track);
    }
    println!(
        "stopped after {frames} frames on slide {}: {:?}",
        gallery.engine().selected_scroll_snap(),
        track.active
    );

    gallery.prev();
    gallery.on_engine_event(SlideEvent::Select, &mut track);
    println!("after prev: {:?}", track.active);
}
