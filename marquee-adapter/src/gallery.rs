use marquee::{MomentumOptions, MomentumWheel, SlideEngine, SlideEvent, WheelOutcome};
use serde::{Deserialize, Serialize};

use crate::{WorkItem, render_work_gallery};

/// The element receiving the rendered slides.
pub trait GalleryTrack {
    fn set_inner_html(&mut self, html: String);

    fn slide_count(&self) -> usize;

    /// Toggles the active-slide marker class on one slide.
    fn set_slide_active(&mut self, index: usize, active: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideAlign {
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainScroll {
    TrimSnaps,
    KeepSnaps,
}

/// Options handed to the slide-engine factory.
///
/// Serialized in the engine's camelCase naming so it can be passed straight through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineOptions {
    #[serde(rename = "loop")]
    pub looping: bool,
    pub align: SlideAlign,
    pub contain_scroll: ContainScroll,
    pub slides_to_scroll: usize,
    pub skip_snaps: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            looping: true,
            align: SlideAlign::Center,
            contain_scroll: ContainScroll::TrimSnaps,
            slides_to_scroll: 1,
            skip_snaps: false,
        }
    }
}

/// The work gallery: a slide engine plus the momentum wheel feeding it.
#[derive(Clone, Debug)]
pub struct Gallery<E> {
    engine: E,
    wheel: MomentumWheel,
}

impl<E: SlideEngine> Gallery<E> {
    pub fn new(engine: E, momentum: MomentumOptions) -> Self {
        Self {
            engine,
            wheel: MomentumWheel::new(momentum),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn wheel(&self) -> &MomentumWheel {
        &self.wheel
    }

    pub fn prev(&mut self) {
        self.engine.scroll_prev();
    }

    pub fn next(&mut self) {
        self.engine.scroll_next();
    }

    /// Forward the engine's `init`/`select` notifications here.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn on_engine_event(&mut self, event: SlideEvent, track: &mut impl GalleryTrack) {
        atrace!(?event, "Gallery::on_engine_event");
        self.update_active_slide(track);
    }

    /// Marks the engine's selected slide active and every other slide inactive.
    pub fn update_active_slide(&self, track: &mut impl GalleryTrack) {
        let selected = self.engine.selected_scroll_snap();
        for index in 0..track.slide_count() {
            track.set_slide_active(index, index == selected);
        }
    }

    /// Forward wheel events over the gallery viewport here.
    pub fn on_wheel(&mut self, delta_x: f64, delta_y: f64) -> WheelOutcome {
        self.wheel.on_wheel(delta_x, delta_y)
    }

    /// Runs one animation frame of the wheel loop. Returns `true` while more frames are needed.
    pub fn frame(&mut self) -> bool {
        self.wheel.frame(&mut self.engine)
    }
}

/// Renders the items and starts the slide engine over them.
///
/// Returns `None` without side effects when there are no items or no track. When `factory`
/// returns `None` (engine unavailable) the slides stay rendered but nothing is wired.
pub fn mount_gallery<T, E>(
    items: &[WorkItem],
    track: Option<&mut T>,
    options: &EngineOptions,
    factory: impl FnOnce(&EngineOptions) -> Option<E>,
) -> Option<Gallery<E>>
where
    T: GalleryTrack,
    E: SlideEngine,
{
    if items.is_empty() {
        adebug!("mount_gallery: no items, leaving gallery unrendered");
        return None;
    }
    let Some(track) = track else {
        adebug!("mount_gallery: missing track");
        return None;
    };

    track.set_inner_html(render_work_gallery(items));

    let Some(engine) = factory(options) else {
        awarn!("mount_gallery: slide engine unavailable");
        return None;
    };
    let gallery = Gallery::new(engine, MomentumOptions::default());
    gallery.update_active_slide(track);
    adebug!(count = items.len(), "mount_gallery");
    Some(gallery)
}
