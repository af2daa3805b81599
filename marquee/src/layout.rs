//! Pure geometry helpers.
//!
//! Nothing here touches a host; the carousel feeds these with values it reads from the DOM seam
//! so the math stays testable on plain numbers.

/// Resolves the logical slide nearest to a raw pixel offset.
///
/// Returns `0` when `step` is not a positive finite number or the offset is negative.
pub fn offset_to_index(scroll_left: f64, step: f64) -> usize {
    if !(step.is_finite() && step > 0.0) || !(scroll_left > 0.0) {
        return 0;
    }
    let index = (scroll_left / step).round();
    if index >= usize::MAX as f64 {
        usize::MAX
    } else {
        index as usize
    }
}

/// Pixel distance of one logical step.
///
/// `card_width` is the first card's rendered width (`None` when the track has no cards), `gap`
/// the track's computed gap (`None` when it cannot be read).
pub fn step_size(card_width: Option<f64>, gap: Option<f64>, fallback_gap: f64, default: f64) -> f64 {
    match card_width {
        Some(width) => {
            let gap = gap.filter(|g| g.is_finite() && *g >= 0.0).unwrap_or(fallback_gap);
            width + gap
        }
        None => default,
    }
}

/// Parses a CSS pixel length such as `"20px"` or `"12.5"`.
///
/// Keywords (`"normal"`) and empty strings yield `None`.
pub fn parse_css_px(value: &str) -> Option<f64> {
    let v = value.trim();
    let v = v.strip_suffix("px").unwrap_or(v).trim_end();
    v.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Largest reachable scroll offset for a container.
pub fn max_scroll(scroll_width: f64, client_width: f64) -> f64 {
    (scroll_width - client_width).max(0.0)
}

/// Maps any track index into the real window `[duplicate_count, duplicate_count + total_items)`.
///
/// Indexes already inside the real window are returned unchanged; clone-zone indexes land on
/// the genuine item they mirror.
pub fn wrap_into_real(index: usize, duplicate_count: usize, total_items: usize) -> usize {
    if total_items == 0 {
        return index;
    }
    let d = duplicate_count as i64;
    let offset = (index as i64 - d).rem_euclid(total_items as i64);
    (d + offset) as usize
}

/// True when `index` lies in one of the clone zones.
pub fn in_clone_zone(index: usize, duplicate_count: usize, total_items: usize) -> bool {
    index < duplicate_count || index >= duplicate_count.saturating_add(total_items)
}
