/// Direction of travel along the carousel axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Backward,
    Forward,
}

impl ScrollDirection {
    /// Direction of a signed delta; `None` for zero (or NaN).
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Forward)
        } else if delta < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }

    pub fn sign(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// One of the two navigation buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nav {
    Left,
    Right,
}

impl Nav {
    pub fn direction(self) -> ScrollDirection {
        match self {
            Self::Left => ScrollDirection::Backward,
            Self::Right => ScrollDirection::Forward,
        }
    }
}

/// Horizontal extent of an element, in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
}

impl Bounds {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Partial overlap counts; touching edges do not.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left < other.right && self.right > other.left
    }
}

/// Index semantics resolved at mount time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselMode {
    /// Clamp at the edges; only the container's native offset is tracked.
    Finite,
    /// `[leading clones][real items][trailing clones]`, each clone zone `duplicate_count` long.
    Infinite {
        duplicate_count: usize,
        total_items: usize,
    },
}

impl CarouselMode {
    /// Picks infinite semantics only when both counts are usable.
    pub fn resolve(infinite: bool, duplicate_count: usize, total_items: usize) -> Self {
        if infinite && duplicate_count > 0 && total_items > 0 {
            Self::Infinite {
                duplicate_count,
                total_items,
            }
        } else {
            Self::Finite
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite { .. })
    }

    /// Number of cards the track is expected to hold (`0` in finite mode).
    pub fn track_len(&self) -> usize {
        match *self {
            Self::Finite => 0,
            Self::Infinite {
                duplicate_count,
                total_items,
            } => duplicate_count.saturating_mul(2).saturating_add(total_items),
        }
    }
}
