/// A snapshot of the scroll container, read from the host at the start of every cycle.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, height: f64) -> Self {
        Self { scroll_top, height }
    }
}

/// The scroll-relative interval used to decide mount eligibility.
///
/// An item is inside when its bottom edge is strictly below `lower` and its top edge strictly
/// above `upper`; touching either bound counts as outside.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub lower: f64,
    pub upper: f64,
}

impl Window {
    pub fn new(viewport: Viewport, top_offset: f64, bottom_offset: f64) -> Self {
        Self {
            lower: viewport.scroll_top - top_offset,
            upper: viewport.scroll_top + viewport.height + bottom_offset,
        }
    }

    pub fn contains(&self, top: f64, inner_height: f64) -> bool {
        top + inner_height > self.lower && top < self.upper
    }
}
