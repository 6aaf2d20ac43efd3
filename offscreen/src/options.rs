use alloc::sync::Arc;

use crate::GroupLayout;

/// A callback fired when a container's reserved space changes.
pub type OnLayoutCallback<C> = Arc<dyn Fn(&C, GroupLayout) + Send + Sync>;

/// Configuration for [`crate::Coordinator`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; missing fields fall
/// back to their defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlaceholderOptions {
    /// Margin above the viewport (px) inside which items stay mounted.
    pub top_offset: f64,
    /// Margin below the viewport (px) inside which items stay mounted.
    pub bottom_offset: f64,
    /// Groups with fewer items than this are never virtualized.
    pub minimum_items_threshold: usize,
    /// Delay before a deferred geometry measurement is attempted (and between retries).
    pub measure_delay_ms: u64,
    /// Debounce applied to scroll-driven recomputation. `0` runs the cycle synchronously.
    pub scroll_settle_delay_ms: u64,
    /// Debounce applied after registrations so a burst of items resolves in one cycle.
    pub registration_delay_ms: u64,
    /// Each item keeps its own spacer instead of one shared leading placeholder per group.
    pub use_per_item_placeholder: bool,
    /// Defer the apply step to the host's next display-sync callback.
    pub defer_apply_to_frame: bool,
}

impl Default for PlaceholderOptions {
    fn default() -> Self {
        Self {
            top_offset: 100.0,
            bottom_offset: 200.0,
            minimum_items_threshold: 10,
            measure_delay_ms: 0,
            scroll_settle_delay_ms: 0,
            registration_delay_ms: 1,
            use_per_item_placeholder: true,
            defer_apply_to_frame: true,
        }
    }
}

impl PlaceholderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offsets(mut self, top_offset: f64, bottom_offset: f64) -> Self {
        self.top_offset = top_offset;
        self.bottom_offset = bottom_offset;
        self
    }

    pub fn with_minimum_items_threshold(mut self, threshold: usize) -> Self {
        self.minimum_items_threshold = threshold;
        self
    }

    pub fn with_measure_delay_ms(mut self, delay_ms: u64) -> Self {
        self.measure_delay_ms = delay_ms;
        self
    }

    pub fn with_scroll_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scroll_settle_delay_ms = delay_ms;
        self
    }

    pub fn with_registration_delay_ms(mut self, delay_ms: u64) -> Self {
        self.registration_delay_ms = delay_ms;
        self
    }

    pub fn with_per_item_placeholder(mut self, per_item: bool) -> Self {
        self.use_per_item_placeholder = per_item;
        self
    }

    pub fn with_defer_apply_to_frame(mut self, defer: bool) -> Self {
        self.defer_apply_to_frame = defer;
        self
    }
}
