/// The environment a [`crate::Coordinator`] reads geometry from and subscribes to.
///
/// Scroll position and viewport height are read on every cycle and never cached by the
/// coordinator.
pub trait ScrollHost<C> {
    fn scroll_top(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// Distance from the top of the scroll content to `container`'s top edge.
    ///
    /// Read once, when the container's group is created.
    fn container_origin(&self, _container: &C) -> f64 {
        0.0
    }

    /// Subscribe to scroll and resize events. Called when the first group is created.
    fn attach_listeners(&mut self);

    /// Unsubscribe from scroll and resize events. Called when the last group is removed.
    fn detach_listeners(&mut self);
}

/// A host whose geometry is set by hand.
///
/// Useful for simulations, non-DOM frontends and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManualHost {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub listening: bool,
    pub attach_count: usize,
    pub detach_count: usize,
}

impl ManualHost {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            ..Self::default()
        }
    }
}

impl<C> ScrollHost<C> for ManualHost {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn attach_listeners(&mut self) {
        self.listening = true;
        self.attach_count += 1;
    }

    fn detach_listeners(&mut self) {
        self.listening = false;
        self.detach_count += 1;
    }
}
