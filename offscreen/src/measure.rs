use alloc::boxed::Box;

use crate::{Geometry, ItemId, Lifecycle, MountState};

/// Reads an item's geometry once the binding layer can measure it.
///
/// Returning `None` means "not laid out yet"; the coordinator asks again after
/// `measure_delay_ms`.
pub trait GeometryProvider {
    fn measure(&mut self) -> Option<Geometry>;
}

impl<F: FnMut() -> Option<Geometry>> GeometryProvider for F {
    fn measure(&mut self) -> Option<Geometry> {
        self()
    }
}

pub(crate) enum GeometrySource {
    Eager(Geometry),
    Deferred(Box<dyn GeometryProvider>),
}

/// Everything the coordinator needs to start tracking an item.
pub struct Registration<C> {
    pub(crate) container: C,
    pub(crate) source: GeometrySource,
    pub(crate) lifecycle: Box<dyn Lifecycle>,
    pub(crate) state: MountState,
}

impl<C> Registration<C> {
    /// An item whose geometry is already known.
    pub fn new(container: C, geometry: Geometry, lifecycle: impl Lifecycle + 'static) -> Self {
        Self {
            container,
            source: GeometrySource::Eager(geometry),
            lifecycle: Box::new(lifecycle),
            state: MountState::Placeholder,
        }
    }

    /// An item that is registered once `provider` reports its geometry.
    pub fn measured(
        container: C,
        provider: impl GeometryProvider + 'static,
        lifecycle: impl Lifecycle + 'static,
    ) -> Self {
        Self {
            container,
            source: GeometrySource::Deferred(Box::new(provider)),
            lifecycle: Box::new(lifecycle),
            state: MountState::Placeholder,
        }
    }

    /// Declares that the binding layer already inserted the item's content.
    pub fn mounted(mut self, mounted: bool) -> Self {
        self.state = MountState::from_mounted(mounted);
        self
    }

    pub fn container(&self) -> &C {
        &self.container
    }
}

pub(crate) struct PendingMeasurement<C> {
    pub(crate) id: ItemId,
    pub(crate) container: C,
    pub(crate) provider: Box<dyn GeometryProvider>,
    pub(crate) lifecycle: Box<dyn Lifecycle>,
    pub(crate) state: MountState,
    pub(crate) due_ms: u64,
}
