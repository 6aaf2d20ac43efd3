use alloc::boxed::Box;
use core::fmt;

use crate::{BoxError, Error, Geometry, ItemId, MountState, Placement};

/// The binding layer's side of an item: attaches and detaches its real content.
///
/// Both callbacks run synchronously inside the coordinator's update cycle. Returning an error
/// leaves the item in its previous state and aborts the rest of the cycle.
pub trait Lifecycle {
    fn mount(&mut self, placement: Placement) -> Result<(), BoxError>;
    fn unmount(&mut self) -> Result<(), BoxError>;
}

impl<L: Lifecycle + ?Sized> Lifecycle for Box<L> {
    fn mount(&mut self, placement: Placement) -> Result<(), BoxError> {
        (**self).mount(placement)
    }

    fn unmount(&mut self) -> Result<(), BoxError> {
        (**self).unmount()
    }
}

/// A [`Lifecycle`] built from a pair of closures.
pub struct Callbacks<M, U> {
    mount: M,
    unmount: U,
}

impl<M, U> Callbacks<M, U>
where
    M: FnMut(Placement) -> Result<(), BoxError>,
    U: FnMut() -> Result<(), BoxError>,
{
    pub fn new(mount: M, unmount: U) -> Self {
        Self { mount, unmount }
    }
}

impl<M, U> Lifecycle for Callbacks<M, U>
where
    M: FnMut(Placement) -> Result<(), BoxError>,
    U: FnMut() -> Result<(), BoxError>,
{
    fn mount(&mut self, placement: Placement) -> Result<(), BoxError> {
        (self.mount)(placement)
    }

    fn unmount(&mut self) -> Result<(), BoxError> {
        (self.unmount)()
    }
}

/// A registered item as seen by the coordinator.
///
/// `top_offset` is fixed at registration: registration order defines vertical order, and items
/// below a removed sibling keep their original offsets.
pub struct Item<C> {
    container: C,
    geometry: Geometry,
    valid: bool,
    top_offset: f64,
    state: MountState,
    lifecycle: Box<dyn Lifecycle>,
}

impl<C> Item<C> {
    pub(crate) fn new(
        container: C,
        geometry: Geometry,
        top_offset: f64,
        state: MountState,
        lifecycle: Box<dyn Lifecycle>,
    ) -> Self {
        Self {
            container,
            valid: geometry.is_valid(),
            geometry,
            top_offset,
            state,
            lifecycle,
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub(crate) fn into_container(self) -> C {
        self.container
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn has_valid_geometry(&self) -> bool {
        self.valid
    }

    pub fn inner_height(&self) -> f64 {
        if self.valid {
            self.geometry.inner_height
        } else {
            0.0
        }
    }

    /// The height this item adds to its group's offsets (`0` for invalid geometry).
    pub fn height(&self) -> f64 {
        if self.valid { self.geometry.height } else { 0.0 }
    }

    /// Distance from the container's top edge to this item's top edge.
    pub fn top_offset(&self) -> f64 {
        self.top_offset
    }

    pub fn state(&self) -> MountState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.state.is_mounted()
    }

    /// Where mount places the content.
    ///
    /// Items with invalid geometry still report their declared `inner_height` when it is usable,
    /// so always-mounted content is not collapsed; otherwise it is `0`.
    pub fn placement(&self) -> Placement {
        let declared = self.geometry.inner_height;
        let inner_height = if declared.is_finite() && declared >= 0.0 {
            declared
        } else {
            0.0
        };
        Placement {
            top: self.top_offset,
            inner_height,
        }
    }

    /// Moves the item to `target`, invoking the matching callback.
    ///
    /// Returns `Ok(false)` when the item is already in `target`. The recorded state only changes
    /// after the callback succeeds.
    pub(crate) fn transition(&mut self, id: ItemId, target: MountState) -> Result<bool, Error> {
        if self.state == target {
            return Ok(false);
        }
        match target {
            MountState::Mounted => {
                let placement = self.placement();
                self.lifecycle
                    .mount(placement)
                    .map_err(|source| Error::Mount { item: id, source })?;
            }
            MountState::Placeholder => {
                self.lifecycle
                    .unmount()
                    .map_err(|source| Error::Unmount { item: id, source })?;
            }
        }
        self.state = target;
        Ok(true)
    }
}

impl<C: fmt::Debug> fmt::Debug for Item<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("container", &self.container)
            .field("geometry", &self.geometry)
            .field("valid", &self.valid)
            .field("top_offset", &self.top_offset)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
