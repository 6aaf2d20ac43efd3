use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use offscreen::{BoxError, Lifecycle, Placement};

struct SlotState<T> {
    content: Option<T>,
    placement: Option<Placement>,
    mount_count: usize,
}

/// Read access to the content a [`Slot`] currently holds.
pub struct SlotHandle<T> {
    state: Rc<RefCell<SlotState<T>>>,
}

impl<T> Clone for SlotHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> SlotHandle<T> {
    pub fn is_mounted(&self) -> bool {
        self.state.borrow().content.is_some()
    }

    /// Where the content was placed by the last mount, while it is mounted.
    pub fn placement(&self) -> Option<Placement> {
        self.state.borrow().placement
    }

    /// How many times content has been built.
    pub fn mount_count(&self) -> usize {
        self.state.borrow().mount_count
    }

    pub fn with_content<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.state.borrow().content.as_ref().map(f)
    }
}

impl<T> fmt::Debug for SlotHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("SlotHandle")
            .field("mounted", &state.content.is_some())
            .field("placement", &state.placement)
            .field("mount_count", &state.mount_count)
            .finish()
    }
}

/// A [`Lifecycle`] that builds content on mount and drops it on unmount.
///
/// Dropping the content is the teardown: whatever the factory returns (a view, a scope guard,
/// a DOM node wrapper) releases its resources in `Drop`.
pub struct Slot<T, F> {
    state: Rc<RefCell<SlotState<T>>>,
    factory: F,
}

impl<T, F> Slot<T, F>
where
    F: FnMut(Placement) -> Result<T, BoxError>,
{
    pub fn new(factory: F) -> (Self, SlotHandle<T>) {
        let state = Rc::new(RefCell::new(SlotState {
            content: None,
            placement: None,
            mount_count: 0,
        }));
        let handle = SlotHandle {
            state: Rc::clone(&state),
        };
        (Self { state, factory }, handle)
    }
}

impl<T, F> Lifecycle for Slot<T, F>
where
    F: FnMut(Placement) -> Result<T, BoxError>,
{
    fn mount(&mut self, placement: Placement) -> Result<(), BoxError> {
        let content = (self.factory)(placement)?;
        let mut state = self.state.borrow_mut();
        state.content = Some(content);
        state.placement = Some(placement);
        state.mount_count += 1;
        Ok(())
    }

    fn unmount(&mut self) -> Result<(), BoxError> {
        // Release the borrow before the content's destructor runs.
        let content = {
            let mut state = self.state.borrow_mut();
            state.placement = None;
            state.content.take()
        };
        drop(content);
        Ok(())
    }
}
