use offscreen::{
    BoxError, ContainerKey, Coordinator, ItemId, Placement, PlaceholderOptions, Registration,
    ScrollHost, UpdateOutcome,
};

use crate::key::{BindingKey, KeyMap};
use crate::{ParseGeometryError, Slot, SlotHandle, parse_geometry};

/// Errors from [`Controller::bind`].
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("key is already bound")]
    DuplicateKey,
    #[error(transparent)]
    Parse(#[from] ParseGeometryError),
    /// The first mount failed. Nothing stays bound under the key, so the bind can be retried.
    #[error(transparent)]
    Coordinator(#[from] offscreen::Error),
}

/// A framework-neutral binding layer around an [`offscreen::Coordinator`].
///
/// It maps the keys of a data set to registered items, so list items can be bound and unbound
/// as they enter and leave the data set. This type does not hold any UI objects. Adapters drive
/// it by calling:
/// - `bind` / `unbind` when the data set changes
/// - `on_scroll` / `on_resize` when UI events occur
/// - `frame(now_ms)` each frame/timer tick
pub struct Controller<K, C, H> {
    coordinator: Coordinator<C, H>,
    bindings: KeyMap<K, ItemId>,
}

impl<K: BindingKey, C: ContainerKey, H: ScrollHost<C>> Controller<K, C, H> {
    pub fn new(options: PlaceholderOptions, host: H) -> Self {
        Self::from_coordinator(Coordinator::new(options, host))
    }

    pub fn from_coordinator(coordinator: Coordinator<C, H>) -> Self {
        Self {
            coordinator,
            bindings: KeyMap::default(),
        }
    }

    pub fn coordinator(&self) -> &Coordinator<C, H> {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut Coordinator<C, H> {
        &mut self.coordinator
    }

    pub fn into_coordinator(self) -> Coordinator<C, H> {
        self.coordinator
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn item_id(&self, key: &K) -> Option<ItemId> {
        self.bindings.get(key).copied()
    }

    /// Binds a list item whose geometry comes from an attribute (see [`parse_geometry`]).
    ///
    /// `factory` builds the item's content each time it is mounted; the returned handle observes
    /// it.
    pub fn bind<T, F>(
        &mut self,
        key: K,
        container: C,
        geometry_attr: &str,
        factory: F,
        now_ms: u64,
    ) -> Result<SlotHandle<T>, BindError>
    where
        T: 'static,
        F: FnMut(Placement) -> Result<T, BoxError> + 'static,
    {
        if self.bindings.contains_key(&key) {
            return Err(BindError::DuplicateKey);
        }
        let geometry = parse_geometry(geometry_attr)?;
        let (slot, handle) = Slot::new(factory);
        self.bind_registration(key, Registration::new(container, geometry, slot), now_ms)?;
        Ok(handle)
    }

    /// Binds a prepared registration under `key`.
    ///
    /// If the coordinator mounts the item right away and that mount fails, the item is
    /// unregistered again and the error is returned.
    pub fn bind_registration(
        &mut self,
        key: K,
        registration: Registration<C>,
        now_ms: u64,
    ) -> Result<ItemId, BindError> {
        if self.bindings.contains_key(&key) {
            return Err(BindError::DuplicateKey);
        }
        match self.coordinator.register_element(registration, now_ms) {
            Ok(id) => {
                adebug!(item = id.get(), "bind");
                self.bindings.insert(key, id);
                Ok(id)
            }
            Err(err) => {
                let id = err.item();
                adebug!(item = id.get(), "bind rolled back");
                self.coordinator.unregister_element(id);
                Err(err.into())
            }
        }
    }

    /// Unbinds the item under `key`. Returns `false` if nothing was bound.
    pub fn unbind(&mut self, key: &K) -> bool {
        let Some(id) = self.bindings.remove(key) else {
            return false;
        };
        adebug!(item = id.get(), "unbind");
        self.coordinator.unregister_element(id)
    }

    pub fn on_scroll(&mut self, now_ms: u64) -> Result<Option<UpdateOutcome>, offscreen::Error> {
        self.coordinator.on_scroll(now_ms)
    }

    pub fn on_resize(&mut self) -> Result<Option<UpdateOutcome>, offscreen::Error> {
        self.coordinator.on_resize()
    }

    /// Advances the coordinator by one frame: runs due work, then applies any deferred plan.
    ///
    /// Returns the outcome of the apply step if there was one, otherwise that of the tick.
    pub fn frame(&mut self, now_ms: u64) -> Result<Option<UpdateOutcome>, offscreen::Error> {
        let ticked = self.coordinator.tick(now_ms)?;
        let applied = self.coordinator.on_animation_frame()?;
        Ok(applied.or(ticked))
    }
}
