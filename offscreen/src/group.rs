use alloc::vec::Vec;

use crate::key::ContainerKey;
use crate::{GroupLayout, ItemId};

/// Items sharing one container, in registration (= top-to-bottom) order.
#[derive(Clone, Debug)]
pub struct Group<C> {
    container: C,
    origin: f64,
    items: Vec<ItemId>,
    total_height: f64,
    placeholder_height: f64,
}

impl<C> Group<C> {
    fn new(container: C, origin: f64) -> Self {
        Self {
            container,
            origin,
            items: Vec::new(),
            total_height: 0.0,
            placeholder_height: 0.0,
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Distance from the top of the scroll content to the container's top edge.
    pub fn origin(&self) -> f64 {
        self.origin
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the registered items' heights.
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Height of the shared leading placeholder as of the last applied cycle.
    pub fn placeholder_height(&self) -> f64 {
        self.placeholder_height
    }

    pub fn layout(&self, per_item_placeholder: bool) -> GroupLayout {
        GroupLayout {
            total_height: self.total_height,
            leading_placeholder_height: (!per_item_placeholder).then_some(self.placeholder_height),
        }
    }

    /// Appends an item and returns its top offset inside the container.
    pub(crate) fn push(&mut self, id: ItemId, height: f64) -> f64 {
        let top = self.total_height;
        self.items.push(id);
        self.total_height += height;
        top
    }

    /// Removes an item without reflowing the offsets of the items below it.
    pub(crate) fn remove(&mut self, id: ItemId, height: f64) -> bool {
        let Some(index) = self.items.iter().position(|&it| it == id) else {
            return false;
        };
        self.items.remove(index);
        self.total_height -= height;
        if self.items.is_empty() {
            self.total_height = 0.0;
        }
        true
    }

    pub(crate) fn set_placeholder_height(&mut self, height: f64) {
        self.placeholder_height = height;
    }
}

/// Maps container identity to its [`Group`].
///
/// Groups keep creation order, so cycles visit containers deterministically.
#[derive(Clone, Debug)]
pub struct GroupRegistry<C> {
    groups: Vec<Group<C>>,
}

impl<C> Default for GroupRegistry<C> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<C: ContainerKey> GroupRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, container: &C) -> Option<usize> {
        self.groups.iter().position(|g| g.container == *container)
    }

    /// Returns the group for `container`, creating an empty one if needed.
    ///
    /// `origin` is only evaluated on creation. The flag is `true` when the group was created.
    pub fn get_or_create(
        &mut self,
        container: &C,
        origin: impl FnOnce() -> f64,
    ) -> (&mut Group<C>, bool) {
        let (index, created) = match self.position(container) {
            Some(index) => (index, false),
            None => {
                self.groups.push(Group::new(container.clone(), origin()));
                (self.groups.len() - 1, true)
            }
        };
        (&mut self.groups[index], created)
    }

    pub fn get_if_exists(&self, container: &C) -> Option<&Group<C>> {
        self.groups.iter().find(|g| g.container == *container)
    }

    pub(crate) fn get_mut(&mut self, container: &C) -> Option<&mut Group<C>> {
        self.groups.iter_mut().find(|g| g.container == *container)
    }

    /// Deletes the group for `container`. Callers remove its items first.
    pub fn remove(&mut self, container: &C) -> Option<Group<C>> {
        let index = self.position(container)?;
        debug_assert!(
            self.groups[index].is_empty(),
            "GroupRegistry::remove: group still has items"
        );
        Some(self.groups.remove(index))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group<C>> {
        self.groups.iter()
    }
}
