#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ItemId;

#[cfg(feature = "std")]
pub(crate) type ItemMap<V> = HashMap<ItemId, V>;
#[cfg(not(feature = "std"))]
pub(crate) type ItemMap<V> = BTreeMap<ItemId, V>;

/// Identity of a container that groups items.
///
/// Two items belong to the same group exactly when their container keys compare equal, so the
/// key must reflect the identity of the parent node (a node id, a pointer-derived handle, ...)
/// rather than its contents.
pub trait ContainerKey: Clone + Eq {}
impl<T: Clone + Eq> ContainerKey for T {}
