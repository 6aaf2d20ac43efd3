#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

/// Identity of an item in the bound data set.
#[cfg(feature = "std")]
pub trait BindingKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> BindingKey for T {}

/// Identity of an item in the bound data set.
#[cfg(not(feature = "std"))]
pub trait BindingKey: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> BindingKey for T {}
