//! Binding-layer utilities for the `offscreen` crate.
//!
//! The `offscreen` crate decides *which* items are mounted. This crate provides small,
//! framework-neutral helpers a binding layer commonly needs to act on those decisions:
//!
//! - Parsing per-item geometry attributes (`"inner_height, margins"`)
//! - Inline styles for containers, mounted items and shared placeholders
//! - A [`Slot`] lifecycle that builds content on mount and drops it on unmount
//! - A keyed [`Controller`] that binds a data set to a coordinator and drives it per frame
//!
//! This crate is intentionally framework-agnostic (no DOM or GUI toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod attr;
mod controller;
mod key;
mod slot;
pub mod style;

#[cfg(test)]
mod tests;

pub use attr::{ParseGeometryError, parse_geometry};
pub use controller::{BindError, Controller};
pub use key::BindingKey;
pub use slot::{Slot, SlotHandle};
