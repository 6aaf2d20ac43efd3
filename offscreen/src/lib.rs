//! A headless coordinator that virtualizes long lists by swapping off-screen items for
//! space-reserving placeholders.
//!
//! Items are registered with their vertical geometry and a [`Lifecycle`] that attaches or
//! detaches their real content. On every relevant scroll or resize event the [`Coordinator`]
//! resolves which items lie within a configurable margin of the viewport and flips exactly the
//! ones whose state must change, so the number of live items stays bounded regardless of list
//! length.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - a [`ScrollHost`]: scroll offset, viewport height, event subscription
//! - per-item geometry (eagerly, or through a [`GeometryProvider`])
//! - per-item mount/unmount callbacks
//! - a clock (`now_ms`) and, optionally, a display-sync callback
//!
//! Only a single vertical scroll axis is supported. Item offsets are fixed at registration, so
//! items are expected to be appended in visual order and removed without reflowing the rest.
//!
//! For binding-layer helpers (attribute parsing, inline styles, keyed controller), see the
//! `offscreen-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod coordinator;
mod error;
mod group;
mod host;
mod item;
mod key;
mod measure;
mod options;
pub mod resolver;
mod scheduler;
mod state;
mod types;


pub use coordinator::{ApplyReport, Coordinator, SkipReason, UpdateOutcome, UpdatePlan};
pub use error::{BoxError, Error};
pub use group::{Group, GroupRegistry};
pub use host::{ManualHost, ScrollHost};
pub use item::{Callbacks, Item, Lifecycle};
pub use key::ContainerKey;
pub use measure::{GeometryProvider, Registration};
pub use options::{OnLayoutCallback, PlaceholderOptions};
pub use resolver::{GroupPlan, Toggle};
pub use scheduler::{UpdateScheduler, UpdateToken};
pub use state::{Viewport, Window};
pub use types::{Geometry, GroupLayout, ItemId, MountState, Placement};
