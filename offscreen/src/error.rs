use alloc::boxed::Box;

use crate::ItemId;

/// Error type returned by item lifecycle callbacks.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Errors surfaced by the coordinator.
///
/// The coordinator never retries a failed callback. The failing item keeps its previous
/// [`crate::MountState`], so recorded state and the binding layer's real content stay in sync.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("mount callback failed for item {item}")]
    Mount {
        item: ItemId,
        #[source]
        source: BoxError,
    },
    #[error("unmount callback failed for item {item}")]
    Unmount {
        item: ItemId,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// The item whose callback failed.
    pub fn item(&self) -> ItemId {
        match self {
            Self::Mount { item, .. } | Self::Unmount { item, .. } => *item,
        }
    }
}
