use core::fmt;

/// Stable handle for a registered item.
///
/// Handed out by [`crate::Coordinator::register_element`] and used to unregister the item later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub(crate) u64);

impl ItemId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Vertical geometry of an item, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    /// Content height excluding vertical margins.
    pub inner_height: f64,
    /// `inner_height` plus vertical margins; the stride used for offset accumulation.
    pub height: f64,
}

impl Geometry {
    pub fn new(inner_height: f64, margins: f64) -> Self {
        Self {
            inner_height,
            height: inner_height + margins,
        }
    }

    /// Geometry without margins.
    pub fn fixed(height: f64) -> Self {
        Self::new(height, 0.0)
    }

    /// Returns `true` when the geometry can take part in visibility resolution.
    ///
    /// Items with invalid geometry are always mounted and occupy no space in offset bookkeeping.
    pub fn is_valid(&self) -> bool {
        self.inner_height.is_finite()
            && self.inner_height > 0.0
            && self.height.is_finite()
            && self.height >= 0.0
    }
}

/// Whether an item's real content is attached or only reserved space remains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MountState {
    Mounted,
    #[default]
    Placeholder,
}

impl MountState {
    pub fn from_mounted(mounted: bool) -> Self {
        if mounted {
            Self::Mounted
        } else {
            Self::Placeholder
        }
    }

    pub fn is_mounted(self) -> bool {
        matches!(self, Self::Mounted)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Mounted => Self::Placeholder,
            Self::Placeholder => Self::Mounted,
        }
    }
}

/// Where a mounted item's content goes inside its container.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Distance from the container's top edge to the item's top edge.
    pub top: f64,
    pub inner_height: f64,
}

/// Space reservation for one container, reported to the layout observer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupLayout {
    /// Height the container must reserve so the scrollbar reflects every registered item.
    pub total_height: f64,
    /// Height of the shared leading placeholder (`None` in per-item placeholder mode).
    pub leading_placeholder_height: Option<f64>,
}
