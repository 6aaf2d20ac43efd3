//! Inline styles a DOM binding applies to keep layout stable while items come and go.
use alloc::format;
use alloc::string::String;

use offscreen::Placement;

/// Style for the container: reserves the full list height so the scrollbar stays correct.
pub fn container_style(total_height: f64) -> String {
    format!("height:{total_height}px;position:relative;transform:translatez(0);")
}

/// Style for mounted content, absolutely positioned at its reserved slot.
pub fn item_style(placement: Placement) -> String {
    format!(
        "height:{}px;position:absolute;top:{}px;transform:translatez(0);",
        placement.inner_height, placement.top
    )
}

/// Style for a shared leading placeholder.
pub fn placeholder_style(height: f64) -> String {
    format!("height:{height}px;")
}
