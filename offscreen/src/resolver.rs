//! Visibility resolution: which items must flip between mounted and placeholder.
//!
//! Everything here is a pure function of its inputs. The coordinator snapshots the result before
//! invoking any callback, so a callback that registers or unregisters items cannot disturb the
//! iteration that produced it.
use alloc::vec::Vec;

use crate::key::ContainerKey;
use crate::{Group, Item, ItemId, MountState, Window};

/// One state flip requested by the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Toggle {
    pub item: ItemId,
    pub target: MountState,
}

/// Resolution result for a single virtualized group.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupPlan<C> {
    pub container: C,
    /// Items to flip, in the group's top-to-bottom order.
    pub toggles: Vec<Toggle>,
    /// Combined height of every placeholder above the first item that should be mounted.
    pub leading_placeholder_height: f64,
}

/// Resolves the toggle set for every group with at least `minimum_items_threshold` items.
///
/// Smaller groups are left out entirely; they are handled by
/// [`below_threshold_placeholders`]. Items with invalid geometry always resolve to mounted and
/// do not end the leading-placeholder run.
pub fn resolve<'a, C, G, L>(
    window: Window,
    minimum_items_threshold: usize,
    groups: G,
    lookup: L,
) -> Vec<GroupPlan<C>>
where
    C: ContainerKey + 'a,
    G: IntoIterator<Item = &'a Group<C>>,
    L: Fn(ItemId) -> Option<&'a Item<C>>,
{
    let mut out = Vec::new();
    for group in groups {
        if group.len() < minimum_items_threshold {
            continue;
        }

        let mut seen_any_mounted = false;
        let mut leading_placeholder_height = 0.0;
        let mut toggles = Vec::new();

        for &id in group.items() {
            let Some(item) = lookup(id) else {
                debug_assert!(false, "resolve: group references unknown item {id}");
                continue;
            };

            let should_be_mounted = if item.has_valid_geometry() {
                let top = group.origin() + item.top_offset();
                let inside = window.contains(top, item.inner_height());
                seen_any_mounted |= inside;
                if !seen_any_mounted {
                    leading_placeholder_height += item.height();
                }
                inside
            } else {
                true
            };

            if should_be_mounted != item.is_mounted() {
                toggles.push(Toggle {
                    item: id,
                    target: MountState::from_mounted(should_be_mounted),
                });
            }
        }

        out.push(GroupPlan {
            container: group.container().clone(),
            toggles,
            leading_placeholder_height,
        });
    }
    out
}

/// Placeholder items of groups too small to virtualize; all of them must be mounted.
pub fn below_threshold_placeholders<'a, C, G, L>(
    minimum_items_threshold: usize,
    groups: G,
    lookup: L,
) -> Vec<ItemId>
where
    C: 'a,
    G: IntoIterator<Item = &'a Group<C>>,
    L: Fn(ItemId) -> Option<&'a Item<C>>,
{
    let mut out = Vec::new();
    for group in groups {
        if group.len() >= minimum_items_threshold {
            continue;
        }
        out.extend(
            group
                .items()
                .iter()
                .copied()
                .filter(|&id| lookup(id).is_some_and(|item| !item.is_mounted())),
        );
    }
    out
}
