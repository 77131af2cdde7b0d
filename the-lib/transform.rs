//! Moving every region of a selection at once.
//!
//! [`transform_heads`] computes the new head of each region from a snapshot
//! of the selection taken before anything moved, so one region's move never
//! sees another region's result. The new regions then replace the selection
//! wholesale, which merges regions that converged on the same spot.

use crate::{
  region::Region,
  view::View,
};

/// Moves each region's head to `f(view, region)`, clamped to the buffer.
/// With `extend` the anchors stay put, otherwise regions collapse to
/// cursors. The viewport follows the last region afterwards.
pub fn transform_heads<F>(view: &mut View, extend: bool, mut f: F)
where
  F: FnMut(&View, Region) -> usize,
{
  let size = view.size();
  let moved: Vec<Region> = view
    .selection()
    .iter()
    .map(|&region| {
      let head = f(view, region).min(size);
      if extend {
        Region::new(region.anchor, head)
      } else {
        Region::point(head)
      }
    })
    .collect();

  tracing::trace!(regions = moved.len(), extend, "transforming selection");

  let selection = view.selection_mut();
  selection.clear();
  selection.add_all(moved);

  if let Some(last) = view.selection().last() {
    view.show(last.head);
  }
}
