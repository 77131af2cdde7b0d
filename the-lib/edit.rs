//! Editing text at many regions in one pass.
//!
//! Every mutation shifts the offsets of text after it. Visiting regions
//! from the last to the first means an edit only ever moves regions that
//! were already handled, so the next region to visit is still where the
//! selection says it is.
//!
//! Regions wholly before an edit keep their offsets, even one that ends
//! exactly where the edit starts. An edit can still change how many regions
//! there are: a backspace can make two cursors meet, and the merged region
//! takes the lower one's place. So after each callback the executor
//! re-reads the region count and continues below `min(index, count)`.

use crate::{
  region::{
    Region,
    RegionSet,
  },
  view::View,
};

/// Calls `f` for every region of the view's selection, last region first.
///
/// The callback receives the region's index and its current value. It may
/// mutate the buffer freely around that region.
pub fn for_each_region<E, F>(view: &mut View, mut f: F) -> Result<(), E>
where
  F: FnMut(&mut View, usize, Region) -> Result<(), E>,
{
  let mut remaining = view.selection().len();

  while remaining > 0 {
    let index = remaining - 1;
    let Some(region) = view.selection().regions().get(index).copied() else {
      break;
    };

    let before = view.selection().len();
    f(view, index, region)?;
    let after = view.selection().len();

    if after != before {
      tracing::trace!(index, before, after, "region count changed during edit");
    }
    remaining = index.min(after);
  }

  Ok(())
}

/// Erases every region of `regions`, last region first.
pub fn erase_regions(view: &mut View, regions: &RegionSet) {
  for region in regions.iter().rev() {
    view.erase(*region);
  }
}
