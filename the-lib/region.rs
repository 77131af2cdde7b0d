//! Cursors, selections and the normalized sets that hold them.
//!
//! A [`Region`] has two offsets: `anchor` and `head`. The `head` is where the
//! cursor is, the `anchor` is the fixed end of the selection. When
//! `anchor == head` the region is a plain cursor.
//!
//! ```text
//! anchor=2, head=7: "he[llo w]orld"  (forward selection)
//! anchor=7, head=2: "he]llo w[orld"  (backward selection)
//! anchor=5, head=5: "hello|world"    (cursor)
//! ```
//!
//! # Normalization
//!
//! A [`RegionSet`] keeps its regions sorted by position and free of
//! overlaps. Adding a region merges it with every stored region that
//! shares a non-empty intersection with it, contains it or is contained by
//! it. Cursors sitting inside or on the edge of a selection are absorbed.
//! Two selections that merely touch stay separate:
//!
//! ```ignore
//! let mut set = RegionSet::new();
//! set.add(Region::new(0, 5));
//! set.add(Region::new(5, 11));
//! assert_eq!(set.len(), 2);
//!
//! set.add(Region::point(5));
//! assert_eq!(set.len(), 2);
//! ```
//!
//! Iteration order is always ascending by position, no matter in which order
//! regions were added.

use smallvec::SmallVec;
use thiserror::Error;

use crate::movement::Direction;

pub type Result<T> = std::result::Result<T, RegionError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
  #[error("region index {index} out of bounds for region set of length {len}")]
  OutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
  pub anchor: usize,
  pub head:   usize,
}

impl Region {
  pub fn new(anchor: usize, head: usize) -> Self {
    Self { anchor, head }
  }

  #[inline]
  pub fn point(head: usize) -> Self {
    Self::new(head, head)
  }

  /// Start of the region
  #[inline]
  #[must_use]
  pub fn from(&self) -> usize {
    std::cmp::min(self.anchor, self.head)
  }

  /// End of the region
  #[inline]
  #[must_use]
  pub fn to(&self) -> usize {
    std::cmp::max(self.anchor, self.head)
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.to() - self.from()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.anchor == self.head
  }

  #[inline]
  #[must_use]
  pub fn direction(&self) -> Direction {
    if self.head < self.anchor {
      Direction::Backward
    } else {
      Direction::Forward
    }
  }

  #[inline]
  #[must_use]
  pub fn flip(&self) -> Self {
    Self {
      anchor: self.head,
      head:   self.anchor,
    }
  }

  /// Returns the region if it already points in `direction`, else flips it.
  #[inline]
  #[must_use]
  pub fn with_direction(self, direction: Direction) -> Self {
    if self.direction() == direction {
      self
    } else {
      self.flip()
    }
  }

  /// Both ends of `other` lie within this region, boundaries included.
  #[inline]
  pub fn contains_region(&self, other: &Self) -> bool {
    self.from() <= other.from() && other.to() <= self.to()
  }

  /// `pos` lies within the region, boundaries included.
  #[inline]
  pub fn contains(&self, pos: usize) -> bool {
    self.from() <= pos && pos <= self.to()
  }

  /// The two regions share at least one character.
  #[inline]
  pub fn intersects(&self, other: &Self) -> bool {
    self.from().max(other.from()) < self.to().min(other.to())
  }

  /// Whether `self` and `other` collapse into one region inside a
  /// [`RegionSet`].
  pub fn should_merge(&self, other: &Self) -> bool {
    self == other
      || self.intersects(other)
      || self.contains_region(other)
      || other.contains_region(self)
  }

  /// Union of both regions. The direction comes from `self` unless `self`
  /// is a cursor, in which case the other region decides.
  #[must_use]
  pub fn cover(&self, other: Self) -> Self {
    let direction = if self.is_empty() {
      other.direction()
    } else {
      self.direction()
    };

    Region::new(self.from().min(other.from()), self.to().max(other.to()))
      .with_direction(direction)
  }

  /// Clamp both ends into `[0, size]`.
  #[must_use]
  pub fn clamp(&self, size: usize) -> Self {
    Region::new(self.anchor.min(size), self.head.min(size))
  }
}

impl From<(usize, usize)> for Region {
  fn from(value: (usize, usize)) -> Self {
    Region::new(value.0, value.1)
  }
}

/// Maps an offset across an edit that erased `erased` chars at `start` and
/// then inserted `inserted` chars there.
#[inline]
fn map_offset(pos: usize, start: usize, erased: usize, inserted: usize) -> usize {
  let end = start + erased;
  let pos = if pos >= end {
    pos - erased
  } else if pos > start {
    start
  } else {
    pos
  };

  if inserted > 0 && pos >= start {
    pos + inserted
  } else {
    pos
  }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegionSet {
  regions: SmallVec<[Region; 1]>,
}

impl RegionSet {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn single(region: Region) -> Self {
    let mut set = Self::new();
    set.add(region);
    set
  }

  pub fn from_regions(regions: impl IntoIterator<Item = Region>) -> Self {
    let mut set = Self::new();
    set.add_all(regions);
    set
  }

  pub fn add(&mut self, region: Region) {
    let mut region = region;
    // A union can grow into neighbours it did not touch before, so keep
    // folding until nothing else merges.
    while let Some(idx) = self.regions.iter().position(|r| r.should_merge(&region)) {
      let existing = self.regions.remove(idx);
      region = existing.cover(region);
    }

    let idx = self.regions.partition_point(|r| r.from() < region.from());
    self.regions.insert(idx, region);
  }

  pub fn add_all(&mut self, regions: impl IntoIterator<Item = Region>) {
    for region in regions {
      self.add(region);
    }
  }

  /// Removes whatever part of the stored regions `region` covers. Stored
  /// regions that lie fully within `region` disappear, including cursors.
  pub fn subtract(&mut self, region: Region) {
    let mut kept: SmallVec<[Region; 1]> = SmallVec::with_capacity(self.regions.len());

    for r in self.regions.drain(..) {
      if region.contains_region(&r) {
        continue;
      }
      if !r.intersects(&region) {
        kept.push(r);
        continue;
      }

      let direction = r.direction();
      if r.from() < region.from() {
        kept.push(Region::new(r.from(), region.from()).with_direction(direction));
      }
      if region.to() < r.to() {
        kept.push(Region::new(region.to(), r.to()).with_direction(direction));
      }
    }

    self.regions = kept;
  }

  pub fn clear(&mut self) {
    self.regions.clear();
  }

  pub fn get(&self, index: usize) -> Result<Region> {
    self.regions.get(index).copied().ok_or(RegionError::OutOfBounds {
      index,
      len: self.regions.len(),
    })
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.regions.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.regions.is_empty()
  }

  pub fn has_empty(&self) -> bool {
    self.regions.iter().any(Region::is_empty)
  }

  pub fn has_non_empty(&self) -> bool {
    self.regions.iter().any(|r| !r.is_empty())
  }

  #[inline]
  pub fn regions(&self) -> &[Region] {
    &self.regions
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Region> {
    self.regions.iter()
  }

  pub fn first(&self) -> Option<Region> {
    self.regions.first().copied()
  }

  pub fn last(&self) -> Option<Region> {
    self.regions.last().copied()
  }

  /// Maps every region across a buffer edit and re-normalizes the set.
  ///
  /// Offsets at or after the erased span shift left, offsets strictly inside
  /// it collapse to `start`. Offsets at or after `start` then shift right by
  /// the inserted length, except the end of a region lying wholly before
  /// `start`: that region keeps its extent and never reaches into the new
  /// text.
  pub fn adjust(&mut self, start: usize, erased: usize, inserted: usize) {
    if erased == 0 && inserted == 0 {
      return;
    }

    let regions = std::mem::take(&mut self.regions);
    self.add_all(regions.into_iter().map(|r| {
      let ends_before = r.from() < start && r.to() == start;
      let map = |pos: usize| {
        if ends_before && pos == start {
          pos
        } else {
          map_offset(pos, start, erased, inserted)
        }
      };
      Region::new(map(r.anchor), map(r.head))
    }));
  }
}

impl<'a> IntoIterator for &'a RegionSet {
  type IntoIter = std::slice::Iter<'a, Region>;
  type Item = &'a Region;

  fn into_iter(self) -> Self::IntoIter {
    self.regions.iter()
  }
}

impl FromIterator<Region> for RegionSet {
  fn from_iter<T: IntoIterator<Item = Region>>(iter: T) -> Self {
    RegionSet::from_regions(iter)
  }
}
