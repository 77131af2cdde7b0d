//! Movement direction for cursor and region operations.
//!
//! This module provides the [`Direction`] enum used throughout the library
//! to indicate the direction of movement, scanning or region orientation.
//!
//! # Usage
//!
//! ```ignore
//! use the_lib::movement::Direction;
//! use the_lib::region::Region;
//!
//! let region = Region::new(5, 10);
//!
//! // Check region direction
//! assert_eq!(region.direction(), Direction::Forward);
//!
//! // Create a region with specific direction
//! let backward = region.with_direction(Direction::Backward);
//! assert_eq!(backward.anchor, 10);
//! assert_eq!(backward.head, 5);
//! ```

/// The direction of cursor movement or region extension.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
  /// Moving toward the end of the buffer (increasing offsets).
  Forward,
  /// Moving toward the start of the buffer (decreasing offsets).
  Backward,
}

impl Direction {
  pub fn from_forward(forward: bool) -> Self {
    if forward {
      Direction::Forward
    } else {
      Direction::Backward
    }
  }
}
