//! Identity types for the adjacency substrate.
//!
//! A [`ZoneId`] is the opaque, caller-supplied key for a zone (spec.md §3);
//! it is also how the exterior sentinel is represented, since the sentinel
//! is nothing more than the reserved value `-1` participating in neighbour
//! sets (spec.md §3, §6). [`ZoneIndex`] and [`RegionIndex`] are the arena
//! handles used internally so that zones and regions never hold direct
//! references to one another (see DESIGN.md, "back-pointers and cycles").

use serde::{Deserialize, Serialize};
use std::fmt;

/// The caller-supplied identity of a zone, and also the value used for the
/// exterior sentinel (`-1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub i64);

impl ZoneId {
    /// The reserved id of the exterior sentinel (spec.md §3, §6).
    pub const EXTERIOR: ZoneId = ZoneId(-1);

    /// True if this id is the exterior sentinel rather than a real zone.
    pub fn is_exterior(self) -> bool {
        self == Self::EXTERIOR
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exterior() {
            write!(f, "<exterior>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<i64> for ZoneId {
    fn from(value: i64) -> Self {
        ZoneId(value)
    }
}

/// Arena handle for a [`crate::zone::Zone`] stored in [`crate::graph::Graph`].
///
/// Never constructed by callers; only `Graph` hands these out, and only for
/// real zones (the exterior sentinel has no arena slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoneIndex(pub(crate) usize);

/// Arena handle for a [`crate::region::Region`] stored in [`crate::graph::Graph`].
///
/// Regions are never removed from the arena once created; an emptied region
/// is a tombstone (spec.md §3, "Lifecycle") rather than a freed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionIndex(pub(crate) usize);
