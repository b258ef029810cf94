//! Error kinds surfaced to callers (spec.md §7).
//!
//! Invariant violations are bugs, not recoverable errors: the crate asserts
//! and aborts for those rather than returning a `Result` (see
//! [`crate::graph::check_invariants`]). Only malformed input and degenerate
//! configuration are modelled as `Error` types here.

use crate::ids::ZoneId;
use thiserror::Error;

/// Malformed input rejected by the graph loader (spec.md §4.5, §7).
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    /// A zone's area was not strictly positive.
    #[error("zone {id} has non-positive area {area}")]
    NonPositiveArea { id: ZoneId, area: f64 },

    /// A zone's mass was negative (mass must be `>= 0`, spec.md §3).
    #[error("zone {id} has negative mass {mass}")]
    NegativeMass { id: ZoneId, mass: f64 },

    /// Two zone records shared the same id.
    #[error("duplicate zone id {id}")]
    DuplicateZoneId { id: ZoneId },

    /// A neighbour pair referenced an id that is neither a known zone nor
    /// the exterior sentinel (`-1`).
    #[error("neighbour pair references unknown zone id {id}")]
    UnknownNeighbourId { id: ZoneId },

    /// A real zone record used the reserved exterior id (`-1`).
    #[error("zone id -1 is reserved for the exterior sentinel")]
    ReservedExteriorId,
}

/// Degenerate regionaliser configuration (spec.md §7).
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// `thr_dens` was negative.
    #[error("threshold density must be >= 0, got {0}")]
    NegativeThreshold(f64),

    /// `min_pop` was negative.
    #[error("minimum population must be >= 0, got {0}")]
    NegativeMinPop(f64),
}
