//! An aggregator owning a set of zones with cached sums, and the
//! topological queries the regionaliser needs (spec.md §3, §4.2).
//!
//! Density is the only attribute family this crate has, so rather than
//! keep a generic `Region` with a `DensityAreal` subclass/trait-object
//! layered on top (as the original Python did), the density-specific
//! behaviour — `on_modified`, `is_accepted`, `next_zone`, `relabel` — is
//! folded directly into `Region` (see DESIGN.md and spec.md §9's
//! "`on_modified` hook" redesign note).

use crate::ids::ZoneId;
use crate::zone::DENSITY_SCALE;
use std::collections::BTreeSet;
use std::fmt;

pub mod bind;
pub mod components;
pub mod cuts;
pub mod density;
pub mod enclaves;
pub mod merge;
pub mod neigh_regions;
pub mod neigh_zones;
pub mod unbind;

pub use cuts::CutAnalysis;

/// A connected set of zones treated as one spatial entity (GLOSSARY:
/// Region / Areal).
#[derive(Debug, Clone)]
pub struct Region {
    id: ZoneId,
    zones: BTreeSet<ZoneId>,
    mass: f64,
    area: f64,
    density: f64,
    cuts: Option<CutAnalysis>,
}

impl Region {
    /// Creates a new, empty region labelled with `id` (typically a seed
    /// zone's id — spec.md §3).
    pub(crate) fn new(id: ZoneId) -> Self {
        Self {
            id,
            zones: BTreeSet::new(),
            mass: 0.0,
            area: 0.0,
            density: 0.0,
            cuts: None,
        }
    }

    /// The region's current label.
    pub fn id(&self) -> ZoneId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ZoneId) {
        self.id = id;
    }

    /// Member zone ids, in ascending order.
    pub fn zones(&self) -> &BTreeSet<ZoneId> {
        &self.zones
    }

    /// Number of member zones.
    pub fn count(&self) -> usize {
        self.zones.len()
    }

    /// Sum of member zone masses.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Sum of member zone areas.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// `mass / area * DENSITY_SCALE`, or `0` when the region is empty
    /// (spec.md §3).
    pub fn density(&self) -> f64 {
        self.density
    }

    /// A region is "empty" iff it has no members; an empty region is
    /// treated as absent by the algorithm even though its arena slot
    /// lingers (spec.md §3).
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub(crate) fn contains(&self, zone: ZoneId) -> bool {
        self.zones.contains(&zone)
    }

    /// Recomputes the cached density from `mass`/`area`. Called after every
    /// membership change (spec.md §4.3, `on_modified`).
    pub(crate) fn recompute_density(&mut self) {
        self.density = if self.zones.is_empty() {
            0.0
        } else {
            self.mass / self.area * DENSITY_SCALE
        };
    }

    pub(crate) fn invalidate_cuts(&mut self) {
        self.cuts = None;
    }

    pub(crate) fn cached_cuts(&self) -> Option<&CutAnalysis> {
        self.cuts.as_ref()
    }

    pub(crate) fn set_cuts(&mut self, cuts: CutAnalysis) {
        self.cuts = Some(cuts);
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Region {} mass={} area={} dens={:.1} count={}>",
            self.id, self.mass, self.area, self.density, self.zones.len()
        )
    }
}
