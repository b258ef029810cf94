use super::Zone;
use crate::graph::Graph;
use crate::ids::RegionIndex;
use std::collections::BTreeSet;

impl Zone {
    /// The set of distinct regions of this zone's non-exterior neighbours
    /// (spec.md §4.1).
    pub fn neigh_regions(&self, graph: &Graph) -> BTreeSet<RegionIndex> {
        self.neighbours()
            .iter()
            .filter_map(|&id| graph.zone(id))
            .filter_map(Zone::region)
            .collect()
    }
}
