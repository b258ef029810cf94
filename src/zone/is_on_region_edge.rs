use super::Zone;
use crate::graph::Graph;

impl Zone {
    /// True if any neighbour is the exterior sentinel or belongs to a
    /// different region than this zone (or no region at all) — spec.md
    /// §4.1. Assumes this zone is itself assigned; an unassigned zone is
    /// trivially "on the edge" of nothing, so this always returns `true`
    /// for it as long as it has any neighbour.
    pub fn is_on_region_edge(&self, graph: &Graph) -> bool {
        self.neighbours().iter().any(|&id| match graph.zone(id) {
            None => true, // exterior
            Some(neigh) => neigh.region() != self.region(),
        })
    }
}
