use crate::graph::Graph;
use crate::ids::RegionIndex;

/// Phase 4: dissolves any surviving region whose aggregate mass falls below
/// `min_pop`, returning its zones to unassigned (spec.md §4.4).
pub fn erase_small(graph: &mut Graph, min_pop: f64) {
    let too_small: Vec<RegionIndex> = graph
        .regions()
        .filter(|(_, r)| !r.is_empty() && r.mass() < min_pop)
        .map(|(idx, _)| idx)
        .collect();

    for region in too_small {
        graph.erase(region);
    }
}
