use crate::graph::Graph;
use crate::ids::RegionIndex;

/// Phase 5: relabels every surviving region to the id of its most massive
/// member (spec.md §4.3, §4.4).
pub fn relabel(graph: &mut Graph) {
    let surviving: Vec<RegionIndex> = graph
        .regions()
        .filter(|(_, r)| !r.is_empty())
        .map(|(idx, _)| idx)
        .collect();

    for region in surviving {
        graph.relabel_region(region);
    }
}
