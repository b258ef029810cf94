use crate::graph::Graph;
use crate::ids::RegionIndex;

/// Phase 3: coalesces regions that only became adjacent once growth
/// stopped, without re-checking the density predicate — both sides are
/// already above threshold, so any merge only strengthens it (spec.md
/// §4.4).
///
/// The source iterates each region's neighbours once; if a merge changes
/// adjacency mid-pass, later neighbours can be missed (spec.md §9 Open
/// Questions). This instead re-scans to a fixpoint: repeat until no
/// surviving region has any neighbouring region left.
pub fn merge_adjacent(graph: &mut Graph) {
    loop {
        let candidates: Vec<RegionIndex> = graph
            .regions()
            .filter(|(_, r)| !r.is_empty())
            .map(|(idx, _)| idx)
            .collect();

        let mut merged_any = false;
        for region in candidates {
            if graph.region(region).is_empty() {
                continue;
            }
            let neighbours: Vec<RegionIndex> =
                graph.region(region).neigh_regions(graph).into_iter().collect();
            for other in neighbours {
                if graph.region(other).is_empty() {
                    continue;
                }
                graph.merge(region, other);
                merged_any = true;
            }
        }

        if !merged_any {
            break;
        }
    }
}
