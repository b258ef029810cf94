use super::RegionaliserConfig;
use crate::graph::{check_invariants, Graph};
use crate::ids::ZoneId;
use std::collections::BTreeMap;

/// Runs all five phases of the top-level algorithm to completion and
/// returns the final zone -> region-id assignment (spec.md §4.4, §6).
///
/// A zone maps to `None` ("unassigned") if it never met the threshold as
/// part of any region's growth, or if it ended up in a region later erased
/// for falling below `min_pop`.
#[cfg_attr(
    feature = "enable-tracing",
    tracing::instrument(level = "debug", skip(graph))
)]
pub fn regionalize(graph: &mut Graph, config: &RegionaliserConfig) -> BTreeMap<ZoneId, Option<ZoneId>> {
    crate::info!(
        "regionalize start: {} zones, thr_dens={}, min_pop={}, merge_enclaves={}",
        graph.zone_count(),
        config.thr_dens(),
        config.min_pop(),
        config.merge_enclaves()
    );

    // 1. seed
    let work_set = super::seed::seed(graph, config.thr_dens());
    crate::info!("seeded {} regions", work_set.len());

    // 2. grow
    super::grow::grow(graph, work_set, config.thr_dens(), config.merge_enclaves());
    check_invariants(graph);

    // 3. merge adjacent
    super::merge_adjacent::merge_adjacent(graph);

    // 4. erase small
    super::erase_small::erase_small(graph, config.min_pop());
    warn_underdense(graph, config.thr_dens());

    // 5. relabel
    super::relabel::relabel(graph);
    check_invariants(graph);

    let assignment = assignment(graph);
    crate::info!(
        "regionalize end: {} zones assigned",
        assignment.values().filter(|r| r.is_some()).count()
    );
    assignment
}

/// Surfaces the non-error "underdense residual" observable (spec.md §7):
/// a region that, after merging and erasing, still sits below threshold.
fn warn_underdense(graph: &Graph, thr_dens: f64) {
    for (_, region) in graph.regions() {
        if !region.is_empty() && region.density() < thr_dens {
            crate::warn!(
                "region {} settled underdense: density {} < threshold {}",
                region.id(),
                region.density(),
                thr_dens
            );
        }
    }
}

fn assignment(graph: &Graph) -> BTreeMap<ZoneId, Option<ZoneId>> {
    graph
        .zones()
        .map(|zone| {
            let region_id = zone.region().map(|idx| graph.region(idx).id());
            (zone.id(), region_id)
        })
        .collect()
}
