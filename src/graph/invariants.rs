use super::Graph;

/// Asserts every cross-arena invariant the rest of the crate relies on
/// (spec.md §8). Intended as a checkpoint between regionaliser phases and
/// in tests, not as a public validation API — violations are bugs, not
/// recoverable conditions, so this panics rather than returning a `Result`
/// (spec.md §7: "the core should assert and abort rather than mask").
pub fn check_invariants(graph: &Graph) {
    for (idx, region) in graph.regions() {
        for &zone_id in region.zones() {
            let zone = graph
                .zone(zone_id)
                .unwrap_or_else(|| panic!("region {:?} claims unknown zone {}", idx, zone_id));
            assert_eq!(
                zone.region(),
                Some(idx),
                "zone {} is a member of region {:?} but points back to {:?}",
                zone_id,
                idx,
                zone.region()
            );
        }
    }

    for zone in graph.zones() {
        if let Some(region_idx) = zone.region() {
            assert!(
                graph.region(region_idx).contains(zone.id()),
                "zone {} points to region {:?} which does not list it as a member",
                zone.id(),
                region_idx
            );
        }
    }

    for (idx, region) in graph.regions() {
        let (mass, area) = region.zones().iter().fold((0.0, 0.0), |(m, a), &id| {
            let z = graph.zone(id).expect("checked above");
            (m + z.mass(), a + z.area())
        });
        assert!(
            (region.mass() - mass).abs() < 1e-6,
            "region {:?} cached mass {} disagrees with member sum {}",
            idx,
            region.mass(),
            mass
        );
        assert!(
            (region.area() - area).abs() < 1e-6,
            "region {:?} cached area {} disagrees with member sum {}",
            idx,
            region.area(),
            area
        );
    }

    for (idx, region) in graph.regions() {
        if region.is_empty() {
            continue;
        }
        assert!(
            region.is_connected(graph),
            "region {:?} has split into {} disconnected components",
            idx,
            region.connected_components(graph).len()
        );
    }
}
