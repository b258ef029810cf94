use crate::graph::Graph;
use crate::ids::RegionIndex;
use std::collections::BTreeSet;

/// Phase 1: promotes every zone whose own density already meets `thr_dens`
/// to a singleton region (spec.md §4.4, GLOSSARY: Seed). Returns the
/// initial work set, ordered by region arena index — which, since regions
/// are created here in ascending zone-id order, doubles as the "lowest id
/// first" reference order spec.md §4.4 requires for extraction.
pub fn seed(graph: &mut Graph, thr_dens: f64) -> BTreeSet<RegionIndex> {
    let eligible: Vec<_> = graph
        .zones()
        .filter(|z| z.density() >= thr_dens)
        .map(|z| z.id())
        .collect();

    let mut work_set = BTreeSet::new();
    for id in eligible {
        let region = graph.create_region(id);
        graph.bind(region, id);
        work_set.insert(region);
    }
    work_set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ZoneId;
    use crate::zone::Zone;

    #[test]
    fn given_mixed_densities_when_seed_then_only_dense_zones_promoted() {
        // Arrange
        let mut g = Graph::new();
        g.insert_zone(Zone::new(ZoneId(1), 10.0, 1.0)); // dense
        g.insert_zone(Zone::new(ZoneId(2), 1.0, 10.0)); // sparse

        // Act
        let work_set = seed(&mut g, 5_000_000.0);

        // Assert
        assert_eq!(work_set.len(), 1);
        let region = *work_set.iter().next().unwrap();
        assert_eq!(g.region(region).zones().len(), 1);
        assert!(g.region(region).contains(ZoneId(1)));
    }

    #[test]
    fn given_no_zone_meets_threshold_when_seed_then_work_set_empty() {
        let mut g = Graph::new();
        g.insert_zone(Zone::new(ZoneId(1), 1.0, 10.0));

        let work_set = seed(&mut g, 5_000_000.0);

        assert!(work_set.is_empty());
    }
}
