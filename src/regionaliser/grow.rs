use crate::graph::Graph;
use crate::ids::RegionIndex;
use std::collections::BTreeSet;

/// Phase 2: repeatedly extracts a region from `work_set` and grows it
/// until it stops, absorbing any region it bumps into along the way
/// (spec.md §4.4). Extraction is lowest-index (== lowest seed-id) first.
pub fn grow(graph: &mut Graph, mut work_set: BTreeSet<RegionIndex>, thr_dens: f64, merge_enclaves: bool) {
    while let Some(&region) = work_set.iter().next() {
        work_set.remove(&region);

        loop {
            let candidate = graph.region(region).next_zone(graph, merge_enclaves);
            let zone_id = match candidate {
                Some(id) => id,
                None => break,
            };

            let assigned_to = graph
                .zone(zone_id)
                .expect("next_zone returns a real zone")
                .region();
            if let Some(other) = assigned_to {
                work_set.remove(&other);
                graph.merge(region, other);
                continue;
            }

            let accepted = match graph.zone(zone_id) {
                Some(z) => graph.region(region).is_accepted(z, thr_dens),
                None => false,
            };
            if !accepted {
                break;
            }

            graph.bind(region, zone_id);
            if merge_enclaves {
                graph.include_enclaves(region);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ZoneId;
    use crate::regionaliser::seed::seed;
    use crate::zone::Zone;

    fn chain(masses: &[f64]) -> Graph {
        let mut g = Graph::new();
        for (i, &mass) in masses.iter().enumerate() {
            let id = ZoneId(i as i64 + 1);
            let mut z = Zone::new(id, mass, 1.0);
            if i > 0 {
                z.add_neighbour(ZoneId(i as i64));
            }
            if i + 1 < masses.len() {
                z.add_neighbour(ZoneId(i as i64 + 2));
            }
            g.insert_zone(z);
        }
        g
    }

    #[test]
    fn given_dense_chain_when_grow_then_region_absorbs_accepted_neighbours() {
        // Arrange: A=100 B=50 C=1, thr=70_000_000 -> only A seeds; A+B
        // stays above threshold, A+B+C would dilute too far.
        let mut g = chain(&[100.0, 50.0, 1.0]);
        let work_set = seed(&mut g, 70_000_000.0);
        assert_eq!(work_set.len(), 1);

        // Act
        grow(&mut g, work_set, 70_000_000.0, false);

        // Assert
        let region = g.zone(ZoneId(1)).unwrap().region().unwrap();
        assert!(g.region(region).contains(ZoneId(1)));
        assert!(g.region(region).contains(ZoneId(2)));
        assert!(!g.region(region).contains(ZoneId(3)));
    }

    #[test]
    fn given_two_seeds_sharing_a_neighbour_when_grow_then_regions_merge() {
        // Arrange: A - B - C, A and C dense enough to seed on their own, B
        // is not, but is dense enough that A's growth absorbs it and from
        // there reaches C, which is already its own seeded region.
        let mut g = chain(&[100.0, 40.0, 100.0]);
        let work_set = seed(&mut g, 50_000_000.0);
        assert_eq!(work_set.len(), 2);

        // Act
        grow(&mut g, work_set, 50_000_000.0, false);

        // Assert
        let region_a = g.zone(ZoneId(1)).unwrap().region().unwrap();
        let region_c = g.zone(ZoneId(3)).unwrap().region().unwrap();
        assert_eq!(region_a, region_c);
        assert!(g.region(region_a).contains(ZoneId(2)));
    }
}
