use super::Region;
use crate::graph::Graph;
use crate::ids::RegionIndex;
use crate::zone::Zone;
use std::collections::BTreeSet;

impl Region {
    /// Distinct regions of [`Region::neigh_zones`] (exterior and
    /// unassigned neighbours never contribute, spec.md §4.2).
    pub fn neigh_regions(&self, graph: &Graph) -> BTreeSet<RegionIndex> {
        self.neigh_zones(graph, false)
            .iter()
            .filter_map(|&id| graph.zone(id))
            .filter_map(Zone::region)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ZoneId;

    #[test]
    fn given_two_adjacent_regions_when_neigh_regions_then_each_sees_the_other() {
        let mut g = Graph::new();
        let mut a = Zone::new(ZoneId(1), 1.0, 1.0);
        a.add_neighbour(ZoneId(2));
        let mut b = Zone::new(ZoneId(2), 1.0, 1.0);
        b.add_neighbour(ZoneId(1));
        g.insert_zone(a);
        g.insert_zone(b);
        let r1 = g.create_region(ZoneId(1));
        g.bind(r1, ZoneId(1));
        let r2 = g.create_region(ZoneId(2));
        g.bind(r2, ZoneId(2));

        assert_eq!(
            g.region(r1).neigh_regions(&g),
            BTreeSet::from([r2])
        );
    }
}
