use super::Region;
use crate::graph::Graph;
use crate::ids::ZoneId;
use std::collections::BTreeSet;

impl Region {
    /// Union of all members' neighbours, minus the members themselves,
    /// optionally excluding the exterior sentinel (spec.md §4.2).
    pub fn neigh_zones(&self, graph: &Graph, include_exterior: bool) -> BTreeSet<ZoneId> {
        let mut out = BTreeSet::new();
        for &zid in &self.zones {
            let zone = graph.zone(zid).expect("region member must be a real zone");
            for &n in zone.neighbours() {
                if n.is_exterior() && !include_exterior {
                    continue;
                }
                if self.zones.contains(&n) {
                    continue;
                }
                out.insert(n);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::Zone;

    #[test]
    fn given_region_with_two_members_when_neigh_zones_then_excludes_members_and_exterior() {
        let mut g = Graph::new();
        let mut a = Zone::new(ZoneId(1), 1.0, 1.0);
        a.add_neighbour(ZoneId(2));
        a.add_neighbour(ZoneId::EXTERIOR);
        let mut b = Zone::new(ZoneId(2), 1.0, 1.0);
        b.add_neighbour(ZoneId(1));
        b.add_neighbour(ZoneId(3));
        g.insert_zone(a);
        g.insert_zone(b);
        g.insert_zone(Zone::new(ZoneId(3), 1.0, 1.0));
        let region = g.create_region(ZoneId(1));
        g.bind(region, ZoneId(1));
        g.bind(region, ZoneId(2));

        let neighbours = g.region(region).neigh_zones(&g, false);
        assert_eq!(neighbours, BTreeSet::from([ZoneId(3)]));

        let with_ext = g.region(region).neigh_zones(&g, true);
        assert_eq!(with_ext, BTreeSet::from([ZoneId::EXTERIOR, ZoneId(3)]));
    }
}
