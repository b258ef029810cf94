use super::Graph;
use crate::ids::RegionIndex;

impl Graph {
    /// Folds `from` into `into`: every zone `from` owns is relabelled to
    /// `into`, and `from` is left empty. Panics if the two indices are
    /// equal (spec.md §4.4, merge-adjacent phase).
    pub fn merge(&mut self, into: RegionIndex, from: RegionIndex) {
        debug_assert_ne!(into.0, from.0, "cannot merge a region into itself");
        let members: Vec<_> = self.regions[from.0].zones().iter().copied().collect();

        let (lo, hi) = if into.0 < from.0 {
            (into.0, from.0)
        } else {
            (from.0, into.0)
        };
        let (left, right) = self.regions.split_at_mut(hi);
        let (into_region, from_region) = if into.0 < from.0 {
            (&mut left[lo], &mut right[0])
        } else {
            (&mut right[0], &mut left[lo])
        };
        into_region.merge(from_region);

        for zone in members {
            let idx = self.index_of(zone).expect("member zone exists");
            self.zones[idx.0].unbind();
            self.zones[idx.0].bind(into);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ZoneId;
    use crate::zone::Zone;

    #[test]
    fn given_adjacent_regions_when_merge_then_zones_relabelled_and_from_emptied() {
        let mut g = Graph::new();
        g.insert_zone(Zone::new(ZoneId(1), 1.0, 1.0));
        g.insert_zone(Zone::new(ZoneId(2), 1.0, 1.0));
        let into = g.create_region(ZoneId(1));
        let from = g.create_region(ZoneId(2));
        g.bind(into, ZoneId(1));
        g.bind(from, ZoneId(2));

        g.merge(into, from);

        assert_eq!(g.zone(ZoneId(2)).unwrap().region(), Some(into));
        assert!(g.region(from).is_empty());
        assert_eq!(g.region(into).count(), 2);
    }
}
