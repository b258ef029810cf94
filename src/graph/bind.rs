use super::Graph;
use crate::ids::{RegionIndex, ZoneId};

impl Graph {
    /// Assigns `zone` to `region`, updating both arenas' state. Panics if
    /// `zone` does not exist or is already assigned (spec.md §4.1).
    pub fn bind(&mut self, region: RegionIndex, zone: ZoneId) {
        let idx = self
            .index_of(zone)
            .expect("zone id must exist in the graph");
        let Graph { zones, regions, .. } = self;
        regions[region.0].bind(&zones[idx.0]);
        zones[idx.0].bind(region);
    }
}
