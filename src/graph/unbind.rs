use super::Graph;
use crate::ids::ZoneId;

impl Graph {
    /// Removes `zone` from whichever region it currently belongs to.
    /// Panics if `zone` does not exist or is unassigned.
    pub fn unbind(&mut self, zone: ZoneId) {
        let idx = self
            .index_of(zone)
            .expect("zone id must exist in the graph");
        let region = self.zones[idx.0]
            .region()
            .expect("zone must be assigned to unbind it");
        let Graph { zones, regions, .. } = self;
        regions[region.0].unbind(&zones[idx.0]);
        zones[idx.0].unbind();
    }
}
