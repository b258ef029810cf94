use super::Region;
use crate::zone::Zone;

impl Region {
    /// Folds `zone` into this region's membership and cached sums. Only
    /// [`crate::graph::Graph`] calls this, on behalf of the zone it is
    /// binding (spec.md §4.1, §4.3 `on_modified`).
    pub(crate) fn bind(&mut self, zone: &Zone) {
        debug_assert!(
            !self.zones.contains(&zone.id()),
            "zone {} is already a member of region {}",
            zone.id(),
            self.id
        );
        self.zones.insert(zone.id());
        self.mass += zone.mass();
        self.area += zone.area();
        self.recompute_density();
        self.invalidate_cuts();
    }
}
