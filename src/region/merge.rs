use super::Region;

impl Region {
    /// Folds every member of `other` into `self`, leaving `other` as an
    /// empty tombstone. Zone back-pointers are not touched here; the
    /// caller ([`crate::graph::Graph::merge`]) owns that step since only it
    /// can reach into the zone arena (spec.md §4.2, §4.4 merge-adjacent
    /// phase).
    pub(crate) fn merge(&mut self, other: &mut Region) {
        self.zones.append(&mut other.zones);
        self.mass += other.mass;
        self.area += other.area;
        other.mass = 0.0;
        other.area = 0.0;
        self.recompute_density();
        other.recompute_density();
        self.invalidate_cuts();
        other.invalidate_cuts();
    }
}
