use super::Graph;
use crate::ids::RegionIndex;

impl Graph {
    /// Unbinds every member of `region`, returning it to the empty
    /// (tombstone) state. Used to discard regions that fail the minimum
    /// size test (spec.md §4.4, erase phase).
    pub fn erase(&mut self, region: RegionIndex) {
        let members: Vec<_> = self.regions[region.0].zones().iter().copied().collect();
        for zone in members {
            self.unbind(zone);
        }
    }

    /// Erases every non-empty region, returning the whole graph to the
    /// unassigned state it was in right after loading. Lets a caller rerun
    /// [`crate::regionaliser::regionalize`] from scratch on the same
    /// `Graph` (spec.md §8's re-run determinism property).
    pub fn clear_assignments(&mut self) {
        let populated: Vec<_> = self
            .regions()
            .filter(|(_, region)| !region.is_empty())
            .map(|(idx, _)| idx)
            .collect();
        for region in populated {
            self.erase(region);
        }
    }
}
