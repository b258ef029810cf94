use super::Graph;
use crate::ids::RegionIndex;

impl Graph {
    /// Absorbs every zone `region` fully encloses into it (spec.md §4.2,
    /// §8 scenario S4).
    pub fn include_enclaves(&mut self, region: RegionIndex) {
        let enclaves: Vec<_> = self.region(region).enclave_zones(self).into_iter().collect();
        for zone in enclaves {
            self.bind(region, zone);
        }
    }
}
