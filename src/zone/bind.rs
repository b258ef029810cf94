use super::Zone;
use crate::ids::RegionIndex;

impl Zone {
    /// Sets the region back-pointer. Only [`crate::graph::Graph`] calls this,
    /// on behalf of the region that is binding the zone (spec.md §4.1).
    pub(crate) fn bind(&mut self, region: RegionIndex) {
        debug_assert!(
            self.region.is_none(),
            "zone {} is already assigned to a region",
            self.id()
        );
        self.region = Some(region);
    }

    /// Clears the region back-pointer.
    pub(crate) fn unbind(&mut self) {
        debug_assert!(
            self.region.is_some(),
            "zone {} was not assigned to any region",
            self.id()
        );
        self.region = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ZoneId;

    #[test]
    fn given_unassigned_zone_when_bind_then_region_is_set() {
        let mut z = Zone::new(ZoneId(1), 1.0, 1.0);
        z.bind(RegionIndex(0));
        assert_eq!(z.region(), Some(RegionIndex(0)));
    }

    #[test]
    fn given_bound_zone_when_unbind_then_region_is_cleared() {
        let mut z = Zone::new(ZoneId(1), 1.0, 1.0);
        z.bind(RegionIndex(0));
        z.unbind();
        assert!(z.region().is_none());
    }

    #[test]
    #[should_panic(expected = "already assigned")]
    fn given_bound_zone_when_bind_again_then_panics() {
        let mut z = Zone::new(ZoneId(1), 1.0, 1.0);
        z.bind(RegionIndex(0));
        z.bind(RegionIndex(1));
    }
}
