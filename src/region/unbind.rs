use super::Region;
use crate::zone::Zone;

impl Region {
    /// Removes `zone` from this region's membership and cached sums.
    pub(crate) fn unbind(&mut self, zone: &Zone) {
        debug_assert!(
            self.zones.contains(&zone.id()),
            "zone {} is not a member of region {}",
            zone.id(),
            self.id
        );
        self.zones.remove(&zone.id());
        self.mass -= zone.mass();
        self.area -= zone.area();
        self.recompute_density();
        self.invalidate_cuts();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ZoneId;

    #[test]
    fn given_single_member_region_when_unbind_then_becomes_empty() {
        let mut r = Region::new(ZoneId(1));
        let z = Zone::new(ZoneId(1), 4.0, 2.0);
        r.bind(&z);
        r.unbind(&z);
        assert!(r.is_empty());
        assert_eq!(r.mass(), 0.0);
        assert_eq!(r.area(), 0.0);
        assert_eq!(r.density(), 0.0);
    }

    #[test]
    #[should_panic(expected = "is not a member")]
    fn given_non_member_zone_when_unbind_then_panics() {
        let mut r = Region::new(ZoneId(1));
        r.unbind(&Zone::new(ZoneId(1), 1.0, 1.0));
    }
}
