//! Density-driven growth rules (spec.md §4.3). Density is the only
//! attribute family this crate has, so these stay directly on `Region`
//! rather than behind a `DensityAreal` specialisation layered on top of a
//! generic aggregator (see DESIGN.md).

use super::Region;
use crate::graph::Graph;
use crate::ids::ZoneId;
use crate::zone::{Zone, DENSITY_SCALE};
use std::collections::BTreeSet;

impl Region {
    /// Would this region still satisfy `density ≥ threshold` if `zone`
    /// were hypothetically added? Strict `≥`.
    pub fn is_accepted(&self, zone: &Zone, threshold: f64) -> bool {
        (self.mass + zone.mass()) / (self.area + zone.area()) * DENSITY_SCALE >= threshold
    }

    /// Picks the next candidate zone to grow into, or `None` if growth
    /// should stop (spec.md §4.3).
    pub fn next_zone(&self, graph: &Graph, merge_enclaves: bool) -> Option<ZoneId> {
        let neighbours = self.neigh_zones(graph, false);
        if neighbours.is_empty() {
            return None;
        }
        if neighbours.len() == 1 {
            return neighbours.into_iter().next();
        }

        let densest = densest_zone(graph, &neighbours)?;
        if !merge_enclaves {
            return Some(densest);
        }

        let claim = BTreeSet::from([densest]);
        let trapped = self.potential_enclaves(graph, &claim);
        if trapped.is_empty() {
            return Some(densest);
        }

        let mut group = claim;
        group.extend(trapped);
        let group_density = aggregate_density(graph, &group);

        let mut rest = neighbours;
        rest.remove(&densest);
        match densest_zone(graph, &rest) {
            None => Some(densest),
            Some(next) => {
                let next_density = graph
                    .zone(next)
                    .expect("candidate zone must exist")
                    .density();
                if group_density >= next_density {
                    Some(densest)
                } else {
                    None
                }
            }
        }
    }
}

/// The id `region` should relabel to: its most massive member, ties broken
/// by lowest id (spec.md §4.3, §4.4 relabel phase). A free function rather
/// than a `&mut self` method so [`crate::graph::Graph::relabel_region`] can
/// compute it from a shared borrow before mutating the region separately.
pub(crate) fn best_relabel_id(region: &Region, graph: &Graph) -> Option<ZoneId> {
    region
        .zones
        .iter()
        .copied()
        .fold(None, |best, id| {
            let mass = graph.zone(id).expect("member zone must exist").mass();
            match best {
                None => Some((id, mass)),
                Some((_, best_mass)) if mass > best_mass => Some((id, mass)),
                Some(b) => Some(b),
            }
        })
        .map(|(id, _)| id)
}

/// The densest zone among `candidates` by zone-level density, ties broken
/// by lowest id (candidates iterate in ascending order already).
fn densest_zone(graph: &Graph, candidates: &BTreeSet<ZoneId>) -> Option<ZoneId> {
    candidates
        .iter()
        .copied()
        .fold(None, |best, id| {
            let density = graph.zone(id).expect("candidate zone must exist").density();
            match best {
                None => Some((id, density)),
                Some((_, best_density)) if density > best_density => Some((id, density)),
                Some(b) => Some(b),
            }
        })
        .map(|(id, _)| id)
}

/// `Σmass/Σarea · DENSITY_SCALE` over an arbitrary zone set.
fn aggregate_density(graph: &Graph, zones: &BTreeSet<ZoneId>) -> f64 {
    let (mass, area) = zones.iter().fold((0.0, 0.0), |(m, a), &id| {
        let zone = graph.zone(id).expect("zone must exist");
        (m + zone.mass(), a + zone.area())
    });
    if area == 0.0 {
        0.0
    } else {
        mass / area * DENSITY_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_addition_keeps_density_above_threshold_when_is_accepted_then_true() {
        let mut r = Region::new(ZoneId(1));
        r.bind(&Zone::new(ZoneId(1), 10.0, 1.0));
        let candidate = Zone::new(ZoneId(2), 10.0, 1.0);
        assert!(r.is_accepted(&candidate, 5_000_000.0));
    }

    #[test]
    fn given_addition_dilutes_below_threshold_when_is_accepted_then_false() {
        let mut r = Region::new(ZoneId(1));
        r.bind(&Zone::new(ZoneId(1), 10.0, 1.0));
        let candidate = Zone::new(ZoneId(2), 0.1, 10.0);
        assert!(!r.is_accepted(&candidate, 5_000_000.0));
    }

    #[test]
    fn given_single_neighbour_when_next_zone_then_returns_it_unconditionally() {
        let mut g = Graph::new();
        let mut a = Zone::new(ZoneId(1), 1.0, 1.0);
        a.add_neighbour(ZoneId(2));
        g.insert_zone(a);
        g.insert_zone(Zone::new(ZoneId(2), 100.0, 1.0));
        let region = g.create_region(ZoneId(1));
        g.bind(region, ZoneId(1));

        assert_eq!(g.region(region).next_zone(&g, false), Some(ZoneId(2)));
    }

    #[test]
    fn given_no_neighbours_when_next_zone_then_none() {
        let mut g = Graph::new();
        g.insert_zone(Zone::new(ZoneId(1), 1.0, 1.0));
        let region = g.create_region(ZoneId(1));
        g.bind(region, ZoneId(1));

        assert_eq!(g.region(region).next_zone(&g, false), None);
    }

    #[test]
    fn given_members_with_distinct_mass_when_relabel_then_id_is_heaviest_member() {
        let mut g = Graph::new();
        g.insert_zone(Zone::new(ZoneId(1), 1.0, 1.0));
        g.insert_zone(Zone::new(ZoneId(2), 99.0, 1.0));
        let region = g.create_region(ZoneId(1));
        g.bind(region, ZoneId(1));
        g.bind(region, ZoneId(2));

        g.relabel_region(region);

        assert_eq!(g.region(region).id(), ZoneId(2));
    }
}
