//! Enclave search (spec.md §4.2.2): unassigned pockets that cannot reach
//! the exterior or any other region without first crossing this region.

use super::Region;
use crate::graph::Graph;
use crate::ids::{RegionIndex, ZoneId};
use std::collections::BTreeSet;

impl Region {
    /// Flood-fills from `start` through unassigned zones, refusing to
    /// enter anything in `block`. Returns whether the flood escaped (hit
    /// the exterior, or an assigned zone not in `block`) and the set of
    /// unassigned zones visited.
    fn search_tree(
        &self,
        graph: &Graph,
        start: ZoneId,
        block: &BTreeSet<ZoneId>,
    ) -> (bool, BTreeSet<ZoneId>) {
        let mut visited = BTreeSet::new();
        let mut escaped = false;
        let mut stack = vec![start];
        visited.insert(start);
        while let Some(z) = stack.pop() {
            let zone = graph.zone(z).expect("search_tree zone must exist");
            for &n in zone.neighbours() {
                if n.is_exterior() {
                    escaped = true;
                    continue;
                }
                if block.contains(&n) {
                    continue;
                }
                let neigh = graph.zone(n).expect("neighbour zone must exist");
                if neigh.region().is_some() {
                    escaped = true;
                    continue;
                }
                if visited.insert(n) {
                    stack.push(n);
                }
            }
        }
        (escaped, visited)
    }

    /// Every connected pocket of unassigned zones this region encloses.
    pub fn enclaves(&self, graph: &Graph) -> Vec<BTreeSet<ZoneId>> {
        let block = self.zones.clone();
        let mut start_points: BTreeSet<ZoneId> = self
            .neigh_zones(graph, false)
            .into_iter()
            .filter(|&id| graph.zone(id).is_some_and(|z| z.region().is_none()))
            .collect();

        let mut enclaves = Vec::new();
        while let Some(&start) = start_points.iter().next() {
            start_points.remove(&start);
            let (escaped, visited) = self.search_tree(graph, start, &block);
            for z in &visited {
                start_points.remove(z);
            }
            if !escaped {
                enclaves.push(visited);
            }
        }
        enclaves
    }

    /// Zones that would become trapped if every zone in `additional` were
    /// hypothetically claimed by this region, in addition to its current
    /// members.
    pub fn potential_enclaves(
        &self,
        graph: &Graph,
        additional: &BTreeSet<ZoneId>,
    ) -> BTreeSet<ZoneId> {
        let mut block = self.zones.clone();
        block.extend(additional.iter().copied());

        let mut start_points: BTreeSet<ZoneId> = BTreeSet::new();
        for &z in additional {
            let zone = graph.zone(z).expect("additional zone must exist");
            for &n in zone.neighbours() {
                if n.is_exterior() || block.contains(&n) {
                    continue;
                }
                if graph.zone(n).is_some_and(|zn| zn.region().is_none()) {
                    start_points.insert(n);
                }
            }
        }

        let mut result = BTreeSet::new();
        while let Some(&start) = start_points.iter().next() {
            start_points.remove(&start);
            let (escaped, visited) = self.search_tree(graph, start, &block);
            for z in &visited {
                start_points.remove(z);
            }
            if !escaped {
                result.extend(visited);
            }
        }
        result
    }

    /// True if this region itself is enclosed: every path outward from its
    /// boundary, through unassigned territory, is blocked before it can
    /// reach the exterior or a third distinct region.
    pub fn is_in_enclave(&self, graph: &Graph, self_idx: RegionIndex) -> bool {
        let mut touched = BTreeSet::from([self_idx]);
        let mut visited = BTreeSet::new();
        let mut stack: Vec<ZoneId> = self.neigh_zones(graph, true).into_iter().collect();
        visited.extend(stack.iter().copied());

        while let Some(z) = stack.pop() {
            if z.is_exterior() {
                return false;
            }
            let zone = graph.zone(z).expect("neighbour zone must exist");
            match zone.region() {
                Some(r) => {
                    touched.insert(r);
                    if touched.len() >= 3 {
                        return false;
                    }
                }
                None => {
                    for &n in zone.neighbours() {
                        if visited.insert(n) {
                            stack.push(n);
                        }
                    }
                }
            }
        }
        true
    }

    /// Binds every zone of every enclave into this region.
    pub fn enclave_zones(&self, graph: &Graph) -> BTreeSet<ZoneId> {
        self.enclaves(graph).into_iter().flatten().collect()
    }
}
