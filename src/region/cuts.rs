//! Articulation-point (cut-zone) analysis (spec.md §4.2.1).
//!
//! Iterative Tarjan-style DFS lowpoint computation over the subgraph
//! induced by a region's zones, with the exterior sentinel treated as
//! absent. Kept iterative with an explicit stack (spec.md §9) so large
//! regions can't blow the call stack.
//!
//! The memoised entry point lives on [`crate::graph::Graph::region_cuts`]
//! rather than on `Region` itself: computing the analysis needs both the
//! region (to mutate its cache) and the graph (to look up neighbours), and
//! only `Graph` can offer a split borrow of its `regions` and `zones`
//! arenas at once.

use super::Region;
use crate::graph::Graph;
use crate::ids::ZoneId;
use std::collections::{BTreeMap, BTreeSet};

/// Memoised result of a region's cut-point analysis: for each articulation
/// zone, the list of member subtrees that would become disconnected if the
/// zone were removed.
#[derive(Debug, Clone, Default)]
pub struct CutAnalysis {
    articulation: BTreeMap<ZoneId, Vec<BTreeSet<ZoneId>>>,
}

impl CutAnalysis {
    /// True if `zone` is an articulation point of the region this analysis
    /// was computed for.
    pub fn is_cut(&self, zone: ZoneId) -> bool {
        self.articulation.contains_key(&zone)
    }

    /// The subtrees `zone` separates, if it is an articulation point.
    pub fn hidden_subtrees(&self, zone: ZoneId) -> &[BTreeSet<ZoneId>] {
        self.articulation
            .get(&zone)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All articulation zones, in ascending id order.
    pub fn cut_zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.articulation.keys().copied()
    }
}

struct Frame {
    node: ZoneId,
    parent: Option<ZoneId>,
    neighbours: Vec<ZoneId>,
    next: usize,
}

fn region_neighbours(region: &Region, graph: &Graph, zone: ZoneId) -> Vec<ZoneId> {
    graph
        .zone(zone)
        .expect("region member must be a real zone")
        .neighbours()
        .iter()
        .copied()
        .filter(|&n| !n.is_exterior() && region.contains(n))
        .collect()
}

pub(crate) fn compute_cuts(region: &Region, graph: &Graph) -> CutAnalysis {
    let mut analysis = CutAnalysis::default();
    let Some(&root) = region.zones().iter().next() else {
        return analysis;
    };

    let mut ins: BTreeMap<ZoneId, usize> = BTreeMap::new();
    let mut low: BTreeMap<ZoneId, usize> = BTreeMap::new();
    let mut children: BTreeMap<ZoneId, Vec<ZoneId>> = BTreeMap::new();
    let mut counter = 0usize;

    ins.insert(root, counter);
    low.insert(root, counter);
    counter += 1;
    let mut stack = vec![Frame {
        node: root,
        parent: None,
        neighbours: region_neighbours(region, graph, root),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.next < frame.neighbours.len() {
            let w = frame.neighbours[frame.next];
            frame.next += 1;
            if Some(w) == frame.parent {
                continue; // the single tree edge back up; not a back edge
            }
            if let Some(&w_ins) = ins.get(&w) {
                // back edge to an already-visited zone
                let now = frame.node;
                if w_ins < low[&now] {
                    low.insert(now, w_ins);
                }
            } else {
                let now = frame.node;
                children.entry(now).or_default().push(w);
                ins.insert(w, counter);
                low.insert(w, counter);
                counter += 1;
                stack.push(Frame {
                    node: w,
                    parent: Some(now),
                    neighbours: region_neighbours(region, graph, w),
                    next: 0,
                });
            }
        } else {
            let frame = stack.pop().expect("loop condition guarantees a frame");
            let now = frame.node;
            if let Some(parent) = frame.parent {
                let now_low = low[&now];
                if now_low < low[&parent] {
                    low.insert(parent, now_low);
                }
                if now_low >= ins[&parent] {
                    analysis
                        .articulation
                        .entry(parent)
                        .or_default()
                        .push(subtree(&children, now));
                }
            }
        }
    }

    if let Some(root_children) = children.get(&root) {
        if root_children.len() >= 2 {
            for &child in &root_children[1..] {
                analysis
                    .articulation
                    .entry(root)
                    .or_default()
                    .push(subtree(&children, child));
            }
        }
    }

    analysis
}

fn subtree(children: &BTreeMap<ZoneId, Vec<ZoneId>>, root: ZoneId) -> BTreeSet<ZoneId> {
    let mut stack = vec![root];
    let mut tree = BTreeSet::new();
    while let Some(now) = stack.pop() {
        if tree.insert(now) {
            if let Some(cs) = children.get(&now) {
                stack.extend(cs.iter().copied());
            }
        }
    }
    tree
}
