//! Builds a [`Graph`] from already-materialised zone records (spec.md
//! §4.5). GIS preprocessing, file/network I/O, and any wire format are out
//! of scope (spec.md §1 Non-goals) — this adapter only validates and wires
//! up records a caller has already parsed.

use crate::error::LoadError;
use crate::graph::Graph;
use crate::ids::ZoneId;
use crate::zone::Zone;
use std::collections::BTreeMap;

pub mod zone_record;

pub use zone_record::ZoneRecord;

/// Validates `records` and assembles them into a [`Graph`].
///
/// Neighbour pairs are symmetrised: if `a` lists `b` but `b` does not list
/// `a`, the graph still ends up with the edge on both sides, matching the
/// loader's role of producing a consistent adjacency substrate regardless
/// of how asymmetric the source data was (spec.md §4.5).
pub fn load_graph(records: Vec<ZoneRecord>) -> Result<Graph, LoadError> {
    let mut seen = BTreeMap::new();
    for record in &records {
        if record.id == ZoneId::EXTERIOR {
            return Err(LoadError::ReservedExteriorId);
        }
        if record.area <= 0.0 {
            return Err(LoadError::NonPositiveArea {
                id: record.id,
                area: record.area,
            });
        }
        if record.mass < 0.0 {
            return Err(LoadError::NegativeMass {
                id: record.id,
                mass: record.mass,
            });
        }
        if seen.insert(record.id, ()).is_some() {
            return Err(LoadError::DuplicateZoneId { id: record.id });
        }
    }

    for record in &records {
        for &neighbour in &record.neighbours {
            if neighbour == ZoneId::EXTERIOR {
                continue;
            }
            if !seen.contains_key(&neighbour) {
                return Err(LoadError::UnknownNeighbourId { id: neighbour });
            }
        }
    }

    let mut graph = Graph::new();
    for record in &records {
        graph.insert_zone(Zone::new(record.id, record.mass, record.area));
    }
    for record in &records {
        let idx = graph
            .index_of(record.id)
            .expect("just inserted every record");
        for &neighbour in &record.neighbours {
            graph.zone_at_mut(idx).add_neighbour(neighbour);
            if let Some(other_idx) = graph.index_of(neighbour) {
                graph.zone_at_mut(other_idx).add_neighbour(record.id);
            }
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, mass: f64, area: f64, neighbours: &[i64]) -> ZoneRecord {
        ZoneRecord {
            id: ZoneId(id),
            mass,
            area,
            neighbours: neighbours.iter().copied().map(ZoneId).collect(),
        }
    }

    #[test]
    fn given_valid_records_when_load_graph_then_edges_are_symmetric() {
        let records = vec![record(1, 1.0, 1.0, &[2]), record(2, 1.0, 1.0, &[])];

        let graph = load_graph(records).expect("valid input");

        assert!(graph.zone(ZoneId(2)).unwrap().neighbours().contains(&ZoneId(1)));
    }

    #[test]
    fn given_non_positive_area_when_load_graph_then_rejected() {
        let records = vec![record(1, 1.0, 0.0, &[])];
        assert_eq!(
            load_graph(records),
            Err(LoadError::NonPositiveArea {
                id: ZoneId(1),
                area: 0.0
            })
        );
    }

    #[test]
    fn given_negative_mass_when_load_graph_then_rejected() {
        let records = vec![record(1, -1.0, 1.0, &[])];
        assert_eq!(
            load_graph(records),
            Err(LoadError::NegativeMass {
                id: ZoneId(1),
                mass: -1.0
            })
        );
    }

    #[test]
    fn given_duplicate_id_when_load_graph_then_rejected() {
        let records = vec![record(1, 1.0, 1.0, &[]), record(1, 2.0, 1.0, &[])];
        assert_eq!(
            load_graph(records),
            Err(LoadError::DuplicateZoneId { id: ZoneId(1) })
        );
    }

    #[test]
    fn given_unknown_neighbour_when_load_graph_then_rejected() {
        let records = vec![record(1, 1.0, 1.0, &[99])];
        assert_eq!(
            load_graph(records),
            Err(LoadError::UnknownNeighbourId { id: ZoneId(99) })
        );
    }

    #[test]
    fn given_reserved_exterior_id_when_load_graph_then_rejected() {
        let records = vec![record(-1, 1.0, 1.0, &[])];
        assert_eq!(load_graph(records), Err(LoadError::ReservedExteriorId));
    }

    #[test]
    fn given_exterior_as_neighbour_when_load_graph_then_accepted() {
        let records = vec![record(1, 1.0, 1.0, &[-1])];
        let graph = load_graph(records).expect("exterior neighbour is valid");
        assert!(graph
            .zone(ZoneId(1))
            .unwrap()
            .neighbours()
            .contains(&ZoneId::EXTERIOR));
    }
}
