use crate::ids::ZoneId;
use serde::Deserialize;

/// A single zone as handed to the loader by a caller, already parsed out of
/// whatever source format (shapefile attribute table, GeoJSON, CSV) they're
/// using — producing this record is outside this crate's scope (spec.md §1
/// Non-goals, §4.5).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ZoneRecord {
    pub id: ZoneId,
    pub mass: f64,
    pub area: f64,
    #[serde(default)]
    pub neighbours: Vec<ZoneId>,
}
