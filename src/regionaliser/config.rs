use crate::error::ConfigError;

/// Validated knobs for [`crate::regionaliser::regionalize`] (spec.md §6).
///
/// spec.md §7 requires degenerate config to be *surfaced* to the caller
/// rather than aborting the process, so construction here is fallible
/// rather than panicking (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionaliserConfig {
    thr_dens: f64,
    min_pop: f64,
    merge_enclaves: bool,
}

impl RegionaliserConfig {
    /// Builds a config, rejecting a negative threshold density or minimum
    /// population (spec.md §7).
    pub fn new(thr_dens: f64, min_pop: f64, merge_enclaves: bool) -> Result<Self, ConfigError> {
        if thr_dens < 0.0 {
            return Err(ConfigError::NegativeThreshold(thr_dens));
        }
        if min_pop < 0.0 {
            return Err(ConfigError::NegativeMinPop(min_pop));
        }
        Ok(Self {
            thr_dens,
            min_pop,
            merge_enclaves,
        })
    }

    /// Density threshold a region must keep meeting to keep growing.
    pub fn thr_dens(&self) -> f64 {
        self.thr_dens
    }

    /// Minimum aggregate mass a surviving region must hold.
    pub fn min_pop(&self) -> f64 {
        self.min_pop
    }

    /// Whether growth should pull in enclosed unassigned pockets as it goes.
    pub fn merge_enclaves(&self) -> bool {
        self.merge_enclaves
    }
}
