//! The top-level algorithm: seed, grow, merge adjacent, erase small, relabel
//! (spec.md §4.4). Each phase is its own module, mirroring the one-file,
//! one-concern layout used throughout `graph/` and `region/`; [`run`]
//! strings them together in order.

pub mod config;
pub mod erase_small;
pub mod grow;
pub mod merge_adjacent;
pub mod relabel;
pub mod run;
pub mod seed;

pub use config::RegionaliserConfig;
pub use run::regionalize;
