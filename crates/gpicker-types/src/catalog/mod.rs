//! Closed catalogs of picker views and feature flags.
//!
//! The external string values are defined by the Google Picker service and are
//! reproduced byte-for-byte. Symbolic names follow the upstream constant names.

pub mod feature;
pub mod view_id;

pub use feature::*;
pub use view_id::*;
