#![forbid(unsafe_code)]

//! Geographic reference data for Turkey: provinces, districts, regions,
//! the province neighbor graph, and alias resolution. Every lookup here is
//! exact and total (`Option`-returning, never panics) and backed by
//! `lazy_static`-built tables computed once from a compiled-in data set.

#[macro_use]
extern crate lazy_static;

mod data;
pub mod districts;
pub mod provinces;
pub mod regions;

pub use districts::{is_ambiguous_district, istanbul_side_of, resolve_districts, District};
pub use provinces::{neighbors, resolve_province, Province};
pub use regions::{region_provinces, resolve_region, Region};

/// Which side of the Bosphorus a district sits on, for the Istanbul-side
/// sweep in the location parser (spec.md §4.3 step 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum IstanbulSide {
    European,
    Asian,
}
