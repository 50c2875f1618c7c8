#![forbid(unsafe_code)]

//! Turkish freight-posting text parser: normalization, suffix grammar,
//! location resolution, vehicle/body classification, and the subextractors
//! that together produce a scored [`posting::ParsedMessage`].

#[macro_use]
extern crate lazy_static;

pub mod common;
pub mod confidence;
pub mod extract;
pub mod location;
pub mod message_type;
pub mod normalize;
pub mod posting;
pub mod routes;
pub mod vehicle;

pub use location::{parse_locations, ParsedLocations};
pub use posting::{is_likely_logistics_message, parse_message, ParsedMessage};
