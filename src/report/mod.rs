//! Report text rendering
//!
//! Pure formatting functions that turn selected attribute values and
//! aggregated PLSS data into the fixed multi-line text blocks placed on the
//! map sheet. Nothing here touches geometry or templates; every function is
//! a deterministic transform of its arguments.

mod date;
mod labels;
mod plss;
mod utm;

pub use date::format_date;
pub use labels::{format_counties, format_quads, COUNTY_LABEL, QUAD_LABEL};
pub use plss::format_plss;
pub use utm::{format_utm, round_half_up};
