//! Public Land Survey System decoding and aggregation
//!
//! Decodes fixed-format PLSS identifier strings into structured legal
//! descriptions and aggregates their sections under shared
//! (meridian, township, range) keys for report rendering.

mod aggregate;
mod code;
mod record;

pub use aggregate::{aggregate, AggregatedPlss, SectionPolicy};
pub use code::{parse_plss_code, MalformedCodeError, MIN_CODE_LEN};
pub use record::{GroupKey, LegalDescription};
