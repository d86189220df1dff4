//! Mapsheet - Map-sheet production core
//!
//! This library automates the data side of producing a cartographic map
//! sheet: given an extent polygon and a set of reference layers hosted by an
//! external spatial engine, it selects the reference features the polygon
//! intersects, decodes their PLSS identifiers into legal descriptions,
//! aggregates sections under shared (meridian, township, range) keys, and
//! renders deterministic report text blocks for a map template.
//!
//! # High-Level API
//!
//! For most use cases, the [`assembler`] module provides the facade:
//!
//! ```ignore
//! use std::sync::Arc;
//! use mapsheet::assembler::{MapSheetAssembler, SheetConfig};
//!
//! let assembler = MapSheetAssembler::new(engine, SheetConfig::builder().build());
//! let sheet = assembler.produce(polygon, date, &mut template)?;
//! ```
//!
//! Geometry intersection and template rendering live behind the
//! [`spatial::SpatialEngine`] and [`assembler::MapTemplate`] traits; the
//! crate itself is pure, synchronous, and reentrant.

pub mod assembler;
pub mod logging;
pub mod plss;
pub mod report;
pub mod spatial;

/// Version of the mapsheet library.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
