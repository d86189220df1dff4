//! Map-sheet assembly
//!
//! The thin orchestration layer over the core components: request-scoped
//! configuration, the map-template collaborator seam, map-scale selection,
//! and the [`MapSheetAssembler`] facade that runs selection → decoding →
//! aggregation → formatting and publishes the result onto a template.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use mapsheet::assembler::{MapSheetAssembler, SheetConfig};
//!
//! let assembler = MapSheetAssembler::new(engine, SheetConfig::builder().build());
//! let sheet = assembler.produce(polygon, date, &mut template)?;
//! println!("{}", sheet.plss_text);
//! ```

mod config;
mod error;
mod scale;
mod sheet;
mod template;

pub use config::{
    LayerBinding, PlaceholderNames, SheetConfig, SheetConfigBuilder, DEFAULT_SCALE_DENOMINATORS,
};
pub use error::AssembleError;
pub use scale::suggested_scale;
pub use sheet::{MapSheet, MapSheetAssembler};
pub use template::{MapTemplate, TemplateError};
