//! Map-sheet assembly facade.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::plss::{aggregate, parse_plss_code, LegalDescription};
use crate::report::{
    format_counties, format_date, format_plss, format_quads, format_utm, round_half_up,
};
use crate::spatial::{Point, Polygon, SpatialEngine, SpatialSelector};

use super::config::SheetConfig;
use super::error::AssembleError;
use super::scale::suggested_scale;
use super::template::MapTemplate;

/// The assembled report for one map-sheet request.
///
/// Holds the five rendered text blocks plus the computed centroid and
/// suggested scale. Transient: built fresh per request, published to a
/// template, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSheet {
    /// County block text.
    pub county_text: String,
    /// 7.5-minute quad block text.
    pub quad_text: String,
    /// PLSS block text (empty when no PLSS features intersect).
    pub plss_text: String,
    /// UTM line text (empty when no zone features intersect).
    pub utm_text: String,
    /// Map-date line text.
    pub date_text: String,
    /// Centroid of the extent polygon, in projected units.
    pub centroid: Point,
    /// Suggested map-scale denominator, if a configured candidate fits.
    pub scale: Option<u32>,
}

/// Thin orchestrator that produces a [`MapSheet`] from an extent polygon.
///
/// Runs selection, PLSS decoding, aggregation, and formatting in sequence,
/// entirely synchronously. Holds only an engine handle and request
/// configuration; no state survives between calls, so one assembler can
/// serve any number of requests.
pub struct MapSheetAssembler {
    selector: SpatialSelector,
    engine: Arc<dyn SpatialEngine>,
    config: SheetConfig,
}

impl MapSheetAssembler {
    /// Create an assembler over the given engine and request configuration.
    pub fn new(engine: Arc<dyn SpatialEngine>, config: SheetConfig) -> Self {
        Self {
            selector: SpatialSelector::new(Arc::clone(&engine)),
            engine,
            config,
        }
    }

    /// The request configuration this assembler was built with.
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Assemble the report text and computed geometry for one polygon.
    ///
    /// # Errors
    ///
    /// Fails on missing attribute fields, malformed PLSS codes, or engine
    /// faults. Empty intersections are not errors; they render as bare
    /// labels or empty blocks.
    pub fn assemble(&self, polygon: Polygon, date: NaiveDate) -> Result<MapSheet, AssembleError> {
        let counties = self.select_strings(polygon, &self.config.counties)?;
        let quads = self.select_strings(polygon, &self.config.quads)?;

        let codes = self.select_strings(polygon, &self.config.plss)?;
        let records = codes
            .iter()
            .map(|code| parse_plss_code(code))
            .collect::<Result<Vec<LegalDescription>, _>>()?;
        let aggregated = aggregate(records, self.config.section_policy);

        let zones = self.select_strings(polygon, &self.config.utm_zones)?;
        let centroid = self.engine.centroid(polygon)?;
        let extent = self.engine.bounding_extent(polygon)?;
        let scale = suggested_scale(
            &extent,
            self.config.sheet_width_m,
            self.config.sheet_height_m,
            &self.config.scale_denominators,
        );

        tracing::info!(
            counties = counties.len(),
            quads = quads.len(),
            plss_groups = aggregated.len(),
            zones = zones.len(),
            ?scale,
            "map sheet assembled"
        );

        Ok(MapSheet {
            county_text: format_counties(&counties),
            quad_text: format_quads(&quads),
            plss_text: format_plss(&aggregated),
            utm_text: format_utm(
                &zones,
                round_half_up(centroid.y),
                round_half_up(centroid.x),
            ),
            date_text: format_date(date),
            centroid,
            scale,
        })
    }

    /// Write the assembled report onto a template's named text elements.
    ///
    /// Elements the template does not carry are skipped silently, as are
    /// empty optional values (project id, title, author) and an empty UTM
    /// line. The suggested scale is not a text element; hosts read it from
    /// the [`MapSheet`] directly.
    pub fn publish(
        &self,
        sheet: &MapSheet,
        template: &mut dyn MapTemplate,
    ) -> Result<(), AssembleError> {
        let names = &self.config.placeholders;
        write_element(template, &names.county, &sheet.county_text)?;
        write_element(template, &names.quad, &sheet.quad_text)?;
        write_element(template, &names.plss, &sheet.plss_text)?;
        if !sheet.utm_text.is_empty() {
            write_element(template, &names.utm, &sheet.utm_text)?;
        }
        write_element(template, &names.date, &sheet.date_text)?;

        write_optional(template, &names.project_id, self.config.project_id.as_deref())?;
        write_optional(template, &names.title, self.config.title.as_deref())?;
        write_optional(template, &names.author, self.config.author.as_deref())?;
        Ok(())
    }

    /// Assemble and publish in one call.
    pub fn produce(
        &self,
        polygon: Polygon,
        date: NaiveDate,
        template: &mut dyn MapTemplate,
    ) -> Result<MapSheet, AssembleError> {
        let sheet = self.assemble(polygon, date)?;
        self.publish(&sheet, template)?;
        Ok(sheet)
    }

    /// Select and stringify one binding's attribute values.
    fn select_strings(
        &self,
        polygon: Polygon,
        binding: &super::config::LayerBinding,
    ) -> Result<Vec<String>, AssembleError> {
        let values = self
            .selector
            .select(polygon, &binding.layer, &binding.field)?;
        Ok(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Write one element if the template carries it.
fn write_element(
    template: &mut dyn MapTemplate,
    name: &str,
    value: &str,
) -> Result<(), AssembleError> {
    if template.has_element(name) {
        template.set_text(name, value)?;
    } else {
        tracing::debug!(element = name, "template element absent, skipping");
    }
    Ok(())
}

/// Write an optional element, skipping absent or empty values.
fn write_optional(
    template: &mut dyn MapTemplate,
    name: &str,
    value: Option<&str>,
) -> Result<(), AssembleError> {
    match value {
        Some(text) if !text.is_empty() => write_element(template, name, text),
        _ => Ok(()),
    }
}
