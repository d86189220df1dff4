//! Request-scoped configuration for map-sheet assembly.

use crate::plss::SectionPolicy;

/// A reference layer paired with the attribute field to extract from it.
#[derive(Debug, Clone)]
pub struct LayerBinding {
    /// Name of the reference layer as registered with the spatial engine.
    pub layer: String,
    /// Attribute field holding the value of interest.
    pub field: String,
}

impl LayerBinding {
    /// Create a binding from layer and field names.
    pub fn new(layer: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            layer: layer.into(),
            field: field.into(),
        }
    }
}

/// Names of the template text elements the assembler writes to.
///
/// Defaults match the standard map-sheet template; hosts with renamed
/// elements override individual fields. Elements missing from a template are
/// skipped, never an error.
#[derive(Debug, Clone)]
pub struct PlaceholderNames {
    /// County block element.
    pub county: String,
    /// Quad block element.
    pub quad: String,
    /// PLSS block element.
    pub plss: String,
    /// UTM line element.
    pub utm: String,
    /// Map-date line element.
    pub date: String,
    /// Optional project id element.
    pub project_id: String,
    /// Optional title element.
    pub title: String,
    /// Optional author element.
    pub author: String,
}

impl Default for PlaceholderNames {
    fn default() -> Self {
        Self {
            county: "County".to_string(),
            quad: "Quad".to_string(),
            plss: "PLSS".to_string(),
            utm: "UTM".to_string(),
            date: "Date".to_string(),
            project_id: "Project ID".to_string(),
            title: "Title".to_string(),
            author: "Author".to_string(),
        }
    }
}

/// Standard map-scale denominators offered when none are configured.
pub const DEFAULT_SCALE_DENOMINATORS: [u32; 6] = [12_000, 24_000, 50_000, 100_000, 250_000, 500_000];

/// Configuration for one map-sheet request.
///
/// Every knob is request-scoped and passed explicitly; the assembler keeps
/// no ambient or global state, so concurrent requests in one process cannot
/// interfere.
///
/// # Example
///
/// ```
/// use mapsheet::assembler::{SheetConfig, LayerBinding};
/// use mapsheet::plss::SectionPolicy;
///
/// let config = SheetConfig::builder()
///     .counties(LayerBinding::new("counties", "NAME"))
///     .quads(LayerBinding::new("quads", "QUAD_NAME"))
///     .plss(LayerBinding::new("plss", "PLSSID"))
///     .utm_zones(LayerBinding::new("utm", "ZONE"))
///     .section_policy(SectionPolicy::Deduplicate)
///     .title("Survey Sheet 4")
///     .build();
///
/// assert_eq!(config.title.as_deref(), Some("Survey Sheet 4"));
/// ```
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// County reference layer and label field.
    pub counties: LayerBinding,
    /// 7.5-minute quad reference layer and name field.
    pub quads: LayerBinding,
    /// PLSS reference layer and code field.
    pub plss: LayerBinding,
    /// UTM zone reference layer and zone-id field.
    pub utm_zones: LayerBinding,
    /// Template element names to write to.
    pub placeholders: PlaceholderNames,
    /// Duplicate-section policy for PLSS aggregation.
    pub section_policy: SectionPolicy,
    /// Candidate map-scale denominators, ascending.
    pub scale_denominators: Vec<u32>,
    /// Printable map width on the sheet, in metres of paper.
    pub sheet_width_m: f64,
    /// Printable map height on the sheet, in metres of paper.
    pub sheet_height_m: f64,
    /// Optional project id; empty or absent values are skipped.
    pub project_id: Option<String>,
    /// Optional sheet title; empty or absent values are skipped.
    pub title: Option<String>,
    /// Optional author; empty or absent values are skipped.
    pub author: Option<String>,
}

impl SheetConfig {
    /// Create a configuration builder with default bindings.
    pub fn builder() -> SheetConfigBuilder {
        SheetConfigBuilder::default()
    }
}

/// Builder for [`SheetConfig`].
#[derive(Debug, Clone)]
pub struct SheetConfigBuilder {
    counties: LayerBinding,
    quads: LayerBinding,
    plss: LayerBinding,
    utm_zones: LayerBinding,
    placeholders: PlaceholderNames,
    section_policy: SectionPolicy,
    scale_denominators: Vec<u32>,
    sheet_width_m: f64,
    sheet_height_m: f64,
    project_id: Option<String>,
    title: Option<String>,
    author: Option<String>,
}

impl Default for SheetConfigBuilder {
    fn default() -> Self {
        Self {
            counties: LayerBinding::new("counties", "NAME"),
            quads: LayerBinding::new("quads", "QUAD_NAME"),
            plss: LayerBinding::new("plss", "PLSSID"),
            utm_zones: LayerBinding::new("utm_zones", "ZONE"),
            placeholders: PlaceholderNames::default(),
            section_policy: SectionPolicy::default(),
            scale_denominators: DEFAULT_SCALE_DENOMINATORS.to_vec(),
            // ANSI D sheet with margins: 0.80 m x 0.55 m of printable map.
            sheet_width_m: 0.80,
            sheet_height_m: 0.55,
            project_id: None,
            title: None,
            author: None,
        }
    }
}

impl SheetConfigBuilder {
    /// Set the county layer binding.
    pub fn counties(mut self, binding: LayerBinding) -> Self {
        self.counties = binding;
        self
    }

    /// Set the quad layer binding.
    pub fn quads(mut self, binding: LayerBinding) -> Self {
        self.quads = binding;
        self
    }

    /// Set the PLSS layer binding.
    pub fn plss(mut self, binding: LayerBinding) -> Self {
        self.plss = binding;
        self
    }

    /// Set the UTM zone layer binding.
    pub fn utm_zones(mut self, binding: LayerBinding) -> Self {
        self.utm_zones = binding;
        self
    }

    /// Override template element names.
    pub fn placeholders(mut self, placeholders: PlaceholderNames) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Set the duplicate-section policy.
    pub fn section_policy(mut self, policy: SectionPolicy) -> Self {
        self.section_policy = policy;
        self
    }

    /// Set the candidate scale denominators (ascending).
    pub fn scale_denominators(mut self, denominators: Vec<u32>) -> Self {
        self.scale_denominators = denominators;
        self
    }

    /// Set the printable sheet dimensions in metres.
    pub fn sheet_size_m(mut self, width: f64, height: f64) -> Self {
        self.sheet_width_m = width;
        self.sheet_height_m = height;
        self
    }

    /// Set the optional project id.
    pub fn project_id(mut self, value: impl Into<String>) -> Self {
        self.project_id = Some(value.into());
        self
    }

    /// Set the optional title.
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    /// Set the optional author.
    pub fn author(mut self, value: impl Into<String>) -> Self {
        self.author = Some(value.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> SheetConfig {
        SheetConfig {
            counties: self.counties,
            quads: self.quads,
            plss: self.plss,
            utm_zones: self.utm_zones,
            placeholders: self.placeholders,
            section_policy: self.section_policy,
            scale_denominators: self.scale_denominators,
            sheet_width_m: self.sheet_width_m,
            sheet_height_m: self.sheet_height_m,
            project_id: self.project_id,
            title: self.title,
            author: self.author,
        }
    }
}
