//! Labeled list blocks for counties and quads.

/// Label used for the county block.
pub const COUNTY_LABEL: &str = "County(s):";

/// Label used for the 7.5-minute quad block.
pub const QUAD_LABEL: &str = "7.5' Quad(s):";

/// Render the county block: label, newline, comma-joined values.
///
/// Values pass through in selector order, neither sorted nor deduplicated.
/// An empty list renders as the bare label line (`"County(s):\n"`).
pub fn format_counties(values: &[String]) -> String {
    labeled_join(COUNTY_LABEL, values)
}

/// Render the 7.5-minute quad block with the same join pattern.
pub fn format_quads(values: &[String]) -> String {
    labeled_join(QUAD_LABEL, values)
}

fn labeled_join(label: &str, values: &[String]) -> String {
    format!("{}\n{}", label, values.join(", "))
}
