//! PLSS block rendering.

use crate::plss::AggregatedPlss;

/// Render aggregated PLSS groups into the report's PLSS block.
///
/// One block per group, in the map's deterministic key order:
///
/// ```text
/// PM 2 | Twn 02N | Rng 03W
/// Sections: 9, 14
/// ```
///
/// The header line carries a trailing space before the newline (matching the
/// template layout) and blocks are joined by a single newline. An empty map
/// renders as the empty string.
pub fn format_plss(aggregated: &AggregatedPlss) -> String {
    let blocks: Vec<String> = aggregated
        .iter()
        .map(|(key, sections)| {
            let joined = sections
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} \nSections: {}", key, joined)
        })
        .collect();
    blocks.join("\n")
}
