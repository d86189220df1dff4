//! Map-scale selection from the extent's ground footprint.

use crate::spatial::Extent;

/// Pick the smallest candidate scale denominator that fits the extent.
///
/// A denominator `d` fits when the extent's ground span, shrunk by `d`,
/// lands within the printable sheet dimensions on both axes. Candidates are
/// tried in the given order, which is expected to be ascending so the most
/// detailed fitting scale wins. Returns `None` when no candidate fits (or
/// the candidate list is empty); the caller then leaves the template's
/// scale untouched.
pub fn suggested_scale(
    extent: &Extent,
    sheet_width_m: f64,
    sheet_height_m: f64,
    candidates: &[u32],
) -> Option<u32> {
    candidates.iter().copied().find(|&denominator| {
        let d = denominator as f64;
        extent.width() / d <= sheet_width_m && extent.height() / d <= sheet_height_m
    })
}
