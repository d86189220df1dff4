//! UTM block rendering and coordinate rounding.

/// Round a coordinate to the nearest whole unit, halves away from zero.
///
/// This is the crate's pinned rounding rule for UTM coordinates ("round half
/// up" for the positive eastings/northings UTM produces): `345678.5` rounds
/// to `345679`, not banker's-rounded to `345678`.
pub fn round_half_up(value: f64) -> i64 {
    value.round() as i64
}

/// Render the UTM block: `"{zone}N | {northing} mN | {easting} mE"`.
///
/// The zone is the maximum of `zones` under the natural ordering of the
/// provided string representation; northing and easting must already be
/// rounded to whole metres (see [`round_half_up`]). An empty zone list
/// renders as the empty string so the caller can skip the placeholder.
pub fn format_utm(zones: &[String], northing: i64, easting: i64) -> String {
    match zones.iter().max() {
        Some(zone) => format!("{}N | {} mN | {} mE", zone, northing, easting),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones(values: &[&str]) -> Vec<String> {
        values.iter().map(|z| z.to_string()).collect()
    }

    #[test]
    fn test_format_with_max_zone() {
        let rendered = format_utm(
            &zones(&["12", "13"]),
            round_half_up(4567890.4),
            round_half_up(345678.6),
        );
        assert_eq!(rendered, "13N | 4567890 mN | 345679 mE");
    }

    #[test]
    fn test_format_single_zone() {
        let rendered = format_utm(&zones(&["13"]), 4400000, 500000);
        assert_eq!(rendered, "13N | 4400000 mN | 500000 mE");
    }

    #[test]
    fn test_format_empty_zones() {
        assert_eq!(format_utm(&[], 4400000, 500000), "");
    }

    #[test]
    fn test_round_half_up_at_boundary() {
        // Halves round away from zero, not to even.
        assert_eq!(round_half_up(345678.5), 345679);
        assert_eq!(round_half_up(345677.5), 345678);
    }

    #[test]
    fn test_round_below_and_above_half() {
        assert_eq!(round_half_up(4567890.4), 4567890);
        assert_eq!(round_half_up(4567890.6), 4567891);
    }

    #[test]
    fn test_round_exact_integer() {
        assert_eq!(round_half_up(500000.0), 500000);
    }
}
