//! Map-date line rendering.

use chrono::{Datelike, NaiveDate};

/// Render the map date line: `"Map Date: {month}/{day}/{year}"`.
///
/// Month and day carry no leading zeros. Fields are formatted manually
/// rather than through a strftime pattern so the output is identical on
/// every platform.
pub fn format_date(date: NaiveDate) -> String {
    format!("Map Date: {}/{}/{}", date.month(), date.day(), date.year())
}
