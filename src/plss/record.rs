//! Legal-description record types.

use std::fmt;

/// Structured decode of one PLSS identifier.
///
/// Immutable once constructed; produced only by
/// [`parse_plss_code`](super::parse_plss_code).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegalDescription {
    /// Principal meridian code (small integer, e.g. 6 for the Sixth PM).
    pub meridian: u16,
    /// Township number plus direction letter, e.g. `"02N"`.
    pub township: String,
    /// Range number plus direction letter, e.g. `"03W"`.
    pub range: String,
    /// Section number within the township (1-36 in well-formed data).
    pub section: u8,
}

/// Grouping key for aggregation: everything but the section.
///
/// `Ord` is derived, so the natural sort is meridian ascending, then township
/// lexical, then range lexical — the deterministic render order used when
/// formatting aggregated groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    /// Principal meridian code.
    pub meridian: u16,
    /// Township number plus direction letter.
    pub township: String,
    /// Range number plus direction letter.
    pub range: String,
}

impl GroupKey {
    /// The grouping key of a record.
    pub fn of(record: &LegalDescription) -> Self {
        Self {
            meridian: record.meridian,
            township: record.township.clone(),
            range: record.range.clone(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PM {} | Twn {} | Rng {}",
            self.meridian, self.township, self.range
        )
    }
}
