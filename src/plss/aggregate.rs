//! Section aggregation under (meridian, township, range) keys.

use std::collections::BTreeMap;

use super::record::{GroupKey, LegalDescription};

/// Policy for repeated section numbers within one group.
///
/// Multiple overlapping reference features can legitimately contribute the
/// same section; whether the report should show the repeat is a per-request
/// policy decision, not a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionPolicy {
    /// Preserve every occurrence as delivered by the source data.
    #[default]
    KeepDuplicates,
    /// Collapse repeated section numbers within a group.
    Deduplicate,
}

/// Aggregated PLSS data, keyed by (meridian, township, range).
///
/// A `BTreeMap` keyed by [`GroupKey`] iterates in the key's derived order
/// (meridian ascending, township lexical, range lexical), which makes the
/// rendered output reproducible regardless of selection order. Each group's
/// section list is sorted ascending numerically.
pub type AggregatedPlss = BTreeMap<GroupKey, Vec<u8>>;

/// Group legal descriptions and collect their sections.
///
/// Output is independent of input order: records are bucketed by
/// [`GroupKey`] and each bucket's sections are sorted ascending. Under
/// [`SectionPolicy::Deduplicate`] repeated sections within a group collapse
/// to one entry; the default keeps them.
pub fn aggregate(
    records: impl IntoIterator<Item = LegalDescription>,
    policy: SectionPolicy,
) -> AggregatedPlss {
    let mut groups: AggregatedPlss = BTreeMap::new();
    for record in records {
        groups
            .entry(GroupKey::of(&record))
            .or_default()
            .push(record.section);
    }
    for sections in groups.values_mut() {
        sections.sort_unstable();
        if policy == SectionPolicy::Deduplicate {
            sections.dedup();
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(meridian: u16, township: &str, range: &str, section: u8) -> LegalDescription {
        LegalDescription {
            meridian,
            township: township.to_string(),
            range: range.to_string(),
            section,
        }
    }

    #[test]
    fn test_single_group_sorted_sections() {
        let aggregated = aggregate(
            vec![record(2, "02N", "03W", 14), record(2, "02N", "03W", 9)],
            SectionPolicy::KeepDuplicates,
        );

        assert_eq!(aggregated.len(), 1);
        let key = GroupKey {
            meridian: 2,
            township: "02N".to_string(),
            range: "03W".to_string(),
        };
        assert_eq!(aggregated[&key], vec![9, 14]);
    }

    #[test]
    fn test_numeric_sort_not_lexical() {
        // Lexically "10" < "2"; numerically 2 < 10.
        let aggregated = aggregate(
            vec![record(6, "01N", "01W", 10), record(6, "01N", "01W", 2)],
            SectionPolicy::KeepDuplicates,
        );
        let sections = aggregated.values().next().unwrap();
        assert_eq!(sections, &vec![2, 10]);
    }

    #[test]
    fn test_keep_duplicates_preserves_repeats() {
        let aggregated = aggregate(
            vec![
                record(6, "01N", "01W", 7),
                record(6, "01N", "01W", 7),
                record(6, "01N", "01W", 3),
            ],
            SectionPolicy::KeepDuplicates,
        );
        let sections = aggregated.values().next().unwrap();
        assert_eq!(sections, &vec![3, 7, 7]);
    }

    #[test]
    fn test_deduplicate_collapses_repeats() {
        let aggregated = aggregate(
            vec![
                record(6, "01N", "01W", 7),
                record(6, "01N", "01W", 7),
                record(6, "01N", "01W", 3),
            ],
            SectionPolicy::Deduplicate,
        );
        let sections = aggregated.values().next().unwrap();
        assert_eq!(sections, &vec![3, 7]);
    }

    #[test]
    fn test_groups_iterate_in_key_order() {
        let aggregated = aggregate(
            vec![
                record(6, "02N", "03W", 1),
                record(2, "09S", "10E", 1),
                record(6, "01N", "05W", 1),
            ],
            SectionPolicy::KeepDuplicates,
        );

        let keys: Vec<String> = aggregated.keys().map(|k| k.to_string()).collect();
        assert_eq!(
            keys,
            vec![
                "PM 2 | Twn 09S | Rng 10E",
                "PM 6 | Twn 01N | Rng 05W",
                "PM 6 | Twn 02N | Rng 03W",
            ]
        );
    }

    #[test]
    fn test_order_insensitive() {
        let forward = aggregate(
            vec![
                record(6, "02N", "03W", 14),
                record(6, "02N", "03W", 9),
                record(2, "01S", "01E", 36),
            ],
            SectionPolicy::KeepDuplicates,
        );
        let reversed = aggregate(
            vec![
                record(2, "01S", "01E", 36),
                record(6, "02N", "03W", 9),
                record(6, "02N", "03W", 14),
            ],
            SectionPolicy::KeepDuplicates,
        );
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let aggregated = aggregate(vec![], SectionPolicy::KeepDuplicates);
        assert!(aggregated.is_empty());
    }
}
