//! Aggregate queries over a loaded [`NameDataset`].
//!
//! Every query borrows the dataset immutably; the median works on its own
//! sorted copy of the counts so the source order is never disturbed.

use crate::data::filter::GenderFilter;
use crate::data::model::{NameDataset, Record};
use crate::error::{Result, StatsError};

/// Owns the dataset for the lifetime of a run and answers queries on it.
#[derive(Debug, Clone, Default)]
pub struct NameStatistics {
    dataset: NameDataset,
}

impl NameStatistics {
    pub fn new(dataset: NameDataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &NameDataset {
        &self.dataset
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Record with the highest count; the earliest one wins a tie.
    pub fn most_popular(&self) -> Result<&Record> {
        first_max(self.dataset.iter()).ok_or(StatsError::EmptyDataset {
            operation: "most popular",
        })
    }

    /// Record with the highest count among those of `gender` (exact match).
    pub fn most_popular_by_gender(&self, gender: &str) -> Option<&Record> {
        first_max(GenderFilter::new(gender).select(&self.dataset).into_iter())
    }

    /// Like [`most_popular_by_gender`](Self::most_popular_by_gender) but
    /// substitutes [`Record::not_found`] when nothing matches.
    pub fn most_popular_by_gender_or_sentinel(&self, gender: &str) -> Record {
        self.most_popular_by_gender(gender)
            .cloned()
            .unwrap_or_else(Record::not_found)
    }

    /// Number of records with a zero count.
    pub fn count_unused(&self) -> usize {
        self.dataset.iter().filter(|r| r.count == 0).count()
    }

    /// Median over one count per record, duplicates included.
    pub fn median_count(&self) -> Result<f64> {
        let mut counts: Vec<u64> = self.dataset.iter().map(|r| r.count).collect();
        if counts.is_empty() {
            return Err(StatsError::EmptyDataset {
                operation: "median count",
            });
        }
        counts.sort_unstable();

        let n = counts.len();
        let median = if n % 2 == 0 {
            (counts[n / 2 - 1] as f64 + counts[n / 2] as f64) / 2.0
        } else {
            counts[n / 2] as f64
        };
        Ok(median)
    }

    /// Arithmetic mean of the counts; `0.0` for an empty dataset.
    pub fn average_count(&self) -> f64 {
        if self.dataset.is_empty() {
            return 0.0;
        }
        let total: u128 = self.dataset.iter().map(|r| u128::from(r.count)).sum();
        total as f64 / self.dataset.len() as f64
    }

    /// Records with `count < threshold`.
    pub fn count_below(&self, threshold: u64) -> usize {
        self.dataset.iter().filter(|r| r.count < threshold).count()
    }

    /// Records with `count > threshold`.
    pub fn count_above(&self, threshold: u64) -> usize {
        self.dataset.iter().filter(|r| r.count > threshold).count()
    }
}

/// Left-to-right scan where only a strictly greater count replaces the
/// current best, so ties resolve to the first record seen.
fn first_max<'a>(records: impl Iterator<Item = &'a Record>) -> Option<&'a Record> {
    records.reduce(|best, r| if r.count > best.count { r } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(records: &[(&str, &str, u64)]) -> NameStatistics {
        NameStatistics::new(NameDataset::from_records(
            records
                .iter()
                .map(|&(n, g, c)| Record::new(n, g, c))
                .collect(),
        ))
    }

    fn reference() -> NameStatistics {
        stats(&[("Anna", "female", 10), ("Ivan", "male", 20), ("Olga", "female", 5)])
    }

    fn property_datasets() -> Vec<NameStatistics> {
        vec![
            reference(),
            stats(&[("Solo", "male", 7)]),
            stats(&[("A", "f", 0), ("B", "f", 0), ("C", "m", 0)]),
            stats(&[("A", "f", 5), ("B", "m", 50), ("C", "f", 5), ("D", "m", 51), ("E", "f", 4)]),
            stats(&[("A", "f", u64::MAX), ("B", "m", u64::MAX - 1)]),
        ]
    }

    #[test]
    fn reference_scenario() {
        let s = reference();
        assert_eq!(s.most_popular().unwrap(), &Record::new("Ivan", "male", 20));
        assert_eq!(
            s.most_popular_by_gender("female"),
            Some(&Record::new("Anna", "female", 10))
        );
        assert_eq!(s.most_popular_by_gender("unknown"), None);
        assert_eq!(s.most_popular_by_gender_or_sentinel("unknown"), Record::not_found());
        assert_eq!(s.count_unused(), 0);
        assert_eq!(s.median_count().unwrap(), 10.0);
        assert!((s.average_count() - 11.666_666).abs() < 1e-3);
        assert_eq!(s.count_below(10), 1);
        assert_eq!(s.count_above(10), 1);
    }

    #[test]
    fn ties_resolve_to_first_record() {
        let s = stats(&[("A", "f", 3), ("B", "f", 9), ("C", "m", 9), ("D", "f", 9)]);
        assert_eq!(s.most_popular().unwrap().name, "B");
        assert_eq!(s.most_popular_by_gender("f").unwrap().name, "B");
        assert_eq!(s.most_popular_by_gender("m").unwrap().name, "C");
    }

    #[test]
    fn most_popular_is_at_least_every_count() {
        for s in property_datasets() {
            let top = s.most_popular().unwrap().count;
            assert!(s.dataset().iter().all(|r| top >= r.count));
        }
    }

    #[test]
    fn median_lies_within_count_range() {
        for s in property_datasets() {
            let median = s.median_count().unwrap();
            let min = s.dataset().iter().map(|r| r.count).min().unwrap() as f64;
            let max = s.dataset().iter().map(|r| r.count).max().unwrap() as f64;
            assert!(min <= median && median <= max, "{median} outside [{min}, {max}]");
        }
    }

    #[test]
    fn below_plus_above_never_exceeds_size() {
        for s in property_datasets() {
            for t in [0, 1, 5, 10, 50, u64::MAX] {
                assert!(s.count_below(t) + s.count_above(t) <= s.len());
            }
        }
    }

    #[test]
    fn thresholds_are_strict() {
        let s = stats(&[("A", "f", 5), ("B", "m", 50), ("C", "f", 4), ("D", "m", 51)]);
        assert_eq!(s.count_below(5), 1);
        assert_eq!(s.count_above(50), 1);
        assert_eq!(s.count_below(5) + s.count_above(5), 3);
    }

    #[test]
    fn even_sized_median_averages_middle_pair() {
        let s = stats(&[("A", "f", 20), ("B", "m", 5), ("C", "f", 10), ("D", "m", 0)]);
        assert_eq!(s.median_count().unwrap(), 7.5);
    }

    #[test]
    fn median_does_not_reorder_dataset() {
        let s = stats(&[("A", "f", 20), ("B", "m", 5), ("C", "f", 10)]);
        s.median_count().unwrap();
        let names: Vec<&str> = s.dataset().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn counts_unused_records() {
        let s = stats(&[("A", "f", 0), ("B", "m", 3), ("A", "f", 0)]);
        assert_eq!(s.count_unused(), 2);
    }

    #[test]
    fn empty_dataset_behaviour() {
        let s = NameStatistics::default();
        assert!(matches!(
            s.most_popular(),
            Err(StatsError::EmptyDataset { operation: "most popular" })
        ));
        assert!(matches!(s.median_count(), Err(StatsError::EmptyDataset { .. })));
        assert_eq!(s.average_count(), 0.0);
        assert_eq!(s.most_popular_by_gender("female"), None);
        assert_eq!(s.count_unused(), 0);
        assert_eq!(s.count_below(5), 0);
        assert_eq!(s.count_above(50), 0);
    }

    #[test]
    fn average_does_not_overflow_large_counts() {
        let s = stats(&[("A", "f", u64::MAX), ("B", "m", u64::MAX)]);
        assert_eq!(s.average_count(), u64::MAX as f64);
    }
}
