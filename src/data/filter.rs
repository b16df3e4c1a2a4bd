use super::model::{NameDataset, Record};

// ---------------------------------------------------------------------------
// Gender filter: exact, case-sensitive match on the gender field
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderFilter<'a> {
    gender: &'a str,
}

impl<'a> GenderFilter<'a> {
    pub fn new(gender: &'a str) -> Self {
        Self { gender }
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.gender == self.gender
    }

    /// Records passing the filter, in dataset order.
    pub fn select<'d>(&self, dataset: &'d NameDataset) -> Vec<&'d Record> {
        dataset.iter().filter(|r| self.matches(r)).collect()
    }

    /// Number of records passing the filter.
    pub fn count(&self, dataset: &NameDataset) -> usize {
        dataset.iter().filter(|r| self.matches(r)).count()
    }
}
