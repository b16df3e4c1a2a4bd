use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record – one (name, gender, count) observation
// ---------------------------------------------------------------------------

/// A single observation read from the input source.
///
/// Records carry no identity beyond their fields: the same name/gender
/// pair may appear several times and each occurrence counts on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub gender: String,
    /// How many times the name was chosen. Unsigned, so never negative.
    pub count: u64,
}

impl Record {
    pub fn new(name: impl Into<String>, gender: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
            count,
        }
    }

    /// Placeholder printed where no record matched: `(" ", " ", 0)`.
    pub fn not_found() -> Self {
        Self::new(" ", " ", 0)
    }
}

// ---------------------------------------------------------------------------
// NameDataset – the complete loaded multiset
// ---------------------------------------------------------------------------

/// All loaded records in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameDataset {
    records: Vec<Record>,
}

impl NameDataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records, duplicates included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Gender labels in order of first appearance.
    pub fn distinct_genders(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.gender.as_str()) {
                seen.push(&record.gender);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_blank_with_zero_count() {
        let sentinel = Record::not_found();
        assert_eq!(sentinel.name, " ");
        assert_eq!(sentinel.gender, " ");
        assert_eq!(sentinel.count, 0);
    }

    #[test]
    fn duplicates_are_kept_as_separate_entries() {
        let ds = NameDataset::from_records(vec![
            Record::new("Anna", "female", 3),
            Record::new("Anna", "female", 3),
        ]);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn distinct_genders_follow_first_appearance() {
        let ds = NameDataset::from_records(vec![
            Record::new("Ivan", "male", 1),
            Record::new("Anna", "female", 2),
            Record::new("Petr", "male", 3),
        ]);
        assert_eq!(ds.distinct_genders(), vec!["male", "female"]);
    }
}
