/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  names file (.csv / .txt / .json)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  tokens → Vec<Record>, malformed groups skipped
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ NameDataset │  insertion-ordered multiset of records
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  gender predicate → matching records
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
