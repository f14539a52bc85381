/// Data layer: core types, loading, and the eligibility query.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → coerce cells → OfferDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ DatasetHandle  │  immutable snapshot + file mtime
///   └───────────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ eligibility  │  filter (course, category) → stats + ranked offers
///   └─────────────┘
/// ```

pub mod eligibility;
pub mod filter;
pub mod handle;
pub mod loader;
pub mod model;
