/// Data layer: core types, the embedded dataset, and filtering.
///
/// Architecture:
/// ```text
///  embedded CSV constant
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  parse once → MarginDataset (process-wide, read-only)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ MarginDataset │  Vec<IndustryRecord>, declaration order
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply the industry scope → record indices
///   └──────────┘
/// ```

pub mod filter;
pub mod model;
pub mod parser;
