/// Data layer: passenger table, loading, caching, filtering and summaries.
///
/// Architecture:
/// ```text
///   remote titanic.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → PassengerTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  memoized Arc<PassengerTable>, explicit invalidation
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ pipeline  │  FilterSpec → FilteredResult + SummaryMetrics + AggregateViews
///   └──────────┘
/// ```

pub mod cache;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod summary;
