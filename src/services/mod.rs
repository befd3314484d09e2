pub mod aggregator;
pub mod archive;
pub mod bench;
pub mod report;
pub mod sort;

pub use aggregator::{summarize, TickerSummary};
pub use archive::{sample_records, ArchiveScanner, ScanStats};
pub use bench::{run_trials, TrialReport, TRIALS};
pub use sort::{
    insertion_sort_by_key, merge_sort_by_key, quicksort_by_key, PivotPolicy, SortAlgorithm,
};
