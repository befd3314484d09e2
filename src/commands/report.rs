use std::path::Path;
use std::time::Instant;

use crate::error::Result;
use crate::models::DateIndex;
use crate::services::archive::ArchiveScanner;
use crate::services::sort::{quicksort_by_key, PivotPolicy};
use crate::services::{aggregator, report};

pub fn run(archive_path: &Path, sorted_out: &Path, aggregates_out: &Path) {
    match generate_reports(archive_path, sorted_out, aggregates_out) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Scan the archive, index every quote by date, then render the date-sorted
/// view and the per-ticker aggregates.
fn generate_reports(archive_path: &Path, sorted_out: &Path, aggregates_out: &Path) -> Result<()> {
    let started = Instant::now();

    println!("📦 Scanning {}...", archive_path.display());
    let mut scanner = ArchiveScanner::open(archive_path)?;

    let mut index = DateIndex::new();
    for (date, quote) in &mut scanner {
        index.insert(date, quote);
    }

    let stats = scanner.stats();
    println!(
        "📊 Indexed {} rows from {} files across {} dates ({} rows skipped)",
        stats.rows_kept,
        stats.files,
        index.len(),
        stats.rows_skipped
    );
    tracing::info!(
        files = stats.files,
        rows_kept = stats.rows_kept,
        rows_skipped = stats.rows_skipped,
        dates = index.len(),
        "archive scan complete"
    );

    let mut dates = index.dates();
    quicksort_by_key(&mut dates, PivotPolicy::MedianOfThree, |date| *date);

    report::write_sorted_dates(sorted_out, &index, &dates)?;
    println!("✅ Wrote {}", sorted_out.display());

    let summaries = aggregator::summarize(&index);
    report::write_aggregates(aggregates_out, &summaries)?;
    println!("✅ Wrote {}", aggregates_out.display());

    println!("Execution time: {:.4} seconds", started.elapsed().as_secs_f64());
    println!("CSV files generated successfully.");
    Ok(())
}
