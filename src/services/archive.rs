//! Record Source for the pipeline: a lazy scan over the per-ticker CSV files
//! inside a ZIP archive, plus the file-at-a-time random sampling used by the
//! benchmark harness.
//!
//! Entry paths follow `<prefix>/<market>/<group>/<ticker>.csv`. Each entry is
//! opened, fully read and dropped before the next one; the archive handle
//! stays open for the duration of the scan.

use std::collections::VecDeque;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use zip::ZipArchive;

use crate::error::Result;
use crate::models::DailyQuote;

// Column layout of the source rows.
const COL_DATE: usize = 0;
const COL_LOW: usize = 1;
const COL_OPEN: usize = 2;
const COL_VOLUME: usize = 3;
const COL_HIGH: usize = 4;
const COL_CLOSE: usize = 5;
const COL_ADJ_CLOSE: usize = 6;

/// Minimum number of fields a data row must carry.
const MIN_ROW_FIELDS: usize = 7;

/// Source date format, e.g. "01-03-2017".
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Counters accumulated over one scan.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// CSV entries attributed to a market/ticker and parsed
    pub files: usize,
    /// Rows turned into quotes
    pub rows_kept: usize,
    /// Rows dropped (too few fields, unparseable date, header rows)
    pub rows_skipped: usize,
}

/// Lazy iterator over every `(trade date, quote)` pair in an archive.
///
/// One ZIP entry is parsed at a time; rows within an entry are yielded in
/// file order. The iterator is finite and not restartable.
pub struct ArchiveScanner {
    archive: ZipArchive<File>,
    entries: Vec<usize>,
    next_entry: usize,
    pending: VecDeque<(NaiveDate, DailyQuote)>,
    stats: ScanStats,
}

impl ArchiveScanner {
    /// Open the archive and locate its CSV entries. Nothing is decompressed
    /// until the iterator is consumed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;

        let mut entries = Vec::new();
        for index in 0..archive.len() {
            let entry = archive.by_index(index)?;
            if entry.name().ends_with(".csv") {
                entries.push(index);
            }
        }

        Ok(Self {
            archive,
            entries,
            next_entry: 0,
            pending: VecDeque::new(),
            stats: ScanStats::default(),
        })
    }

    /// Number of CSV entries found in the archive.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Counters accumulated so far; complete once the iterator is exhausted.
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Read, decode and parse one entry, queueing its quotes.
    fn read_entry(&mut self, index: usize) -> Result<()> {
        let mut entry = self.archive.by_index(index)?;
        let name = entry.name().to_string();
        let mut content = String::new();
        entry.read_to_string(&mut content)?;
        drop(entry);

        let Some((market, ticker)) = market_and_ticker(&name) else {
            tracing::warn!(entry = %name, "entry path has no market/ticker segments, skipping");
            return Ok(());
        };

        self.stats.files += 1;
        self.parse_rows(&name, &market, &ticker, &content);
        Ok(())
    }

    fn parse_rows(&mut self, entry_name: &str, market: &str, ticker: &str, content: &str) {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        for (line_idx, record) in reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    self.stats.rows_skipped += 1;
                    tracing::warn!(
                        entry = %entry_name,
                        line = line_idx + 1,
                        error = %err,
                        "unreadable row, skipping"
                    );
                    continue;
                }
            };

            if record.len() < MIN_ROW_FIELDS {
                self.stats.rows_skipped += 1;
                tracing::warn!(
                    entry = %entry_name,
                    line = line_idx + 1,
                    fields = record.len(),
                    "row has too few fields, skipping"
                );
                continue;
            }

            let date = match NaiveDate::parse_from_str(record[COL_DATE].trim(), DATE_FORMAT) {
                Ok(date) => date,
                Err(_) => {
                    // Header rows land here too since their date cell never
                    // parses, so a headerless file loses no data.
                    self.stats.rows_skipped += 1;
                    tracing::debug!(
                        entry = %entry_name,
                        line = line_idx + 1,
                        value = record[COL_DATE].trim(),
                        "unparseable date, skipping row"
                    );
                    continue;
                }
            };

            let quote = DailyQuote {
                ticker: ticker.to_string(),
                market: market.to_string(),
                open: parse_price(&record[COL_OPEN]),
                high: parse_price(&record[COL_HIGH]),
                low: parse_price(&record[COL_LOW]),
                close: parse_price(&record[COL_CLOSE]),
                volume: parse_price(&record[COL_VOLUME]),
                adjusted_close: parse_price(&record[COL_ADJ_CLOSE]),
            };
            self.stats.rows_kept += 1;
            self.pending.push_back((date, quote));
        }
    }
}

impl Iterator for ArchiveScanner {
    type Item = (NaiveDate, DailyQuote);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                return Some(item);
            }
            if self.next_entry >= self.entries.len() {
                return None;
            }
            let index = self.entries[self.next_entry];
            self.next_entry += 1;
            if let Err(err) = self.read_entry(index) {
                tracing::warn!(index, error = %err, "unreadable archive entry, skipping");
            }
        }
    }
}

/// Draw up to `n` quotes for the benchmark.
///
/// CSV entries are visited in a uniformly random order without revisiting
/// any, scanning each file's rows in order until the target is reached. The
/// file-at-a-time policy skews the sample toward rows of early-picked files;
/// it is kept as-is for comparability with historical benchmark runs.
pub fn sample_records(path: &Path, n: usize) -> Result<Vec<DailyQuote>> {
    let mut scanner = ArchiveScanner::open(path)?;
    scanner.entries.shuffle(&mut rand::thread_rng());
    Ok(scanner.map(|(_, quote)| quote).take(n).collect())
}

/// Extract `(market, ticker)` from an entry path shaped
/// `<prefix>/<market>/<group>/<ticker>.csv`.
fn market_and_ticker(entry_path: &str) -> Option<(String, String)> {
    let segments: Vec<&str> = entry_path.split('/').collect();
    if segments.len() < 4 {
        return None;
    }
    let ticker = segments[3].strip_suffix(".csv")?;
    Some((segments[1].to_string(), ticker.to_string()))
}

/// Lenient numeric parse: blank cells become 0.0, anything else unparseable
/// becomes NaN so the row survives with that field unordered.
fn parse_price(field: &str) -> f64 {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}
