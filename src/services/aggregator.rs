//! Per-ticker summary statistics derived in one pass over the date index.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::DateIndex;

/// Summary of one ticker's activity across the whole archive.
#[derive(Debug, Clone, Serialize)]
pub struct TickerSummary {
    pub ticker: String,
    pub market: String,
    /// Minimum daily low seen for the ticker
    pub lowest: f64,
    /// Maximum daily high seen for the ticker
    pub highest: f64,
    pub total_volume: f64,
    pub count: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TickerSummary {
    /// Mean daily volume over the ticker's active range. `count` is at least
    /// one for every emitted summary.
    pub fn average_volume(&self) -> f64 {
        self.total_volume / self.count as f64
    }

    /// Active date range rendered as "start - end".
    pub fn period(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

/// Build one summary row per distinct ticker, ordered by ticker name.
///
/// Tickers are grouped by symbol alone, so the same symbol listed on two
/// markets collapses into one row carrying the market of whichever quote was
/// seen first. Running min/max use explicit comparisons: every comparison
/// against NaN is false, so a NaN candidate never displaces a numeric
/// accumulator and an accumulator seeded from a NaN field keeps it.
pub fn summarize(index: &DateIndex) -> Vec<TickerSummary> {
    let mut by_ticker: HashMap<String, TickerSummary> = HashMap::new();

    for (date, quote) in index.iter() {
        match by_ticker.get_mut(&quote.ticker) {
            Some(summary) => {
                if quote.low < summary.lowest {
                    summary.lowest = quote.low;
                }
                if quote.high > summary.highest {
                    summary.highest = quote.high;
                }
                summary.total_volume += quote.volume;
                summary.count += 1;
                if *date < summary.start_date {
                    summary.start_date = *date;
                }
                if *date > summary.end_date {
                    summary.end_date = *date;
                }
            }
            None => {
                by_ticker.insert(
                    quote.ticker.clone(),
                    TickerSummary {
                        ticker: quote.ticker.clone(),
                        market: quote.market.clone(),
                        lowest: quote.low,
                        highest: quote.high,
                        total_volume: quote.volume,
                        count: 1,
                        start_date: *date,
                        end_date: *date,
                    },
                );
            }
        }
    }

    let mut summaries: Vec<TickerSummary> = by_ticker.into_values().collect();
    summaries.sort_by(|a, b| a.ticker.cmp(&b.ticker));
    summaries
}
