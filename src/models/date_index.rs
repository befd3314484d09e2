use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::DailyQuote;

/// All ingested quotes partitioned by trading date.
///
/// Each date maps composite `market-ticker` keys to the quote recorded for
/// that day. Inserting a second quote under the same (date, market, ticker)
/// replaces the first one silently, so a duplicate file later in the archive
/// supersedes an earlier one without any trace.
#[derive(Debug, Default)]
pub struct DateIndex {
    by_date: HashMap<NaiveDate, HashMap<String, DailyQuote>>,
}

impl DateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a quote under its trading date, keyed by `market-ticker`.
    /// Last write wins.
    pub fn insert(&mut self, date: NaiveDate, quote: DailyQuote) {
        self.by_date
            .entry(date)
            .or_default()
            .insert(quote.composite_key(), quote);
    }

    /// All dates present in the index, in arbitrary order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.by_date.keys().copied().collect()
    }

    /// Quotes recorded for one date, keyed by `market-ticker`.
    pub fn quotes_for(&self, date: NaiveDate) -> Option<&HashMap<String, DailyQuote>> {
        self.by_date.get(&date)
    }

    /// Iterate over every (date, quote) pair in the index.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DailyQuote)> {
        self.by_date
            .iter()
            .flat_map(|(date, quotes)| quotes.values().map(move |quote| (date, quote)))
    }

    /// Number of distinct dates in the index.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Total number of quotes across all dates.
    pub fn quote_count(&self) -> usize {
        self.by_date.values().map(|quotes| quotes.len()).sum()
    }
}
