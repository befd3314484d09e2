use serde::{Deserialize, Serialize};

/// One daily price record for a ticker on an exchange.
///
/// The trading date is not part of the record; the archive scanner yields it
/// alongside each quote and the index files quotes under it. Prices that were
/// present but unparseable in the source CSV are kept as `f64::NAN`; blank
/// cells are kept as `0.0`. Consumers that compare or aggregate these fields
/// must handle both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyQuote {
    /// Ticker symbol, e.g. "AAPL"
    pub ticker: String,
    /// Market (exchange) the file was filed under, e.g. "NASDAQ"
    pub market: String,
    /// Opening price
    pub open: f64,
    /// Highest price of the day
    pub high: f64,
    /// Lowest price of the day
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: f64,
    /// Close adjusted for splits and dividends
    pub adjusted_close: f64,
}

impl DailyQuote {
    /// Key used to distinguish the same symbol listed on different markets,
    /// e.g. "NASDAQ-AAPL".
    pub fn composite_key(&self) -> String {
        format!("{}-{}", self.market, self.ticker)
    }
}
