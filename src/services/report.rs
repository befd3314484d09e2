//! Report Emitter: renders the date-sorted view and the per-ticker
//! aggregates as CSV files.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::DateIndex;
use crate::services::aggregator::TickerSummary;

/// Write the date-sorted view of the index, one row per date in the given
/// order. The second column lists every `(ticker, market)` pair active that
/// day, sorted so the output is deterministic regardless of map iteration
/// order.
pub fn write_sorted_dates(path: &Path, index: &DateIndex, dates: &[NaiveDate]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Date", "Tickers & Market"])?;

    for date in dates {
        let mut pairs: Vec<String> = match index.quotes_for(*date) {
            Some(quotes) => quotes
                .values()
                .map(|quote| format!("({}, {})", quote.ticker, quote.market))
                .collect(),
            None => Vec::new(),
        };
        pairs.sort();
        writer.write_record([date.to_string(), pairs.join(", ")])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write one row per ticker summary, in the order given.
pub fn write_aggregates(path: &Path, summaries: &[TickerSummary]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Ticker",
        "Market",
        "Lowest Value",
        "Highest Value",
        "Average Volume",
        "Period",
    ])?;

    for summary in summaries {
        writer.write_record([
            summary.ticker.clone(),
            summary.market.clone(),
            summary.lowest.to_string(),
            summary.highest.to_string(),
            summary.average_volume().to_string(),
            summary.period(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyQuote;
    use std::fs;
    use tempfile::TempDir;

    fn quote(ticker: &str, market: &str) -> DailyQuote {
        DailyQuote {
            ticker: ticker.to_string(),
            market: market.to_string(),
            open: 1.0,
            high: 2.0,
            low: 1.0,
            close: 1.5,
            volume: 100.0,
            adjusted_close: 1.4,
        }
    }

    #[test]
    fn test_sorted_dates_report_layout() {
        let day1 = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();

        let mut index = DateIndex::new();
        index.insert(day1, quote("B", "market2"));
        index.insert(day1, quote("A", "market1"));
        index.insert(day2, quote("A", "market1"));

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sorted.csv");
        write_sorted_dates(&path, &index, &[day1, day2]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Date,Tickers & Market");
        // The pair list contains commas, so the csv writer quotes it.
        assert_eq!(lines[1], "2020-01-01,\"(A, market1), (B, market2)\"");
        assert_eq!(lines[2], "2020-01-02,\"(A, market1)\"");
    }

    #[test]
    fn test_aggregates_report_layout() {
        let summaries = vec![TickerSummary {
            ticker: "AAPL".to_string(),
            market: "NYSE".to_string(),
            lowest: 5.0,
            highest: 25.0,
            total_volume: 300.0,
            count: 2,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
        }];

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("averages.csv");
        write_aggregates(&path, &summaries).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Ticker,Market,Lowest Value,Highest Value,Average Volume,Period"
        );
        assert_eq!(lines[1], "AAPL,NYSE,5,25,150,2020-01-01 - 2020-01-02");
    }

    #[test]
    fn test_empty_reports_still_carry_headers() {
        let dir = TempDir::new().unwrap();

        let sorted = dir.path().join("sorted.csv");
        write_sorted_dates(&sorted, &DateIndex::new(), &[]).unwrap();
        assert_eq!(
            fs::read_to_string(&sorted).unwrap().lines().count(),
            1
        );

        let aggregates = dir.path().join("averages.csv");
        write_aggregates(&aggregates, &[]).unwrap();
        assert_eq!(
            fs::read_to_string(&aggregates).unwrap().lines().count(),
            1
        );
    }
}
