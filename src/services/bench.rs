//! Empirical benchmark harness: times one sorting strategy over presorted
//! and shuffled copies of a sample.

use std::time::Instant;

use rand::seq::SliceRandom;

use crate::models::DailyQuote;
use crate::services::sort::SortAlgorithm;

/// Trials run per input ordering.
pub const TRIALS: usize = 5;

/// Mean wall-clock cost of one algorithm under both input orderings.
#[derive(Debug, Clone, Copy)]
pub struct TrialReport {
    pub presorted_avg_secs: f64,
    pub shuffled_avg_secs: f64,
}

/// Run the trial comparison for one algorithm over `sample`.
///
/// Each trial times the algorithm once on an already-sorted copy and once on
/// a freshly shuffled copy. Every timed run owns an independent copy of the
/// data; no run ever re-sorts another run's storage.
pub fn run_trials(sample: &[DailyQuote], algorithm: SortAlgorithm) -> TrialReport {
    let mut rng = rand::thread_rng();
    let mut working = sample.to_vec();

    let mut presorted_total = 0.0;
    let mut shuffled_total = 0.0;

    for _ in 0..TRIALS {
        let mut presorted = working.clone();
        presorted.sort_by(|a, b| a.low.total_cmp(&b.low));
        presorted_total += time_sort(presorted, algorithm);

        working.shuffle(&mut rng);
        shuffled_total += time_sort(working.clone(), algorithm);
    }

    TrialReport {
        presorted_avg_secs: presorted_total / TRIALS as f64,
        shuffled_avg_secs: shuffled_total / TRIALS as f64,
    }
}

/// Time one sort call over an owned copy, bracketing only the sort itself.
fn time_sort(mut quotes: Vec<DailyQuote>, algorithm: SortAlgorithm) -> f64 {
    let start = Instant::now();
    algorithm.sort_by_low(&mut quotes);
    start.elapsed().as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_sample(n: usize) -> Vec<DailyQuote> {
        // Deterministic but scrambled lows.
        (0..n)
            .map(|i| {
                let low = ((i * 7919) % 104_729) as f64;
                DailyQuote {
                    ticker: format!("T{}", i),
                    market: "X".to_string(),
                    open: low,
                    high: low + 1.0,
                    low,
                    close: low,
                    volume: 1.0,
                    adjusted_close: low,
                }
            })
            .collect()
    }

    #[test]
    fn test_reports_finite_nonnegative_averages() {
        let sample = synthetic_sample(64);
        for algorithm in [
            SortAlgorithm::Insertion,
            SortAlgorithm::Quick,
            SortAlgorithm::Merge,
        ] {
            let report = run_trials(&sample, algorithm);
            assert!(report.presorted_avg_secs.is_finite());
            assert!(report.shuffled_avg_secs.is_finite());
            assert!(report.presorted_avg_secs >= 0.0);
            assert!(report.shuffled_avg_secs >= 0.0);
        }
    }

    #[test]
    fn test_insertion_sort_is_adaptive_on_presorted_input() {
        // O(n) on sorted input versus O(n^2) shuffled leaves a wide margin
        // at this size, so the non-strict comparison is safe.
        let sample = synthetic_sample(2000);
        let report = run_trials(&sample, SortAlgorithm::Insertion);
        assert!(report.presorted_avg_secs <= report.shuffled_avg_secs);
    }

    #[test]
    fn test_empty_sample_is_harmless() {
        let report = run_trials(&[], SortAlgorithm::Quick);
        assert!(report.presorted_avg_secs >= 0.0);
        assert!(report.shuffled_avg_secs >= 0.0);
    }
}
