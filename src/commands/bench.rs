use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::Result;
use crate::services::archive;
use crate::services::bench::run_trials;
use crate::services::sort::SortAlgorithm;

const PROMPT: &str = "Enter dataset size (n) and sorting algorithm (i for Insertion, q for QuickSort, m for Merge Sort), or type 'quit' to exit: ";

const FORMAT_MESSAGE: &str = "Invalid input. Please enter in the format: <n> <sort_algo>";

pub fn run(archive_path: &Path) {
    match interactive_session(archive_path) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Prompt loop. Bad input re-prompts; `quit` or end of input ends the
/// session. Only archive-level failures escape as errors.
fn interactive_session(archive_path: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        match parse_request(input) {
            Ok((n, algorithm)) => run_analysis(archive_path, n, algorithm)?,
            Err(message) => println!("{}", message),
        }
    }

    Ok(())
}

/// Parse a request line of the form `<n> <algorithm-code>`.
fn parse_request(input: &str) -> std::result::Result<(i64, SortAlgorithm), String> {
    let mut tokens = input.split_whitespace();
    let (Some(size), Some(code), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(FORMAT_MESSAGE.to_string());
    };

    let n: i64 = size.parse().map_err(|_| FORMAT_MESSAGE.to_string())?;
    let algorithm =
        SortAlgorithm::from_code(code).ok_or_else(|| "Invalid sorting algorithm specified.".to_string())?;

    Ok((n, algorithm))
}

/// Sample `n` quotes and print mean sort times for both input orderings.
fn run_analysis(archive_path: &Path, n: i64, algorithm: SortAlgorithm) -> Result<()> {
    if n <= 0 {
        println!("Requested size must be greater than 0.");
        return Ok(());
    }

    let sample = archive::sample_records(archive_path, n as usize)?;
    if sample.len() < n as usize {
        tracing::warn!(
            requested = n,
            collected = sample.len(),
            "archive exhausted before reaching the target sample size"
        );
    }

    tracing::info!(n, algorithm = algorithm.name(), "running benchmark trials");
    let report = run_trials(&sample, algorithm);

    println!("Sorting completed:");
    println!("Average presorted time: {:.4} seconds", report.presorted_avg_secs);
    println!(
        "Average not presorted time: {:.4} seconds",
        report.shuffled_avg_secs
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_requests() {
        assert_eq!(parse_request("100 i"), Ok((100, SortAlgorithm::Insertion)));
        assert_eq!(parse_request("50 q"), Ok((50, SortAlgorithm::Quick)));
        assert_eq!(parse_request("10 m"), Ok((10, SortAlgorithm::Merge)));
        // Extra internal whitespace is tolerated.
        assert_eq!(parse_request("100    i"), Ok((100, SortAlgorithm::Insertion)));
    }

    #[test]
    fn test_parse_keeps_nonpositive_sizes_for_later_rejection() {
        assert_eq!(parse_request("-5 i"), Ok((-5, SortAlgorithm::Insertion)));
        assert_eq!(parse_request("0 q"), Ok((0, SortAlgorithm::Quick)));
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert_eq!(parse_request(""), Err(FORMAT_MESSAGE.to_string()));
        assert_eq!(parse_request("100"), Err(FORMAT_MESSAGE.to_string()));
        assert_eq!(parse_request("100 i extra"), Err(FORMAT_MESSAGE.to_string()));
        assert_eq!(parse_request("abc i"), Err(FORMAT_MESSAGE.to_string()));
    }

    #[test]
    fn test_parse_rejects_unknown_algorithm() {
        assert_eq!(
            parse_request("100 x"),
            Err("Invalid sorting algorithm specified.".to_string())
        );
        assert_eq!(
            parse_request("100 I"),
            Err("Invalid sorting algorithm specified.".to_string())
        );
    }

    #[test]
    fn test_nonpositive_size_rejected_before_archive_access() {
        // The message path returns Ok without touching the archive, so a
        // missing path must not error here.
        let missing = Path::new("/no/such/archive.zip");
        assert!(run_analysis(missing, 0, SortAlgorithm::Quick).is_ok());
        assert!(run_analysis(missing, -3, SortAlgorithm::Merge).is_ok());
    }
}
