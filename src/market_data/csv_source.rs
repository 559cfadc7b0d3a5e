use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::Deserialize;

use super::source::{FetchError, PriceHistorySource};

/// One row of a `Date,Close` history file
#[derive(Debug, Deserialize)]
struct CloseRow {
    #[serde(rename = "Date")]
    #[allow(dead_code)] // Only used to check the column exists
    date: String,
    #[serde(rename = "Close")]
    close: f64,
}

/// Offline price history: one `<TICKER>.csv` per symbol in a directory.
#[derive(Debug, Clone)]
pub struct CsvPriceHistory {
    dir: PathBuf,
}

impl CsvPriceHistory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, ticker: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", ticker.trim().to_uppercase()))
    }

    fn read_closes(path: &Path) -> Result<Vec<f64>, FetchError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| FetchError::provider(format!("{}: {}", path.display(), e)))?;

        let mut closes = Vec::new();
        for (line, result) in reader.deserialize::<CloseRow>().enumerate() {
            let row = result.map_err(|e| {
                FetchError::provider(format!("{} row {}: {}", path.display(), line + 1, e))
            })?;
            closes.push(row.close);
        }
        Ok(closes)
    }
}

impl PriceHistorySource for CsvPriceHistory {
    fn daily_closes(&self, ticker: &str) -> Result<Vec<f64>, FetchError> {
        if ticker.trim().is_empty() {
            return Err(FetchError::not_found(ticker));
        }
        let path = self.path_for(ticker);
        if !path.is_file() {
            return Err(FetchError::not_found(ticker));
        }
        let closes = Self::read_closes(&path)?;
        if closes.is_empty() {
            return Err(FetchError::not_found(ticker));
        }
        tracing::debug!(ticker, rows = closes.len(), path = %path.display(), "loaded closes");
        Ok(closes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_closes_in_file_order() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("SPY.csv"),
            "Date,Close\n2024-01-02,470.5\n2024-01-03,468.8\n2024-01-04,467.3\n",
        )
        .unwrap();

        let source = CsvPriceHistory::new(dir.path());
        let closes = source.daily_closes("spy").unwrap();
        assert_eq!(closes, vec![470.5, 468.8, 467.3]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let source = CsvPriceHistory::new(dir.path());
        assert_eq!(
            source.daily_closes("NOPE"),
            Err(FetchError::not_found("NOPE"))
        );
    }

    #[test]
    fn malformed_row_is_provider_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("BAD.csv"), "Date,Close\n2024-01-02,abc\n").unwrap();
        let source = CsvPriceHistory::new(dir.path());
        assert!(matches!(
            source.daily_closes("BAD"),
            Err(FetchError::Provider { .. })
        ));
    }
}
