//! Session Loader Module
//! Loads typing session CSV files with Polars and extracts typed records.

use chrono::NaiveDateTime;
use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

pub const TIMESTAMP_COL: &str = "timestamp";
pub const WORDS_COL: &str = "words";
pub const CHARS_COL: &str = "chars";
pub const ACCURACY_COL: &str = "accuracy";

const REQUIRED_COLS: [&str; 4] = [TIMESTAMP_COL, WORDS_COL, CHARS_COL, ACCURACY_COL];

/// Timestamp layout written by the practice service.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("Row {row}: timestamp '{value}' does not match %Y-%m-%d %H:%M:%S")]
    BadTimestamp { row: usize, value: String },
    #[error("No data loaded")]
    NoData,
}

/// One typing practice run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub timestamp: NaiveDateTime,
    /// Words per minute.
    pub words: f64,
    /// Characters per minute.
    pub chars: f64,
    /// Percent of keystrokes that were correct.
    pub accuracy: f64,
}

/// Handles session CSV loading with Polars.
pub struct SessionLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for SessionLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a sessions CSV using Polars.
    pub fn load_csv(&mut self, file_path: &str) -> Result<&DataFrame, LoaderError> {
        self.file_path = Some(PathBuf::from(file_path));

        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        Self::check_columns(&df)?;
        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    fn check_columns(df: &DataFrame) -> Result<(), LoaderError> {
        for required in REQUIRED_COLS {
            if df.column(required).is_err() {
                return Err(LoaderError::MissingColumn(required));
            }
        }
        Ok(())
    }

    /// Extract typed session records from the loaded DataFrame.
    pub fn extract_sessions(&self) -> Result<Vec<Session>, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;
        Self::sessions_from_dataframe(df)
    }

    /// Convert a raw DataFrame into session records.
    ///
    /// Rows with null or non-finite metric cells are skipped; a timestamp
    /// that is present but malformed aborts with an error, since that is a
    /// data-export bug worth surfacing rather than papering over.
    pub fn sessions_from_dataframe(df: &DataFrame) -> Result<Vec<Session>, LoaderError> {
        Self::check_columns(df)?;

        let timestamps = df.column(TIMESTAMP_COL)?;
        let words_col = df.column(WORDS_COL)?.cast(&DataType::Float64)?;
        let chars_col = df.column(CHARS_COL)?.cast(&DataType::Float64)?;
        let accuracy_col = df.column(ACCURACY_COL)?.cast(&DataType::Float64)?;
        let words = words_col.f64()?;
        let chars = chars_col.f64()?;
        let accuracy = accuracy_col.f64()?;

        let mut sessions = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let (Ok(ts), Some(w), Some(c), Some(a)) =
                (timestamps.get(i), words.get(i), chars.get(i), accuracy.get(i))
            else {
                continue;
            };
            if ts.is_null() || !w.is_finite() || !c.is_finite() || !a.is_finite() {
                continue;
            }

            let raw = ts.to_string().trim_matches('"').to_string();
            let timestamp = NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
                .map_err(|_| LoaderError::BadTimestamp { row: i, value: raw })?;

            sessions.push(Session {
                timestamp,
                words: w,
                chars: c,
                accuracy: a,
            });
        }
        Ok(sessions)
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Set DataFrame directly (used for async loading)
    pub fn set_dataframe(&mut self, df: DataFrame) {
        self.df = Some(df);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        df!(
            TIMESTAMP_COL => ["2026-08-07 09:15:00", "2026-08-07 09:40:00"],
            WORDS_COL => [42.0, 55.0],
            CHARS_COL => [210.0, 275.0],
            ACCURACY_COL => [96.5, 91.0]
        )
        .unwrap()
    }

    #[test]
    fn extracts_typed_sessions() {
        let sessions = SessionLoader::sessions_from_dataframe(&sample_df()).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].words, 42.0);
        assert_eq!(sessions[1].accuracy, 91.0);
        assert_eq!(sessions[0].timestamp.format("%H:%M").to_string(), "09:15");
    }

    #[test]
    fn skips_rows_with_null_metrics() {
        let df = df!(
            TIMESTAMP_COL => ["2026-08-07 09:15:00", "2026-08-07 10:00:00"],
            WORDS_COL => [Some(42.0), None],
            CHARS_COL => [210.0, 200.0],
            ACCURACY_COL => [96.5, 90.0]
        )
        .unwrap();
        let sessions = SessionLoader::sessions_from_dataframe(&df).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].words, 42.0);
    }

    #[test]
    fn rejects_malformed_timestamp() {
        let df = df!(
            TIMESTAMP_COL => ["yesterday-ish"],
            WORDS_COL => [42.0],
            CHARS_COL => [210.0],
            ACCURACY_COL => [96.5]
        )
        .unwrap();
        let err = SessionLoader::sessions_from_dataframe(&df).unwrap_err();
        assert!(matches!(err, LoaderError::BadTimestamp { row: 0, .. }));
    }

    #[test]
    fn reports_missing_column_by_name() {
        let df = df!(
            TIMESTAMP_COL => ["2026-08-07 09:15:00"],
            WORDS_COL => [42.0]
        )
        .unwrap();
        let err = SessionLoader::sessions_from_dataframe(&df).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(name) if name == CHARS_COL));
    }

    #[test]
    fn loads_csv_from_disk() {
        let path = std::env::temp_dir().join("wpm_dashboard_loader_test.csv");
        std::fs::write(
            &path,
            "timestamp,words,chars,accuracy\n\
             2026-08-07 09:15:00,42,210,96.5\n\
             2026-08-07 09:40:00,55,275,91\n",
        )
        .unwrap();

        let mut loader = SessionLoader::new();
        loader.load_csv(path.to_str().unwrap()).unwrap();
        assert_eq!(loader.get_row_count(), 2);
        assert!(loader.get_dataframe().is_some());

        let sessions = loader.extract_sessions().unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[1].words, 55.0);

        let _ = std::fs::remove_file(&path);
    }
}
