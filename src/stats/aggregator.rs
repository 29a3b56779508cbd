//! Session Aggregator Module
//! Buckets typing sessions by time window and keeps per-bucket maxima.

use crate::data::{LabeledSeries, SeriesError, Session};
use chrono::{Datelike, Duration, NaiveDateTime};
use rayon::prelude::*;
use std::collections::HashMap;

/// Metric tracked per typing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Words,
    Chars,
    Accuracy,
}

pub const ALL_METRICS: [Metric; 3] = [Metric::Words, Metric::Chars, Metric::Accuracy];

impl Metric {
    /// Dataset label shown on the chart.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Words => "Words Per Minute",
            Metric::Chars => "Characters Per Minute",
            Metric::Accuracy => "Accuracy (%)",
        }
    }

    fn value_of(&self, session: &Session) -> f64 {
        match self {
            Metric::Words => session.words,
            Metric::Chars => session.chars,
            Metric::Accuracy => session.accuracy,
        }
    }
}

/// Aggregation window, relative to an explicit reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::Daily => "Today",
            Period::Weekly => "Last 7 Days",
            Period::Monthly => "Last 30 Days",
        }
    }

    fn contains(&self, timestamp: NaiveDateTime, now: NaiveDateTime) -> bool {
        match self {
            Period::Daily => timestamp.date() == now.date(),
            Period::Weekly => timestamp <= now && now - timestamp <= Duration::days(7),
            Period::Monthly => timestamp <= now && now - timestamp <= Duration::days(30),
        }
    }

    /// Bucket label for a session: `HH:MM` for daily, zero-padded day of
    /// month for the longer windows. Zero padding keeps lexicographic label
    /// order chronological.
    fn bucket(&self, timestamp: NaiveDateTime) -> String {
        match self {
            Period::Daily => timestamp.format("%H:%M").to_string(),
            Period::Weekly | Period::Monthly => format!("{:02}", timestamp.day()),
        }
    }
}

/// Reduces session lists into chartable labeled series.
pub struct StatsAggregator;

impl StatsAggregator {
    /// Aggregate one metric: per bucket, the best value inside the window.
    pub fn aggregate(
        sessions: &[Session],
        metric: Metric,
        period: Period,
        now: NaiveDateTime,
    ) -> Result<LabeledSeries, SeriesError> {
        let mut best: HashMap<String, f64> = HashMap::new();
        for session in sessions {
            if !period.contains(session.timestamp, now) {
                continue;
            }
            let value = metric.value_of(session);
            let slot = best.entry(period.bucket(session.timestamp)).or_insert(value);
            if value > *slot {
                *slot = value;
            }
        }
        LabeledSeries::from_pairs(best)
    }

    /// Aggregate every metric in parallel for one window.
    pub fn aggregate_all(
        sessions: &[Session],
        period: Period,
        now: NaiveDateTime,
    ) -> Result<HashMap<Metric, LabeledSeries>, SeriesError> {
        ALL_METRICS
            .into_par_iter()
            .map(|metric| {
                Self::aggregate(sessions, metric, period, now).map(|series| (metric, series))
            })
            .collect()
    }

    /// The demo month shown before any data is loaded: one bar per day,
    /// values climbing 30 through 59.
    pub fn placeholder_month() -> Result<LabeledSeries, SeriesError> {
        let pairs = (1..=30u32).map(|day| (format!("{day:02}"), (29 + day) as f64));
        LabeledSeries::from_pairs(pairs)
    }
}
