//! Data module - Series types and session CSV loading

mod loader;
mod series;

pub use loader::{LoaderError, Session, SessionLoader};
pub use series::{LabeledSeries, SeriesError, SortedSeries};
