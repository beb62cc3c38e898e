// NaN filtering for numeric sequences

pub mod config;
pub mod errors;
pub mod filter;
pub mod logging;
pub mod report;

pub use errors::Error;
pub use filter::{FilterOptions, filter_nan, filter_nan_with};
pub use report::{NanReporter, SilentReporter, SlogReporter};

pub type Result<T> = std::result::Result<T, Error>;
