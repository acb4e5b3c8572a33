//! Invoice row validation and deduplication.
//!
//! Data rows are nine comma-separated fields. A row survives the filter
//! only if its identifier is unique within the dataset and its amounts,
//! tax rates and party identifier are well formed and consistent.

mod config;
mod error;
mod filter;
pub mod row;
mod types;
mod validation;

pub use config::*;
pub use error::*;
pub use filter::*;
pub use types::*;
pub use validation::*;
