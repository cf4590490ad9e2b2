//! Input file module
//!
//! Locates, reads and normalizes the YAML file describing which accounts,
//! regions and filters to query.

mod loader;
mod models;
mod resolve;

pub use loader::InputLoader;
pub use models::{AccountFilterSpec, DetailedSpec, GeneralFilterSpec, TagFilter};
pub use resolve::InputFileResolver;
