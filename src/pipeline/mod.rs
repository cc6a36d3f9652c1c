//! Pipeline entry points for labeler operations.
//!
//! - `run_fetcher`: Pull interaction records from the platform export API
//! - `run_labeler`: Derive `tech_support` for every fetched record
//! - `run_validate`: Check configuration and the raw snapshot

pub mod fetch;
pub mod label;
pub mod validate;

pub use fetch::run_fetcher;
pub use label::run_labeler;
pub use validate::run_validate;
