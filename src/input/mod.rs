//! Site input records, form-layer field metadata and CSV loading

mod data;
pub mod loader;

pub use data::{FeasibilityInput, InputField};
pub use loader::{load_sites, load_sites_from_reader, Site};
