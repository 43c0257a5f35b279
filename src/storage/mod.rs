//! File-backed collaborators: catalog import and recommendation records

pub mod catalog;
pub mod records;

pub use catalog::{load_catalog, read_records, CatalogLoad};
pub use records::{append_records, load_records, save_records};
