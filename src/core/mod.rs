//! Core domain types

pub mod hash;
pub mod listing;
pub mod persona;
pub mod vector;

pub use hash::CatalogFingerprint;
pub use listing::{Catalog, Listing, ListingRecord};
pub use persona::{Identity, Persona, PersonaFeatures, CATEGORICAL_LEN};
pub use vector::{cosine_similarity, FeatureVector};
