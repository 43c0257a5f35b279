//! # roomfit
//!
//! Content-based rental listing recommendations. A catalog snapshot is
//! fitted with TF-IDF, a renter persona is turned into a vector of the
//! same shape, and eligible listings are ranked by cosine similarity.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod matching;
pub mod reasoning;
pub mod storage;
pub mod ui;

pub use crate::core::{Catalog, Listing, ListingRecord, Persona};
pub use crate::error::{MatchError, Result};
pub use crate::matching::{MatchingEngine, RankedCandidate};
