//! Matching engine: eligibility, de-duplication, scoring and top-N selection

use std::cmp::Ordering;
use std::collections::HashSet;

use rayon::prelude::*;

use crate::config::MatchConfig;
use crate::core::{Catalog, Listing, ListingRecord, Persona};
use crate::error::Result;
use crate::matching::builder::{build_pair, PersonaProfile};
use crate::matching::CorpusVectorizer;

/// A scored listing. Transient; persisting it is the caller's business.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate<'a> {
	/// Cosine similarity in [-1.0, 1.0]
	pub score: f64,
	pub listing: &'a Listing,
}

/// Immutable snapshot of a catalog together with the vectorizer fitted on it.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
	catalog: Catalog,
	vectorizer: CorpusVectorizer,
	config: MatchConfig,
}

impl MatchingEngine {
	/// Fit on `catalog`. Fails with `EmptyCorpus` for an empty catalog.
	pub fn new(catalog: Catalog, config: MatchConfig) -> Result<Self> {
		let vectorizer = CorpusVectorizer::fit_catalog(&catalog)?;
		Ok(Self { catalog, vectorizer, config })
	}

	/// Validate raw storage records, then fit.
	pub fn from_records(records: Vec<ListingRecord>, config: MatchConfig) -> Result<Self> {
		Self::new(Catalog::from_records(records)?, config)
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn vectorizer(&self) -> &CorpusVectorizer {
		&self.vectorizer
	}

	pub fn config(&self) -> MatchConfig {
		self.config
	}

	/// Hard pre-scoring rules: close to transit and some parking.
	pub fn is_eligible(&self, listing: &Listing) -> bool {
		listing.walk_minutes <= self.config.max_walk_minutes
			&& listing.parking_ratio > self.config.min_parking_ratio
	}

	/// Eligible listings, first occurrence of each name only, in catalog order.
	pub fn shortlist(&self) -> Vec<&Listing> {
		let mut seen_names = HashSet::new();
		self.catalog
			.iter()
			.filter(|listing| self.is_eligible(listing))
			.filter(|&listing| seen_names.insert(listing.name.as_str()))
			.collect()
	}

	/// Up to `top_n` distinct listings ordered by similarity to `persona`.
	///
	/// Ties keep catalog order. Fewer than `top_n` eligible listings are
	/// returned as-is.
	pub fn recommend(&self, persona: &Persona, top_n: usize) -> Result<Vec<RankedCandidate<'_>>> {
		let profile = PersonaProfile::new(persona, &self.vectorizer)?;
		let shortlist = self.shortlist();

		let mut ranked: Vec<RankedCandidate<'_>> = shortlist
			.par_iter()
			.map(|&listing| {
				let (listing_vector, persona_vector) = build_pair(listing, &profile, &self.vectorizer);
				RankedCandidate {
					score: listing_vector.similarity(&persona_vector),
					listing,
				}
			})
			.collect();

		// stable: equal scores stay in catalog order
		ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
		ranked.truncate(top_n);

		tracing::debug!(
			catalog = self.catalog.len(),
			shortlisted = shortlist.len(),
			returned = ranked.len(),
			"ranked listings"
		);

		Ok(ranked)
	}
}
