//! Attaching service-written reasons to ranked candidates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Listing;
use crate::matching::RankedCandidate;
use crate::reasoning::prompt::ReasoningRequest;
use crate::reasoning::response::parse_reasoning;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReasoningError {
	#[error("reasoning service failed: {0}")]
	Service(String),

	#[error("reasoning reply unparseable after {attempts} attempts")]
	Unparsed { attempts: usize, fragments: Vec<String> },
}

/// The external explanation service.
pub trait Reasoner {
	fn explain(&self, request: &ReasoningRequest) -> Result<String, ReasoningError>;
}

/// A candidate re-ordered by the service, with its reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Explained<'a> {
	pub candidate: RankedCandidate<'a>,
	pub reason: String,
}

/// Ask `reasoner` until a reply parses, at most `max_attempts` times.
///
/// Service errors are returned immediately; only unparseable replies are retried.
pub fn annotate<'a, R: Reasoner + ?Sized>(
	reasoner: &R,
	request: &ReasoningRequest,
	candidates: &[RankedCandidate<'a>],
	max_attempts: usize,
) -> Result<Vec<Explained<'a>>, ReasoningError> {
	let mut fragments = Vec::new();

	for attempt in 1..=max_attempts {
		let text = reasoner.explain(request)?;

		if let Some(reply) = parse_reasoning(&text, candidates.len()) {
			tracing::debug!(attempt, entries = reply.entries.len(), "parsed reasoning reply");
			return Ok(reply
				.entries
				.into_iter()
				.map(|entry| Explained {
					candidate: candidates[entry.index - 1].clone(),
					reason: entry.reason,
				})
				.collect());
		}

		tracing::warn!(attempt, max_attempts, "unparseable reasoning reply; retrying");
		fragments.push(text);
	}

	Err(ReasoningError::Unparsed {
		attempts: max_attempts,
		fragments,
	})
}

/// A persisted recommendation for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
	pub user_id: i64,
	pub listing_id: Option<i64>,
	pub listing_name: String,
	pub score: f64,
	pub reason: String,
	pub created_at: DateTime<Utc>,
}

impl RecommendationRecord {
	pub fn new(user_id: i64, explained: &Explained<'_>) -> Self {
		Self {
			user_id,
			listing_id: explained.candidate.listing.id,
			listing_name: explained.candidate.listing.name.clone(),
			score: explained.candidate.score,
			reason: explained.reason.clone(),
			created_at: Utc::now(),
		}
	}

	fn refers_to(&self, listing: &Listing) -> bool {
		match (self.listing_id, listing.id) {
			(Some(a), Some(b)) => a == b,
			_ => self.listing_name == listing.name,
		}
	}
}

/// Candidates not yet recommended to `user_id`, in their original order.
pub fn exclude_already_recommended<'a>(
	candidates: &[RankedCandidate<'a>],
	records: &[RecommendationRecord],
	user_id: i64,
) -> Vec<RankedCandidate<'a>> {
	let previous: Vec<&RecommendationRecord> = records.iter().filter(|r| r.user_id == user_id).collect();

	candidates
		.iter()
		.filter(|candidate| !previous.iter().any(|r| r.refers_to(candidate.listing)))
		.cloned()
		.collect()
}
