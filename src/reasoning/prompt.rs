//! Request payload for the explanation service

use serde::{Deserialize, Serialize};

use crate::config::PROMPT_DESCRIPTION_CHARS;
use crate::core::{Listing, Persona};
use crate::matching::RankedCandidate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaSummary {
	pub person_count: String,
	pub period: String,
	pub identity: String,
	pub car: String,
	pub child: String,
	pub significant: String,
}

impl From<&Persona> for PersonaSummary {
	fn from(persona: &Persona) -> Self {
		Self {
			person_count: persona.person_count.clone(),
			period: persona.period.clone(),
			identity: persona.identity.clone(),
			car: persona.car.clone(),
			child: persona.child.clone(),
			significant: persona.significant.clone(),
		}
	}
}

/// Trimmed view of a candidate; `index` is what the service ranks by (1-based).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProjection {
	pub index: usize,
	pub name: String,
	pub description: String,
	pub tags: Vec<String>,
	pub walk_minutes: u32,
	pub student_teacher_ratio: Option<f64>,
	pub parking_ratio: f64,
}

impl CandidateProjection {
	pub fn new(index: usize, listing: &Listing) -> Self {
		Self {
			index,
			name: listing.name.clone(),
			description: truncate_chars(&describe(listing), PROMPT_DESCRIPTION_CHARS),
			tags: listing.tags.clone(),
			walk_minutes: listing.walk_minutes,
			student_teacher_ratio: listing.student_teacher_ratio,
			parking_ratio: listing.parking_ratio,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningRequest {
	pub persona: PersonaSummary,
	pub candidates: Vec<CandidateProjection>,
}

impl ReasoningRequest {
	pub fn new(persona: &Persona, candidates: &[RankedCandidate<'_>]) -> Self {
		Self {
			persona: PersonaSummary::from(persona),
			candidates: candidates
				.iter()
				.enumerate()
				.map(|(i, candidate)| CandidateProjection::new(i + 1, candidate.listing))
				.collect(),
		}
	}

	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}

fn describe(listing: &Listing) -> String {
	match listing.detail() {
		Some(detail) => format!("{} {}", listing.feature_description, detail),
		None => listing.feature_description.clone(),
	}
}

/// Cut at a character boundary; Hangul is multi-byte.
fn truncate_chars(text: &str, max_chars: usize) -> String {
	match text.char_indices().nth(max_chars) {
		Some((byte, _)) => text[..byte].to_string(),
		None => text.to_string(),
	}
}
