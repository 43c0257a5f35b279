//! Paired listing/persona vectors
//!
//! Layout of both vectors: `[categorical(8) | text(padded) | fit(1)]`.
//! The categorical block always comes from the persona, so it is identical
//! on both sides; only the text block and the trailing fit slot differ.

use crate::core::vector::pad_to;
use crate::core::{FeatureVector, Listing, Persona, PersonaFeatures, CATEGORICAL_LEN};
use crate::error::Result;
use crate::matching::rooms::room_count;
use crate::matching::CorpusVectorizer;

/// Persona-side inputs computed once per request.
#[derive(Debug, Clone)]
pub struct PersonaProfile {
	pub features: PersonaFeatures,
	categorical: [f64; CATEGORICAL_LEN],
	text: Vec<f64>,
}

impl PersonaProfile {
	pub fn new(persona: &Persona, vectorizer: &CorpusVectorizer) -> Result<Self> {
		let features = PersonaFeatures::parse(persona)?;
		Ok(Self {
			features,
			categorical: features.categorical(),
			text: vectorizer.transform(&persona.significant),
		})
	}
}

/// Room count minus occupants: positive means spare rooms.
pub fn room_fit(listing: &Listing, features: &PersonaFeatures) -> f64 {
	room_count(&listing.tags) as f64 - features.occupants as f64
}

/// Build `(listing_vector, persona_vector)` of equal length.
pub fn build_pair(
	listing: &Listing,
	profile: &PersonaProfile,
	vectorizer: &CorpusVectorizer,
) -> (FeatureVector, FeatureVector) {
	let mut listing_text = vectorizer.transform(&listing.combined_text());
	let mut persona_text = profile.text.clone();

	let text_len = listing_text.len().max(persona_text.len());
	pad_to(&mut listing_text, text_len);
	pad_to(&mut persona_text, text_len);

	let listing_vector = assemble(&profile.categorical, listing_text, room_fit(listing, &profile.features));
	let persona_vector = assemble(&profile.categorical, persona_text, 0.0);

	(listing_vector, persona_vector)
}

/// Convenience wrapper that parses the persona on every call.
pub fn vectorize(
	listing: &Listing,
	persona: &Persona,
	vectorizer: &CorpusVectorizer,
) -> Result<(FeatureVector, FeatureVector)> {
	let profile = PersonaProfile::new(persona, vectorizer)?;
	Ok(build_pair(listing, &profile, vectorizer))
}

fn assemble(categorical: &[f64; CATEGORICAL_LEN], text: Vec<f64>, fit: f64) -> FeatureVector {
	let mut data = Vec::with_capacity(CATEGORICAL_LEN + text.len() + 1);
	data.extend_from_slice(categorical);
	data.extend(text);
	data.push(fit);
	FeatureVector::new(data)
}
