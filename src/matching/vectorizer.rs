//! TF-IDF term weighting fitted over a listing corpus.
//!
//! The vocabulary and inverse document frequencies are learned once by
//! [`CorpusVectorizer::fit`] and never change afterwards, so a fitted
//! vectorizer can be shared between threads and reused for every request
//! against the same catalog snapshot.
//!
//! ```text
//! tfidf(t, d) = count(t, d) × idf(t)
//! idf(t)      = ln((1 + n) / (1 + df(t))) + 1
//! ```
//!
//! Each transformed vector is L2-normalized.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::Catalog;
use crate::error::{MatchError, Result};

/// Runs of two or more word characters.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Frozen TF-IDF model.
#[derive(Debug, Clone)]
pub struct CorpusVectorizer {
	/// Term -> column, columns assigned in lexicographic term order.
	vocabulary: HashMap<String, usize>,
	idf: Vec<f64>,
}

impl CorpusVectorizer {
	/// Learn vocabulary and idf weights from `documents`.
	///
	/// # Errors
	///
	/// [`MatchError::EmptyCorpus`] when there are no documents or none of them
	/// contains a single term.
	pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self> {
		let n_docs = documents.len();
		let mut doc_freq: HashMap<String, usize> = HashMap::new();

		for doc in documents {
			let mut terms = tokenize(doc.as_ref());
			terms.sort_unstable();
			terms.dedup();
			for term in terms {
				*doc_freq.entry(term).or_insert(0) += 1;
			}
		}

		if doc_freq.is_empty() {
			return Err(MatchError::EmptyCorpus { documents: n_docs });
		}

		let mut terms: Vec<(String, usize)> = doc_freq.into_iter().collect();
		terms.sort_unstable_by(|a, b| a.0.cmp(&b.0));

		let n = n_docs as f64;
		let idf = terms
			.iter()
			.map(|(_, df)| ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0)
			.collect();
		let vocabulary = terms
			.into_iter()
			.enumerate()
			.map(|(column, (term, _))| (term, column))
			.collect();

		tracing::debug!(documents = n_docs, "fitted term weights");

		Ok(Self { vocabulary, idf })
	}

	/// Fit over the combined text of every listing in `catalog`.
	pub fn fit_catalog(catalog: &Catalog) -> Result<Self> {
		let documents: Vec<String> = catalog.iter().map(|listing| listing.combined_text()).collect();
		let vectorizer = Self::fit(&documents)?;
		tracing::debug!(
			listings = catalog.len(),
			vocabulary = vectorizer.vocabulary_size(),
			"fitted catalog vectorizer"
		);
		Ok(vectorizer)
	}

	/// Project `text` onto the fitted vocabulary. Unknown terms are dropped.
	///
	/// Always returns a vector of length [`Self::vocabulary_size`]; it is all
	/// zeros when `text` shares no term with the corpus.
	pub fn transform(&self, text: &str) -> Vec<f64> {
		let mut row = vec![0.0; self.idf.len()];

		for term in tokenize(text) {
			if let Some(&column) = self.vocabulary.get(&term) {
				row[column] += 1.0;
			}
		}

		for (value, idf) in row.iter_mut().zip(&self.idf) {
			*value *= idf;
		}

		let norm = crate::core::vector::norm(&row);
		if norm > 0.0 {
			for value in &mut row {
				*value /= norm;
			}
		}

		row
	}

	pub fn vocabulary_size(&self) -> usize {
		self.idf.len()
	}

	/// Inverse document frequency of `term`, if it is in the vocabulary.
	pub fn idf(&self, term: &str) -> Option<f64> {
		self.vocabulary.get(term).map(|&column| self.idf[column])
	}
}

/// Lowercased terms of `text`, in order of appearance, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
	let lowered = text.to_lowercase();
	TOKEN
		.find_iter(&lowered)
		.map(|m| m.as_str().to_string())
		.collect()
}
