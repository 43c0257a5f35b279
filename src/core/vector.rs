//! Feature vectors and cosine similarity

/// Dense feature vector for a listing or persona.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
	pub fn new(data: Vec<f64>) -> Self {
		Self(data)
	}

	/// Get raw vector
	pub fn as_slice(&self) -> &[f64] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Cosine similarity [-1.0, 1.0]
	pub fn similarity(&self, other: &Self) -> f64 {
		cosine_similarity(&self.0, &other.0)
	}
}

/// Cosine of the angle between `a` and `b`.
///
/// Zero when either vector has zero norm or the lengths disagree.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
	if a.len() != b.len() {
		tracing::warn!(
			a_len = a.len(),
			b_len = b.len(),
			"feature dimension mismatch; returning zero similarity"
		);
		return 0.0;
	}

	let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
	let norm_a = norm(a);
	let norm_b = norm(b);

	if norm_a == 0.0 || norm_b == 0.0 {
		return 0.0;
	}

	// rounding can push identical vectors a hair past 1.0
	(dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

pub fn norm(v: &[f64]) -> f64 {
	v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Right-pad with zeros up to `len`. Never truncates.
pub fn pad_to(v: &mut Vec<f64>, len: usize) {
	if v.len() < len {
		v.resize(len, 0.0);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identical_vectors_score_one() {
		let a = FeatureVector::new(vec![3.0, 1.0, 0.5]);
		assert!((a.similarity(&a) - 1.0).abs() < 1e-12);
	}

	#[test]
	fn opposite_vectors_score_minus_one() {
		let sim = cosine_similarity(&[1.0, -2.0], &[-1.0, 2.0]);
		assert!((sim + 1.0).abs() < 1e-12);
	}

	#[test]
	fn zero_norm_scores_zero() {
		assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
		assert_eq!(cosine_similarity(&[0.0], &[0.0]), 0.0);
	}

	#[test]
	fn dimension_mismatch_scores_zero() {
		assert_eq!(cosine_similarity(&[1.0, 0.0, 0.0], &[1.0, 0.0]), 0.0);
	}

	#[test]
	fn pad_never_truncates() {
		let mut v = vec![1.0, 2.0, 3.0];
		pad_to(&mut v, 2);
		assert_eq!(v, vec![1.0, 2.0, 3.0]);
		pad_to(&mut v, 5);
		assert_eq!(v, vec![1.0, 2.0, 3.0, 0.0, 0.0]);
	}
}
