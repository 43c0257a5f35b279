//! Content fingerprint of a catalog snapshot

use xxhash_rust::xxh3::Xxh3;

use crate::core::Catalog;

const FIELD_SEP: &[u8] = &[0x1f];
const RECORD_SEP: &[u8] = &[0x1e];

/// xxh3 digest over every field of every listing, display fields included,
/// in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogFingerprint(String);

impl CatalogFingerprint {
	pub fn compute(catalog: &Catalog) -> Self {
		let mut hasher = Xxh3::new();

		for listing in catalog.iter() {
			hasher.update(listing.name.as_bytes());
			hasher.update(FIELD_SEP);
			for tag in &listing.tags {
				hasher.update(tag.as_bytes());
				hasher.update(FIELD_SEP);
			}
			hasher.update(listing.feature_description.as_bytes());
			hasher.update(FIELD_SEP);
			if let Some(detail) = listing.detail() {
				hasher.update(detail.as_bytes());
			}
			hasher.update(FIELD_SEP);
			hasher.update(&listing.walk_minutes.to_le_bytes());
			hasher.update(&listing.parking_ratio.to_bits().to_le_bytes());

			let id = listing.id.map(i64::to_le_bytes);
			let ratio = listing.student_teacher_ratio.map(|r| r.to_bits().to_le_bytes());
			let cost = listing.monthly_cost.map(i64::to_le_bytes);
			hash_opt(&mut hasher, id.as_ref().map(|b| b.as_slice()));
			hash_opt(&mut hasher, listing.url.as_deref().map(str::as_bytes));
			hash_opt(&mut hasher, listing.image_url.as_deref().map(str::as_bytes));
			hash_opt(&mut hasher, ratio.as_ref().map(|b| b.as_slice()));
			hash_opt(&mut hasher, listing.address.as_deref().map(str::as_bytes));
			hash_opt(&mut hasher, cost.as_ref().map(|b| b.as_slice()));
			hasher.update(RECORD_SEP);
		}

		Self(format!("{:016x}", hasher.digest()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn short(&self) -> &str {
		&self.0[..8]
	}
}

/// Tags presence so `None` and `Some("")` differ.
fn hash_opt(hasher: &mut Xxh3, value: Option<&[u8]>) {
	match value {
		Some(bytes) => {
			hasher.update(&[1]);
			hasher.update(bytes);
		}
		None => hasher.update(&[0]),
	}
	hasher.update(FIELD_SEP);
}

impl std::fmt::Display for CatalogFingerprint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::Listing;

	fn catalog(walk: u32) -> Catalog {
		Catalog::new(vec![Listing::new("a", vec!["방두개".into()], "남향", walk, 1.0)])
	}

	#[test]
	fn stable_for_equal_catalogs() {
		assert_eq!(CatalogFingerprint::compute(&catalog(5)), CatalogFingerprint::compute(&catalog(5)));
	}

	#[test]
	fn changes_with_scored_fields() {
		assert_ne!(CatalogFingerprint::compute(&catalog(5)), CatalogFingerprint::compute(&catalog(6)));
	}

	#[test]
	fn changes_with_display_fields() {
		let base = catalog(5);
		let mut relinked = base.listings().to_vec();
		relinked[0].id = Some(2);
		relinked[0].url = Some("https://new".into());
		assert_ne!(
			CatalogFingerprint::compute(&base),
			CatalogFingerprint::compute(&Catalog::new(relinked))
		);

		let mut missing_vs_empty = base.listings().to_vec();
		missing_vs_empty[0].address = Some(String::new());
		assert_ne!(
			CatalogFingerprint::compute(&base),
			CatalogFingerprint::compute(&Catalog::new(missing_vs_empty))
		);
	}

	#[test]
	fn renders_sixteen_hex_chars() {
		let fp = CatalogFingerprint::compute(&catalog(5));
		assert_eq!(fp.as_str().len(), 16);
		assert_eq!(fp.short().len(), 8);
	}
}
