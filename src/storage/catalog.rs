//! JSON-Lines catalog import

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::{MISSING_IMAGE, MISSING_URL};
use crate::core::{Catalog, ListingRecord};

/// Outcome of reading a catalog file.
#[derive(Debug, Default)]
pub struct CatalogLoad {
	pub records: Vec<ListingRecord>,
	/// Soft-deleted records
	pub deleted: usize,
	/// Records without a usable link or image
	pub unlinked: usize,
}

impl CatalogLoad {
	pub fn skipped(&self) -> usize {
		self.deleted + self.unlinked
	}
}

/// Read raw records, dropping soft-deleted and unlinked ones.
pub fn read_records(path: &Path) -> Result<CatalogLoad> {
	let file = File::open(path).with_context(|| format!("Failed to open catalog {}", path.display()))?;
	let mut load = CatalogLoad::default();

	for (line_no, line) in BufReader::new(file).lines().enumerate() {
		let line = line.context("Failed to read catalog")?;
		if line.trim().is_empty() {
			continue;
		}

		let record: ListingRecord = serde_json::from_str(&line)
			.with_context(|| format!("Invalid listing on line {}", line_no + 1))?;

		if record.is_deleted.unwrap_or(false) {
			load.deleted += 1;
		} else if is_unlinked(&record) {
			load.unlinked += 1;
		} else {
			load.records.push(record);
		}
	}

	Ok(load)
}

/// Read and validate a catalog in one step.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
	let load = read_records(path)?;
	if load.skipped() > 0 {
		crate::ui::debug(&format!(
			"Skipped {} listings ({} deleted, {} without link)",
			load.skipped(),
			load.deleted,
			load.unlinked
		));
	}
	Ok(Catalog::from_records(load.records)?)
}

fn is_unlinked(record: &ListingRecord) -> bool {
	record.url.as_deref() == Some(MISSING_URL) || record.image_url.as_deref() == Some(MISSING_IMAGE)
}
