//! Recommendation record file format and I/O

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::reasoning::RecommendationRecord;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize, Deserialize)]
struct RecordFile {
	version: String,
	records: Vec<RecommendationRecord>,
}

/// Save records to disk, replacing the file
pub fn save_records(path: &Path, records: &[RecommendationRecord]) -> Result<()> {
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent).context("Failed to create records directory")?;
	}

	let file = RecordFile {
		version: VERSION.to_string(),
		records: records.to_vec(),
	};
	let bytes = rmp_serde::to_vec(&file).context("Failed to serialize records")?;
	fs::write(path, bytes).context("Failed to write records")?;

	Ok(())
}

/// Load records from disk; a missing file holds no records
pub fn load_records(path: &Path) -> Result<Vec<RecommendationRecord>> {
	if !path.exists() {
		return Ok(Vec::new());
	}

	let bytes = fs::read(path).context("Failed to read records")?;
	let file: RecordFile = rmp_serde::from_slice(&bytes).context("Failed to deserialize records")?;

	if file.version != VERSION {
		crate::ui::debug(&format!("Records written by v{}, reading with v{}", file.version, VERSION));
	}

	Ok(file.records)
}

/// Append to the existing file, returning the new total
pub fn append_records(path: &Path, new_records: &[RecommendationRecord]) -> Result<usize> {
	let mut records = load_records(path)?;
	records.extend_from_slice(new_records);
	save_records(path, &records)?;
	Ok(records.len())
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::Utc;

	fn record(user_id: i64, name: &str) -> RecommendationRecord {
		RecommendationRecord {
			user_id,
			listing_id: Some(3),
			listing_name: name.into(),
			score: 0.93,
			reason: "역과 가까움".into(),
			created_at: Utc::now(),
		}
	}

	#[test]
	fn missing_file_is_empty() {
		let dir = tempfile::tempdir().unwrap();
		assert!(load_records(&dir.path().join("none.msgpack")).unwrap().is_empty());
	}

	#[test]
	fn append_accumulates_across_calls() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("records.msgpack");

		assert_eq!(append_records(&path, &[record(1, "a")]).unwrap(), 1);
		assert_eq!(append_records(&path, &[record(2, "b")]).unwrap(), 2);

		let loaded = load_records(&path).unwrap();
		assert_eq!(loaded[0].listing_name, "a");
		assert_eq!(loaded[1].user_id, 2);
		assert_eq!(loaded[1].reason, "역과 가까움");
	}

	#[test]
	fn corrupt_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("records.msgpack");
		fs::write(&path, b"not msgpack").unwrap();
		assert!(load_records(&path).is_err());
	}
}
