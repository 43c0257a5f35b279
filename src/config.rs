//! Application configuration and constants

use std::path::PathBuf;

// === Eligibility ===
pub const MAX_WALK_MINUTES: u32 = 10;
/// Exclusive lower bound: a listing needs strictly more parking than this.
pub const MIN_PARKING_RATIO: f64 = 0.0;

// === Ranking ===
pub const DEFAULT_TOP_N: usize = 100;

// === Catalog Sentinels ===
pub const ABSENT_DETAIL: &str = "없음";
pub const MISSING_URL: &str = "없음";
pub const MISSING_IMAGE: &str = "이미지 없음";
pub const DEFAULT_CATALOG: &str = "apartment_info.jsonl";
pub const CATALOG_ENV: &str = "ROOMFIT_CATALOG";

// === Reasoning Service ===
pub const PROMPT_DESCRIPTION_CHARS: usize = 200;
pub const REASONING_MAX_ATTEMPTS: usize = 3;

// === Storage ===
pub const RECORDS_FILE: &str = "recommendations.msgpack";

/// Hard eligibility thresholds applied before scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
	/// Inclusive upper bound on walking time to transit.
	pub max_walk_minutes: u32,
	/// Exclusive lower bound on parking spaces per household.
	pub min_parking_ratio: f64,
}

impl Default for MatchConfig {
	fn default() -> Self {
		Self {
			max_walk_minutes: MAX_WALK_MINUTES,
			min_parking_ratio: MIN_PARKING_RATIO,
		}
	}
}

/// Resolve the catalog file: explicit flag, then ROOMFIT_CATALOG, then the working directory.
pub fn catalog_path(explicit: Option<PathBuf>) -> PathBuf {
	if let Some(path) = explicit {
		crate::ui::debug(&format!("Using catalog: {}", path.display()));
		return path;
	}

	if let Ok(env_path) = std::env::var(CATALOG_ENV) {
		if !env_path.trim().is_empty() {
			crate::ui::debug(&format!("Using {}: {}", CATALOG_ENV, env_path));
			return PathBuf::from(env_path);
		}
	}

	PathBuf::from(DEFAULT_CATALOG)
}
