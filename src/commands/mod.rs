//! # Command Implementations
//!
//! Each submodule handles one CLI command (recommend, prompt, annotate, watch).

pub mod annotate;
pub mod prompt;
pub mod recommend;
pub mod watch;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{self, MatchConfig};
use crate::core::Persona;
use crate::matching::MatchingEngine;
use crate::storage;
use crate::ui;

/// Read a persona from a JSON file.
pub fn load_persona(path: &Path) -> Result<Persona> {
	let text = fs::read_to_string(path).with_context(|| format!("Failed to read persona {}", path.display()))?;
	serde_json::from_str(&text).with_context(|| format!("Invalid persona JSON in {}", path.display()))
}

/// Load the catalog and fit an engine on it.
pub fn load_engine(catalog: Option<PathBuf>) -> Result<MatchingEngine> {
	let path = config::catalog_path(catalog);
	let start = std::time::Instant::now();

	let catalog = storage::load_catalog(&path)?;
	let engine = MatchingEngine::new(catalog, MatchConfig::default())
		.with_context(|| format!("Failed to fit catalog {}", path.display()))?;

	ui::debug(&format!(
		"Fitted {} listings ({} terms) in {:.2}s",
		engine.catalog().len(),
		engine.vectorizer().vocabulary_size(),
		start.elapsed().as_secs_f32()
	));

	Ok(engine)
}
