//! # Watch Command
//!
//! Monitor the catalog file and re-rank whenever its content changes.
//! Uses debounced filesystem events; the snapshot cache skips refits
//! when a save leaves the listings untouched.

use anyhow::{Context, Result};
use notify_debouncer_mini::notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::cli::MatchArgs;
use crate::config::{self, MatchConfig};
use crate::core::Persona;
use crate::matching::SnapshotCache;
use crate::storage;
use crate::ui;

pub fn run(args: &MatchArgs) -> Result<()> {
	let persona = super::load_persona(&args.persona)?;
	let catalog_path = config::catalog_path(args.catalog.clone());
	let catalog_path = catalog_path.canonicalize().unwrap_or(catalog_path);
	let limit = args.limit;

	let mut cache = SnapshotCache::new(MatchConfig::default());
	rerank(&mut cache, &catalog_path, &persona, limit)?;

	// Editors often replace the file, so watch its directory instead
	let watch_dir = catalog_path
		.parent()
		.filter(|p| !p.as_os_str().is_empty())
		.map(Path::to_path_buf)
		.unwrap_or_else(|| PathBuf::from("."));

	let (change_tx, change_rx) = channel::<()>();
	let target = catalog_path.clone();

	let mut debouncer = new_debouncer(Duration::from_secs(1), move |result: DebounceEventResult| match result {
		Ok(events) => {
			if events.iter().any(|event| event.path == target) {
				let _ = change_tx.send(());
			}
		}
		Err(e) => ui::error(&format!("Watch error: {:?}", e)),
	})
	.context("Failed to create file watcher")?;

	debouncer
		.watcher()
		.watch(&watch_dir, RecursiveMode::NonRecursive)
		.context("Failed to watch catalog directory")?;

	ui::success(&format!("Watching {} (Ctrl+C to stop)", catalog_path.display()));
	println!();

	while change_rx.recv().is_ok() {
		if let Err(e) = rerank(&mut cache, &catalog_path, &persona, limit) {
			ui::error(&format!("{:#}", e));
		}
	}

	Ok(())
}

fn rerank(cache: &mut SnapshotCache, path: &Path, persona: &Persona, limit: usize) -> Result<()> {
	let catalog = storage::load_catalog(path)?;
	let (engine, refit) = cache.refresh(catalog)?;

	if !refit {
		ui::debug("Catalog content unchanged");
		return Ok(());
	}

	let ranked = engine.recommend(persona, limit)?;
	let fingerprint = cache.fingerprint().map(|fp| fp.short().to_string()).unwrap_or_default();

	ui::header(&format!("Snapshot {}", fingerprint));
	if ranked.is_empty() {
		ui::warn("No eligible listings");
	}
	for (i, candidate) in ranked.iter().enumerate() {
		println!("  #{:<3} {} {:.0}%", i + 1, candidate.listing.name, candidate.score * 100.0);
	}

	Ok(())
}
