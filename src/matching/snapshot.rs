//! Cached engine, refitted only when the catalog content changes

use std::sync::Arc;

use crate::config::MatchConfig;
use crate::core::{Catalog, CatalogFingerprint};
use crate::error::Result;
use crate::matching::MatchingEngine;

/// Holds the engine fitted on the most recent catalog snapshot.
///
/// The catalog owner calls [`SnapshotCache::refresh`] whenever it may have
/// changed; request handlers clone the `Arc` from [`SnapshotCache::current`].
#[derive(Debug, Default)]
pub struct SnapshotCache {
	config: MatchConfig,
	current: Option<(CatalogFingerprint, Arc<MatchingEngine>)>,
}

impl SnapshotCache {
	pub fn new(config: MatchConfig) -> Self {
		Self { config, current: None }
	}

	pub fn current(&self) -> Option<Arc<MatchingEngine>> {
		self.current.as_ref().map(|(_, engine)| Arc::clone(engine))
	}

	pub fn fingerprint(&self) -> Option<&CatalogFingerprint> {
		self.current.as_ref().map(|(fp, _)| fp)
	}

	/// Returns the engine for `catalog` and whether a refit was needed.
	///
	/// On a fit error the previous snapshot is kept.
	pub fn refresh(&mut self, catalog: Catalog) -> Result<(Arc<MatchingEngine>, bool)> {
		let fingerprint = CatalogFingerprint::compute(&catalog);

		if let Some((cached, engine)) = &self.current {
			if *cached == fingerprint {
				tracing::debug!(fingerprint = fingerprint.short(), "catalog unchanged; reusing snapshot");
				return Ok((Arc::clone(engine), false));
			}
		}

		let engine = Arc::new(MatchingEngine::new(catalog, self.config)?);
		tracing::info!(
			fingerprint = fingerprint.short(),
			listings = engine.catalog().len(),
			vocabulary = engine.vectorizer().vocabulary_size(),
			"refitted catalog snapshot"
		);
		self.current = Some((fingerprint, Arc::clone(&engine)));
		Ok((engine, true))
	}
}
