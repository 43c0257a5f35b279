//! Annotate command - attach service reasons and store recommendations

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::MatchArgs;
use crate::config::REASONING_MAX_ATTEMPTS;
use crate::reasoning::{self, Reasoner, ReasoningError, ReasoningRequest, RecommendationRecord};
use crate::storage;
use crate::ui;

/// Replays a reply captured from the service. Re-reading lets the file be
/// fixed up between attempts.
struct FileReasoner {
	path: PathBuf,
}

impl Reasoner for FileReasoner {
	fn explain(&self, _request: &ReasoningRequest) -> Result<String, ReasoningError> {
		fs::read_to_string(&self.path)
			.map_err(|e| ReasoningError::Service(format!("{}: {}", self.path.display(), e)))
	}
}

pub fn run(args: &MatchArgs, reply: &Path, user_id: i64, records_path: &Path) -> Result<()> {
	let persona = super::load_persona(&args.persona)?;
	let engine = super::load_engine(args.catalog.clone())?;
	let ranked = engine.recommend(&persona, args.limit)?;

	let previous = storage::load_records(records_path)?;
	let fresh = reasoning::exclude_already_recommended(&ranked, &previous, user_id);
	if fresh.len() < ranked.len() {
		ui::debug(&format!("{} listings already recommended to user {}", ranked.len() - fresh.len(), user_id));
	}

	if fresh.is_empty() {
		ui::warn("Nothing new to recommend");
		return Ok(());
	}

	let request = ReasoningRequest::new(&persona, &fresh);
	let reasoner = FileReasoner { path: reply.to_path_buf() };

	let explained = match reasoning::annotate(&reasoner, &request, &fresh, REASONING_MAX_ATTEMPTS) {
		Ok(explained) => explained,
		Err(ReasoningError::Unparsed { attempts, fragments }) => {
			ui::error(&format!("Reply could not be parsed after {} attempts", attempts));
			if let Some(last) = fragments.last() {
				ui::debug(&format!("Last reply: {}", last.trim()));
			}
			return Err(ReasoningError::Unparsed { attempts, fragments }.into());
		}
		Err(e) => return Err(e.into()),
	};

	ui::header("Recommendations");
	for (i, item) in explained.iter().enumerate() {
		println!(
			"  {} {} {}",
			format!("#{:<3}", i + 1).bright_blue().bold(),
			item.candidate.listing.name.bright_white(),
			item.reason.dimmed()
		);
	}

	let records: Vec<RecommendationRecord> = explained
		.iter()
		.map(|item| RecommendationRecord::new(user_id, item))
		.collect();
	let total = storage::append_records(records_path, &records)
		.with_context(|| format!("Failed to store records in {}", records_path.display()))?;

	println!();
	ui::success(&format!("Stored {} recommendations ({} total)", records.len(), total));

	Ok(())
}
