//! Recommend command - rank listings for a persona

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::cli::MatchArgs;
use crate::core::Listing;
use crate::matching::RankedCandidate;
use crate::ui;

#[derive(Serialize)]
struct JsonMatch<'a> {
	rank: usize,
	score: f64,
	#[serde(flatten)]
	listing: &'a Listing,
}

pub fn run(args: &MatchArgs, json: bool, open_first: bool) -> Result<()> {
	let search_start = std::time::Instant::now();

	let persona = super::load_persona(&args.persona)?;
	let engine = super::load_engine(args.catalog.clone())?;
	let ranked = engine.recommend(&persona, args.limit)?;

	if json {
		let rows: Vec<JsonMatch<'_>> = ranked
			.iter()
			.enumerate()
			.map(|(i, candidate)| JsonMatch {
				rank: i + 1,
				score: candidate.score,
				listing: candidate.listing,
			})
			.collect();
		println!("{}", serde_json::to_string_pretty(&rows)?);
		return Ok(());
	}

	if ranked.is_empty() {
		ui::warn("No eligible listings found");
		return Ok(());
	}

	ui::header("Results");
	for (i, candidate) in ranked.iter().enumerate() {
		print_candidate(i + 1, candidate);
	}

	println!();
	ui::success(&format!(
		"{} of {} listings in {:.2}s",
		ranked.len(),
		engine.catalog().len(),
		search_start.elapsed().as_secs_f32()
	));

	if open_first {
		match ranked[0].listing.url.as_deref() {
			Some(url) => {
				if let Err(e) = open::that(url) {
					ui::warn(&format!("Failed to open: {}", e));
				}
			}
			None => ui::warn("Best match has no link"),
		}
	}

	Ok(())
}

fn print_candidate(rank: usize, candidate: &RankedCandidate<'_>) {
	let listing = candidate.listing;
	let name = match listing.url.as_deref() {
		Some(url) => ui::url_link(&listing.name, url, 40),
		None => listing.name.clone(),
	};
	let percentage = (candidate.score * 100.0).round() as i32;

	println!(
		"  {} {} {} {}",
		format!("#{:<3}", rank).bright_blue().bold(),
		name.bright_white(),
		format!("{}%", percentage).bright_green(),
		format!("· {}분 · 주차 {:.2}", listing.walk_minutes, listing.parking_ratio).dimmed()
	);
}
