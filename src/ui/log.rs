//! Unified logging system

use colored::*;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
                        ____ _ __
   _________  ____  ____ / __/(_) /_
  / ___/ __ \/ __ \/ __ `__ \/ / __/
 / /  / /_/ / /_/ / / / / / / / /_
/_/   \____/\____/_/ /_/ /_/_/\__/  "#;

const SLOGANS: &[&str] = &[
	"Ten minutes to the station or bust",
	"TF-IDF, but make it cozy",
	"Parking included, feelings not guaranteed",
	"We read the listing so you don't have to",
	"Cosine of the angle between you and home",
	"방두개, no roommates",
	"Deduplicated, like your landlord's excuses",
	"Every apartment is 'sunny' until proven otherwise",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::rng().random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

/// Verbose-only diagnostics. Written to stderr so machine-readable stdout stays clean.
pub fn debug(msg: &str) {
	if Log::is_verbose() {
		eprintln!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}

/// Clickable label (OSC 8 terminal hyperlink)
pub fn url_link(label: &str, url: &str, max_chars: usize) -> String {
	let display = if label.chars().count() > max_chars {
		let head: String = label.chars().take(max_chars.saturating_sub(3)).collect();
		format!("{}...", head)
	} else {
		label.to_string()
	};

	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, display)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn link_wraps_label_in_osc8() {
		let link = url_link("래미안", "https://example.com/1", 20);
		assert!(link.starts_with("\x1b]8;;https://example.com/1"));
		assert!(link.contains("래미안"));
	}

	#[test]
	fn long_labels_are_shortened_by_chars() {
		let link = url_link("가나다라마바사", "u", 5);
		assert!(link.contains("가나..."));
	}
}
