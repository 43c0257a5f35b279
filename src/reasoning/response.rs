//! Parser for the explanation service's `rank:[...]reason:[...]` replies
//!
//! The service answers in loosely delimited text, not JSON. Anything that
//! does not parse cleanly is rejected as a whole so the caller can retry.

use std::collections::HashSet;

/// One ranked entry: 1-based candidate index plus its justification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedReason {
	pub index: usize,
	pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningReply {
	pub entries: Vec<RankedReason>,
}

/// Parse `text` for a request that carried `candidate_count` candidates.
///
/// Reasons are `|`-separated, or double-quoted and comma-separated when no
/// `|` appears.
pub fn parse_reasoning(text: &str, candidate_count: usize) -> Option<ReasoningReply> {
	let rank_at = find_label(text, "rank:", 0)?;
	let reason_at = find_label(text, "reason:", rank_at)?;

	let rank_body = bracketed(&text[rank_at..reason_at], false)?;
	let reason_body = bracketed(&text[reason_at..], true)?;

	let ranks = parse_ranks(rank_body, candidate_count)?;
	let reasons = parse_reasons(reason_body);
	if ranks.len() != reasons.len() {
		return None;
	}

	Some(ReasoningReply {
		entries: ranks
			.into_iter()
			.zip(reasons)
			.map(|(index, reason)| RankedReason { index, reason })
			.collect(),
	})
}

/// ASCII case-insensitive search from byte offset `from`, reporting char boundaries only.
fn find_label(text: &str, label: &str, from: usize) -> Option<usize> {
	text.char_indices().map(|(i, _)| i).skip_while(|&i| i < from).find(|&i| {
		text.get(i..i + label.len())
			.is_some_and(|window| window.eq_ignore_ascii_case(label))
	})
}

/// Contents between the first '[' and the next (or last) ']'.
fn bracketed(section: &str, to_last: bool) -> Option<&str> {
	let open = section.find('[')?;
	let rest = &section[open + 1..];
	let close = if to_last { rest.rfind(']')? } else { rest.find(']')? };
	Some(&rest[..close])
}

fn parse_ranks(body: &str, candidate_count: usize) -> Option<Vec<usize>> {
	let mut seen = HashSet::new();
	let mut ranks = Vec::new();

	for part in body.split(',') {
		let index: usize = strip_quotes(part).parse().ok()?;
		if index == 0 || index > candidate_count || !seen.insert(index) {
			return None;
		}
		ranks.push(index);
	}

	if ranks.is_empty() {
		None
	} else {
		Some(ranks)
	}
}

fn parse_reasons(body: &str) -> Vec<String> {
	let parts: Vec<String> = if body.contains('|') || !body.contains('"') {
		body.split('|').map(|s| unquote(s).to_string()).collect()
	} else {
		body.split('"')
			.skip(1)
			.step_by(2)
			.map(|s| s.trim().to_string())
			.collect()
	};

	parts.into_iter().filter(|s| !s.is_empty()).collect()
}

/// Drop one pair of enclosing double quotes; inner quotes are kept.
fn unquote(s: &str) -> &str {
	let s = s.trim();
	s.strip_prefix('"')
		.and_then(|inner| inner.strip_suffix('"'))
		.map(str::trim)
		.unwrap_or(s)
}

fn strip_quotes(s: &str) -> &str {
	s.trim().trim_matches(|c| c == '"' || c == '\'').trim()
}
