//! Best-effort room count from listing tags
//!
//! Tags are free-form crawler output, so this is a heuristic: the first tag
//! mentioning a room is searched for a Korean cardinal, and anything
//! unrecognised counts as a single room.

const ROOM_MARKER: char = '방';
const DEFAULT_ROOMS: u32 = 1;

/// Checked in order; the first substring found wins.
const ROOM_COUNTS: &[(&str, u32)] = &[
	("한개", 1),
	("두개", 2),
	("세개", 3),
	("네개", 4),
	("다섯개", 5),
];

pub fn room_count(tags: &[String]) -> u32 {
	let Some(tag) = tags.iter().find(|tag| tag.contains(ROOM_MARKER)) else {
		return DEFAULT_ROOMS;
	};

	ROOM_COUNTS
		.iter()
		.find(|(word, _)| tag.contains(word))
		.map(|&(_, count)| count)
		.unwrap_or(DEFAULT_ROOMS)
}
