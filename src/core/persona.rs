//! Renter personas and their categorical features

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Markers that turn a period label into the maximum stay.
const LONG_STAY_MARKERS: &[&str] = &["한달", "이상"];
const LONG_STAY_WEEKS: u32 = 4;

const HAS_CAR: &str = "차 있음";
const HAS_CHILD: &str = "아이 있음";

/// Length of [`PersonaFeatures::categorical`].
pub const CATEGORICAL_LEN: usize = 8;

/// User-supplied intent, as labelled by the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
	/// e.g. "2명", "4명 이상"
	pub person_count: String,
	/// e.g. "2주", "한달 이상"
	pub period: String,
	/// e.g. "직장인"
	pub identity: String,
	/// "차 있음" / "차 없음"
	pub car: String,
	/// "아이 있음" / "아이 없음"
	pub child: String,
	/// Free-text "what matters to me"
	pub significant: String,
}

/// Closed set of identity categories, in feature order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
	Student,
	OfficeWorker,
	JobSeeker,
	Other,
}

impl Identity {
	pub const ALL: [Identity; 4] = [
		Identity::Student,
		Identity::OfficeWorker,
		Identity::JobSeeker,
		Identity::Other,
	];

	pub fn label(self) -> &'static str {
		match self {
			Identity::Student => "학생",
			Identity::OfficeWorker => "직장인",
			Identity::JobSeeker => "취준생",
			Identity::Other => "기타",
		}
	}
}

/// Numeric view of a persona's categorical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaFeatures {
	pub occupants: u32,
	pub stay_weeks: u32,
	/// Indexed like [`Identity::ALL`]. Several may be set at once.
	pub identities: [bool; 4],
	pub has_car: bool,
	pub has_child: bool,
}

impl PersonaFeatures {
	pub fn parse(persona: &Persona) -> Result<Self> {
		Ok(Self {
			occupants: parse_occupants(&persona.person_count)?,
			stay_weeks: parse_stay_weeks(&persona.period)?,
			identities: Identity::ALL.map(|id| persona.identity.contains(id.label())),
			has_car: persona.car == HAS_CAR,
			has_child: persona.child == HAS_CHILD,
		})
	}

	/// `[occupants, stay, student, worker, seeker, other, car, child]`
	pub fn categorical(&self) -> [f64; CATEGORICAL_LEN] {
		let flag = |b: bool| if b { 1.0 } else { 0.0 };
		let [student, worker, seeker, other] = self.identities.map(flag);
		[
			self.occupants as f64,
			self.stay_weeks as f64,
			student,
			worker,
			seeker,
			other,
			flag(self.has_car),
			flag(self.has_child),
		]
	}
}

/// "3명 이상" -> 3
pub fn parse_occupants(label: &str) -> Result<u32> {
	leading_integer(label).ok_or_else(|| MatchError::MalformedPersona {
		field: "person_count",
		value: label.to_string(),
	})
}

/// "한달 이상" -> 4, "2주" -> 2
pub fn parse_stay_weeks(label: &str) -> Result<u32> {
	if LONG_STAY_MARKERS.iter().any(|marker| label.contains(marker)) {
		return Ok(LONG_STAY_WEEKS);
	}
	leading_integer(label).ok_or_else(|| MatchError::MalformedPersona {
		field: "period",
		value: label.to_string(),
	})
}

fn leading_integer(label: &str) -> Option<u32> {
	let trimmed = label.trim_start();
	let end = trimmed
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(trimmed.len());
	trimmed[..end].parse().ok()
}
