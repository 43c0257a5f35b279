//! Rental listings and the catalog snapshot they form

use serde::{Deserialize, Serialize};

use crate::config::ABSENT_DETAIL;
use crate::error::{MatchError, Result};

/// A listing as it arrives from storage: every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
	#[serde(default)]
	pub id: Option<i64>,
	#[serde(rename = "aptName", default)]
	pub name: Option<String>,
	#[serde(rename = "tagList", default)]
	pub tags: Option<Vec<String>>,
	#[serde(rename = "articleFeatureDescription", default)]
	pub feature_description: Option<String>,
	#[serde(rename = "detailDescription", default)]
	pub detail_description: Option<String>,
	#[serde(rename = "walkTime", default)]
	pub walk_minutes: Option<u32>,
	#[serde(rename = "aptParkingCountPerHousehold", default)]
	pub parking_ratio: Option<f64>,
	#[serde(rename = "studentCountPerTeacher", default)]
	pub student_teacher_ratio: Option<f64>,
	#[serde(rename = "exposureAddress", default)]
	pub address: Option<String>,
	#[serde(rename = "monthlyManagementCost", default)]
	pub monthly_cost: Option<i64>,
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub image_url: Option<String>,
	#[serde(default)]
	pub is_deleted: Option<bool>,
}

/// A validated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
	pub name: String,
	pub tags: Vec<String>,
	pub feature_description: String,
	/// `None` and the "없음" sentinel both mean absent.
	pub detail_description: Option<String>,
	pub walk_minutes: u32,
	pub parking_ratio: f64,

	// Display only, never scored.
	pub id: Option<i64>,
	pub student_teacher_ratio: Option<f64>,
	pub address: Option<String>,
	pub monthly_cost: Option<i64>,
	pub url: Option<String>,
	pub image_url: Option<String>,
}

impl Listing {
	/// Minimal listing with only the scoring fields populated.
	pub fn new(
		name: impl Into<String>,
		tags: Vec<String>,
		feature_description: impl Into<String>,
		walk_minutes: u32,
		parking_ratio: f64,
	) -> Self {
		Self {
			id: None,
			address: None,
			monthly_cost: None,
			url: None,
			image_url: None,
			student_teacher_ratio: None,
			name: name.into(),
			tags,
			feature_description: feature_description.into(),
			detail_description: None,
			walk_minutes,
			parking_ratio,
		}
	}

	pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
		self.detail_description = Some(detail.into());
		self
	}

	/// Detail description, unless it is missing or the absent sentinel.
	pub fn detail(&self) -> Option<&str> {
		self.detail_description
			.as_deref()
			.filter(|detail| *detail != ABSENT_DETAIL)
	}

	/// Free text used for term weighting: tags, feature description, then detail if present.
	pub fn combined_text(&self) -> String {
		let mut text = self.tags.join(" ");
		text.push(' ');
		text.push_str(&self.feature_description);
		if let Some(detail) = self.detail() {
			text.push(' ');
			text.push_str(detail);
		}
		text
	}

	fn from_record(index: usize, record: ListingRecord) -> Result<Self> {
		let label = record
			.name
			.clone()
			.unwrap_or_else(|| format!("id={}", record.id.unwrap_or_default()));
		let missing = |field: &'static str| MatchError::MalformedListing {
			index,
			name: label.clone(),
			field,
		};

		let name = record.name.clone().ok_or_else(|| missing("name"))?;
		let tags = record.tags.ok_or_else(|| missing("tag list"))?;
		let feature_description = record
			.feature_description
			.ok_or_else(|| missing("feature description"))?;
		let walk_minutes = record.walk_minutes.ok_or_else(|| missing("walk time"))?;
		let parking_ratio = record.parking_ratio.ok_or_else(|| missing("parking ratio"))?;

		Ok(Self {
			id: record.id,
			address: record.address,
			monthly_cost: record.monthly_cost,
			url: record.url,
			image_url: record.image_url,
			student_teacher_ratio: record.student_teacher_ratio,
			name,
			tags,
			feature_description,
			detail_description: record.detail_description,
			walk_minutes,
			parking_ratio,
		})
	}
}

/// Ordered, validated set of listings. Order is the catalog's natural order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
	listings: Vec<Listing>,
}

impl Catalog {
	pub fn new(listings: Vec<Listing>) -> Self {
		Self { listings }
	}

	/// Validate raw records, failing on the first one missing a required field.
	pub fn from_records(records: Vec<ListingRecord>) -> Result<Self> {
		let listings = records
			.into_iter()
			.enumerate()
			.map(|(index, record)| Listing::from_record(index, record))
			.collect::<Result<Vec<_>>>()?;
		Ok(Self { listings })
	}

	pub fn listings(&self) -> &[Listing] {
		&self.listings
	}

	pub fn len(&self) -> usize {
		self.listings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.listings.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
		self.listings.iter()
	}
}
