//! Project updates shipped with the site.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

const UPDATES_JSON: &str = include_str!("../../data/updates.json");

#[derive(Debug, Error)]
pub enum ContentError {
	#[error("malformed updates file: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("duplicate update id: {0}")]
	DuplicateId(String),
}

/// One inline piece of an update summary.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SummaryNode {
	Text {
		text: String,
	},
	Link {
		text: String,
		href: String,
		#[serde(default, rename = "isExternal")]
		is_external: bool,
	},
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
	pub id: String,
	pub date: NaiveDate,
	pub display_date: String,
	pub title: String,
	pub summary: Vec<SummaryNode>,
}

/// Parses an update list and orders it newest first.
///
/// The sort is stable, so entries sharing a date keep their file order.
pub fn parse_updates(json: &str) -> Result<Vec<ProjectUpdate>, ContentError> {
	let mut updates: Vec<ProjectUpdate> = serde_json::from_str(json)?;

	let mut seen = HashSet::new();
	for update in &updates {
		if !seen.insert(update.id.as_str()) {
			return Err(ContentError::DuplicateId(update.id.clone()));
		}
	}

	updates.sort_by(|a, b| b.date.cmp(&a.date));
	Ok(updates)
}

static UPDATES: LazyLock<Vec<ProjectUpdate>> = LazyLock::new(|| match parse_updates(UPDATES_JSON) {
	Ok(updates) => {
		info!("Loaded {} project updates", updates.len());
		updates
	}
	Err(err) => {
		warn!("Ignoring bundled updates: {}", err);
		Vec::new()
	}
});

/// Bundled updates, newest first.
pub fn project_updates() -> &'static [ProjectUpdate] {
	&UPDATES
}

pub fn latest_update() -> Option<&'static ProjectUpdate> {
	project_updates().first()
}
