//! Semantic versions and caret-range compatibility.
//!
//! Only the `MAJOR.MINOR.PATCH` core is accepted. Pre-release and build suffixes,
//! leading `v`, and leading zeros are rejected so that the textual form of a version
//! always round-trips.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error produced when a version string is not well-formed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
	#[error("empty version string")]
	Empty,
	#[error("version `{raw}` must have exactly three dot-separated components")]
	Arity { raw: String },
	#[error("version `{raw}` has an invalid {part} component `{value}`")]
	Component {
		raw: String,
		part: &'static str,
		value: String,
	},
}

/// A three-component semantic version.
///
/// Ordering is lexicographic over `(major, minor, patch)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
	pub major: u64,
	pub minor: u64,
	pub patch: u64,
}

impl Version {
	pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
		Self {
			major,
			minor,
			patch,
		}
	}

	/// Returns true if `candidate` lies within the caret range `^self`.
	///
	/// The leftmost non-zero component is pinned:
	/// - `^1.2.3` := `>=1.2.3, <2.0.0`
	/// - `^0.2.3` := `>=0.2.3, <0.3.0`
	/// - `^0.0.3` := `>=0.0.3, <0.0.4`
	pub fn caret_matches(&self, candidate: &Version) -> bool {
		if candidate < self {
			return false;
		}
		match (self.major, self.minor) {
			(0, 0) => candidate == self,
			(0, minor) => candidate.major == 0 && candidate.minor == minor,
			(major, _) => candidate.major == major,
		}
	}
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
	}
}

impl FromStr for Version {
	type Err = VersionError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		if raw.is_empty() {
			return Err(VersionError::Empty);
		}
		let mut segments = raw.split('.');
		let (Some(major), Some(minor), Some(patch), None) = (
			segments.next(),
			segments.next(),
			segments.next(),
			segments.next(),
		) else {
			return Err(VersionError::Arity {
				raw: raw.to_string(),
			});
		};
		let component = |part: &'static str, value: &str| -> Result<u64, VersionError> {
			let invalid = || VersionError::Component {
				raw: raw.to_string(),
				part,
				value: value.to_string(),
			};
			let digits_only = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
			if !digits_only || (value.len() > 1 && value.starts_with('0')) {
				return Err(invalid());
			}
			value.parse::<u64>().map_err(|_| invalid())
		};
		Ok(Self {
			major: component("major", major)?,
			minor: component("minor", minor)?,
			patch: component("patch", patch)?,
		})
	}
}

impl TryFrom<String> for Version {
	type Error = VersionError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Version> for String {
	fn from(version: Version) -> Self {
		version.to_string()
	}
}

/// Returns true iff both strings are well-formed and `new` is caret-compatible with
/// `existing`.
pub fn compatible(existing: &str, new: &str) -> bool {
	match (existing.parse::<Version>(), new.parse::<Version>()) {
		(Ok(existing), Ok(new)) => existing.caret_matches(&new),
		_ => false,
	}
}
