//! Per-entry outcomes of a registration batch.

use serde::Serialize;

use crate::version::Version;

/// Why an entry was not installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectKind {
	/// The supplied version is not a well-formed `MAJOR.MINOR.PATCH` string.
	InvalidVersion,
	/// The name is bound to a host built-in.
	AlreadyExistsNative,
	/// The name is bound to something the ledger does not track.
	AlreadyExistsExternal,
	/// The name is owned by a different provider.
	AlreadyExistsIncompatibleLib,
	/// The same provider owns the name at a version outside the caret range.
	AlreadyExistsIncompatibleVersion,
	/// The (class, name) pair is permanently reserved.
	ReservedWord,
}

impl RejectKind {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::InvalidVersion => "INVALID_VERSION",
			Self::AlreadyExistsNative => "ALREADY_EXISTS_NATIVE",
			Self::AlreadyExistsExternal => "ALREADY_EXISTS_EXTERNAL",
			Self::AlreadyExistsIncompatibleLib => "ALREADY_EXISTS_INCOMPATIBLE_LIB",
			Self::AlreadyExistsIncompatibleVersion => "ALREADY_EXISTS_INCOMPATIBLE_VERSION",
			Self::ReservedWord => "RESERVED_WORD",
		}
	}
}

impl std::fmt::Display for RejectKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A rejected entry, with enough context to report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{kind}: cannot register `{target}.{name}` for {provider}@{version}{}", conflict_suffix(.conflicting_provider, .conflicting_version))]
pub struct Rejection {
	pub kind: RejectKind,
	/// Class name of the target.
	pub target: String,
	pub name: String,
	pub provider: String,
	/// Version as supplied by the caller, which may be malformed.
	pub version: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub conflicting_provider: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub conflicting_version: Option<Version>,
}

fn conflict_suffix(provider: &Option<String>, version: &Option<Version>) -> String {
	match (provider, version) {
		(Some(p), Some(v)) => format!(" (owned by {p}@{v})"),
		(Some(p), None) => format!(" (owned by {p})"),
		(None, Some(v)) => format!(" (existing version {v})"),
		(None, None) => String::new(),
	}
}

/// A successfully installed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Installed {
	pub name: String,
	pub version: Version,
	/// True when an earlier registration by the same provider was replaced.
	pub replaced: bool,
}

/// Outcome of one entry of an `assign` batch.
pub type Outcome = Result<Installed, Rejection>;
