//! Names that can never be registered.
//!
//! The ledger and the host's own map types are reached through `get`, `has`, and `set`.
//! Shadowing those on the root object or on the map classes would redirect the
//! registrar's own bookkeeping.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Built-in reserved (class, name) pairs.
pub const DEFAULT_RESERVED: &[(&str, &str)] = &[
	("Object", "get"),
	("Object", "has"),
	("Object", "set"),
	("Map", "get"),
	("Map", "has"),
	("Map", "set"),
	("WeakMap", "get"),
	("WeakMap", "has"),
	("WeakMap", "set"),
];

/// One reserved (class, name) pair, as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservedEntry {
	pub class: String,
	pub name: String,
}

/// Fixed set of reserved (class, name) pairs.
///
/// Built once before the registrar is created; there is no way to change it later.
#[derive(Debug, Clone)]
pub struct ReservedNames {
	by_class: FxHashMap<String, FxHashSet<String>>,
}

impl ReservedNames {
	/// Returns the default set extended with `extra`.
	pub fn with_extra<'a>(extra: impl IntoIterator<Item = &'a ReservedEntry>) -> Self {
		let mut by_class: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();
		let defaults = DEFAULT_RESERVED.iter().copied();
		let extra = extra
			.into_iter()
			.map(|entry| (entry.class.as_str(), entry.name.as_str()));
		for (class, name) in defaults.chain(extra) {
			by_class
				.entry(class.to_string())
				.or_default()
				.insert(name.to_string());
		}
		Self { by_class }
	}

	pub fn contains(&self, class: &str, name: &str) -> bool {
		self.by_class
			.get(class)
			.is_some_and(|names| names.contains(name))
	}

	pub fn len(&self) -> usize {
		self.by_class.values().map(|names| names.len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for ReservedNames {
	fn default() -> Self {
		Self::with_extra(std::iter::empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let reserved = ReservedNames::default();
		assert!(reserved.contains("Object", "get"));
		assert!(reserved.contains("WeakMap", "set"));
		assert!(!reserved.contains("Array", "get"));
		assert!(!reserved.contains("Object", "double"));
		assert_eq!(reserved.len(), DEFAULT_RESERVED.len());
	}

	#[test]
	fn test_extra_entries_extend_defaults() {
		let extra = [ReservedEntry {
			class: "Array".into(),
			name: "ledger".into(),
		}];
		let reserved = ReservedNames::with_extra(&extra);
		assert!(reserved.contains("Array", "ledger"));
		assert!(reserved.contains("Object", "get"));
		assert_eq!(reserved.len(), DEFAULT_RESERVED.len() + 1);
	}
}
