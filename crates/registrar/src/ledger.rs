//! Ownership ledger keyed by target identity and member name.
//!
//! # Invariants
//!
//! - At most one [`Ownership`] record per (target, name).
//! - Records are created or overwritten, never removed while the target is alive.
//! - A target is referenced only through its [`Anchor`]; dropping the target makes its
//!   records unreachable and [`OwnershipLedger::sweep`] reclaims them.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::host::{Anchor, HostObject};
use crate::version::Version;

/// Owner and version of a registered member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ownership {
	pub provider: String,
	pub version: Version,
}

/// Identity of a target: the address of its anchor allocation.
///
/// The stored weak anchor keeps the allocation reserved, so an address cannot be reused
/// by a different target while the ledger still holds records for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(usize);

impl TargetId {
	pub fn of(anchor: &Anchor) -> Self {
		Self(anchor.as_ptr() as *const () as usize)
	}
}

struct TargetRecords {
	anchor: Anchor,
	members: FxHashMap<String, Ownership>,
}

impl TargetRecords {
	fn is_live(&self) -> bool {
		self.anchor.strong_count() > 0
	}
}

/// Side table from (target identity, name) to [`Ownership`].
#[derive(Default)]
pub struct OwnershipLedger {
	targets: FxHashMap<TargetId, TargetRecords>,
}

impl OwnershipLedger {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the record for `name` on `target`.
	pub fn get<H: HostObject + ?Sized>(&self, target: &H, name: &str) -> Option<&Ownership> {
		let records = self.targets.get(&TargetId::of(&target.anchor()))?;
		if !records.is_live() {
			return None;
		}
		records.members.get(name)
	}

	pub fn has<H: HostObject + ?Sized>(&self, target: &H, name: &str) -> bool {
		self.get(target, name).is_some()
	}

	/// Creates or overwrites the record for `name` on `target`.
	pub fn set<H: HostObject + ?Sized>(&mut self, target: &H, name: &str, record: Ownership) {
		let anchor = target.anchor();
		let id = TargetId::of(&anchor);
		let records = self.targets.entry(id).or_insert_with(|| TargetRecords {
			anchor,
			members: FxHashMap::default(),
		});
		records.members.insert(name.to_string(), record);
	}

	/// Drops the records of targets that no longer exist. Returns how many targets were
	/// reclaimed.
	pub fn sweep(&mut self) -> usize {
		let before = self.targets.len();
		self.targets.retain(|_, records| records.is_live());
		let reclaimed = before - self.targets.len();
		if reclaimed > 0 {
			tracing::trace!(reclaimed, "ledger.sweep");
		}
		reclaimed
	}

	/// Number of live targets with at least one record.
	pub fn len(&self) -> usize {
		self.targets.values().filter(|r| r.is_live()).count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl std::fmt::Debug for OwnershipLedger {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("OwnershipLedger")
			.field("targets", &self.targets.len())
			.finish()
	}
}

#[cfg(test)]
mod tests;
