//! Classification of an existing binding at (target, name).

use crate::host::HostObject;
use crate::ledger::{Ownership, OwnershipLedger};

/// What currently occupies a member name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
	/// Nothing is bound, directly or through inheritance.
	Absent,
	/// An untracked host built-in. Detection is heuristic.
	Native,
	/// Something untracked that does not look like a built-in.
	Foreign,
	/// The ledger has a record for this exact key.
	Owned(Ownership),
}

/// Classifies the binding of `name` on `target`.
///
/// The ledger takes precedence over the native heuristic: a member registered through
/// the registrar stays [`Binding::Owned`] even if its textual form looks built-in.
pub fn classify<H: HostObject + ?Sized>(
	ledger: &OwnershipLedger,
	target: &H,
	name: &str,
) -> Binding {
	let Some(member) = target.lookup_member(name) else {
		return Binding::Absent;
	};
	if let Some(record) = ledger.get(target, name) {
		return Binding::Owned(record.clone());
	}
	if H::is_native(&member) {
		Binding::Native
	} else {
		Binding::Foreign
	}
}
