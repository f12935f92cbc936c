//! Capability queries the registrar needs from a host object model.
//!
//! The registrar never reflects over objects directly. Everything it learns about a
//! target, and the single mutation it performs, goes through [`HostObject`].

use std::any::Any;
use std::sync::Weak;

/// Weak identity handle for a target.
///
/// Holding an anchor never keeps the target alive; the ledger uses it to tell live
/// targets from dropped ones.
pub type Anchor = Weak<dyn Any + Send + Sync>;

/// A shared, reference-identified object that can receive new members.
pub trait HostObject {
	/// Implementation value attached under a member name.
	type Member;

	/// Returns the weak identity handle of this object.
	///
	/// Two handles to the same underlying object must return anchors pointing at the
	/// same allocation.
	fn anchor(&self) -> Anchor;

	/// Returns the class name used for reserved-name lookups (e.g. `Array`).
	fn class_name(&self) -> &str;

	/// Resolves `name`, following inheritance, and returns the bound member if any.
	fn lookup_member(&self, name: &str) -> Option<Self::Member>;

	/// Returns true if `name` is bound directly on this object.
	fn has_own_member(&self, name: &str) -> bool;

	/// Binds `member` under `name` as a non-enumerable, non-deletable member.
	///
	/// Replaces an existing own binding. Ordinary assignment and deletion on the host
	/// must not be able to change members bound through this call.
	fn define_non_enumerable_member(&self, name: &str, member: Self::Member);

	/// Best-effort check for host built-ins.
	///
	/// Implementations typically inspect the canonical textual form of the member.
	/// False positives and false negatives are possible.
	fn is_native(member: &Self::Member) -> bool;
}
