//! Reference-identified objects with prototype chains.

use std::any::Any;
use std::sync::Arc;

use graft_registrar::{Anchor, HostObject};
use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::error::HostError;
use crate::member::{Member, MemberFlags};
use crate::value::Value;

#[derive(Debug, Clone)]
struct Slot {
	member: Member,
	flags: MemberFlags,
}

struct ObjectInner {
	class: String,
	proto: Option<Object>,
	slots: RwLock<IndexMap<String, Slot>>,
}

/// A shared, mutable object. Clones are handles to the same object.
#[derive(Clone)]
pub struct Object(Arc<ObjectInner>);

impl Object {
	pub fn new(class: impl Into<String>, proto: Option<&Object>) -> Self {
		Self(Arc::new(ObjectInner {
			class: class.into(),
			proto: proto.cloned(),
			slots: RwLock::new(IndexMap::new()),
		}))
	}

	pub fn class(&self) -> &str {
		&self.0.class
	}

	pub fn proto(&self) -> Option<&Object> {
		self.0.proto.as_ref()
	}

	/// Returns true if both handles refer to the same object.
	pub fn ptr_eq(&self, other: &Object) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}

	/// Resolves `name` on this object or its prototype chain.
	pub fn get(&self, name: &str) -> Option<Member> {
		let mut current = Some(self);
		while let Some(object) = current {
			if let Some(slot) = object.0.slots.read().get(name) {
				return Some(slot.member.clone());
			}
			current = object.proto();
		}
		None
	}

	pub fn get_own(&self, name: &str) -> Option<Member> {
		self.0.slots.read().get(name).map(|slot| slot.member.clone())
	}

	pub fn flags(&self, name: &str) -> Option<MemberFlags> {
		self.0.slots.read().get(name).map(|slot| slot.flags)
	}

	/// Ordinary assignment. Creates an enumerable member or replaces a writable one.
	pub fn set(&self, name: &str, member: impl Into<Member>) -> Result<(), HostError> {
		let mut slots = self.0.slots.write();
		match slots.get_mut(name) {
			Some(slot) if !slot.flags.contains(MemberFlags::WRITABLE) => Err(HostError::ReadOnly {
				name: name.to_string(),
			}),
			Some(slot) => {
				slot.member = member.into();
				Ok(())
			}
			None => {
				slots.insert(
					name.to_string(),
					Slot {
						member: member.into(),
						flags: MemberFlags::DATA,
					},
				);
				Ok(())
			}
		}
	}

	/// Ordinary deletion of an own member. Deleting a missing member succeeds.
	pub fn delete(&self, name: &str) -> Result<(), HostError> {
		let mut slots = self.0.slots.write();
		match slots.get(name) {
			Some(slot) if !slot.flags.contains(MemberFlags::CONFIGURABLE) => {
				Err(HostError::NotConfigurable {
					name: name.to_string(),
				})
			}
			Some(_) => {
				slots.shift_remove(name);
				Ok(())
			}
			None => Ok(()),
		}
	}

	/// Own enumerable member names in definition order.
	pub fn keys(&self) -> Vec<String> {
		self.0
			.slots
			.read()
			.iter()
			.filter(|(_, slot)| slot.flags.contains(MemberFlags::ENUMERABLE))
			.map(|(name, _)| name.clone())
			.collect()
	}

	/// Binds `member` with explicit attributes, replacing any own binding.
	pub(crate) fn define(&self, name: &str, member: Member, flags: MemberFlags) {
		self.0
			.slots
			.write()
			.insert(name.to_string(), Slot { member, flags });
	}

	/// Looks up `name` and calls it with `this` as receiver.
	pub fn invoke(&self, name: &str, this: &Value, args: &[Value]) -> Result<Value, HostError> {
		let member = self.get(name).ok_or_else(|| HostError::NoSuchMember {
			class: self.class().to_string(),
			name: name.to_string(),
		})?;
		member.call(name, this, args)
	}
}

impl std::fmt::Debug for Object {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Object")
			.field("class", &self.0.class)
			.field("members", &self.0.slots.read().len())
			.finish()
	}
}

impl HostObject for Object {
	type Member = Member;

	fn anchor(&self) -> Anchor {
		let strong: Arc<dyn Any + Send + Sync> = self.0.clone();
		Arc::downgrade(&strong)
	}

	fn class_name(&self) -> &str {
		self.class()
	}

	fn lookup_member(&self, name: &str) -> Option<Member> {
		self.get(name)
	}

	fn has_own_member(&self, name: &str) -> bool {
		self.0.slots.read().contains_key(name)
	}

	fn define_non_enumerable_member(&self, name: &str, member: Member) {
		self.define(name, member, MemberFlags::PINNED);
	}

	fn is_native(member: &Member) -> bool {
		member.to_string().contains("[native code]")
	}
}
