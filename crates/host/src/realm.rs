//! The set of built-in prototypes providers extend.

mod natives;

use crate::member::{Member, MemberFlags, NativeFn};
use crate::object::Object;

/// Built-in prototypes of one host instance.
///
/// `Array.prototype` and `String.prototype` inherit from `Object.prototype`.
#[derive(Debug, Clone)]
pub struct Realm {
	object: Object,
	array: Object,
	string: Object,
}

impl Realm {
	pub fn new() -> Self {
		let object = prototype("Object", None, natives::OBJECT);
		let array = prototype("Array", Some(&object), natives::ARRAY);
		let string = prototype("String", Some(&object), natives::STRING);
		Self {
			object,
			array,
			string,
		}
	}

	pub fn object(&self) -> &Object {
		&self.object
	}

	pub fn array(&self) -> &Object {
		&self.array
	}

	pub fn string(&self) -> &Object {
		&self.string
	}

	/// Returns the prototype for a class name.
	pub fn prototype(&self, class: &str) -> Option<&Object> {
		self.prototypes().find(|proto| proto.class() == class)
	}

	pub fn prototypes(&self) -> impl Iterator<Item = &Object> {
		[&self.object, &self.array, &self.string].into_iter()
	}
}

impl Default for Realm {
	fn default() -> Self {
		Self::new()
	}
}

fn prototype(class: &str, parent: Option<&Object>, natives: &[NativeFn]) -> Object {
	let proto = Object::new(class, parent);
	for native in natives {
		proto.define(native.name, Member::Native(*native), MemberFlags::BUILTIN);
	}
	proto
}

#[cfg(test)]
mod tests;
