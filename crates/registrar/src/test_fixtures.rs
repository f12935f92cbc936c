//! Minimal in-crate host used by unit tests.
//!
//! Members are plain source strings; anything containing `[native code]` counts as a
//! built-in, mirroring how real hosts print their intrinsics.

use std::any::Any;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::host::{Anchor, HostObject};

pub(crate) const NATIVE_PUSH: &str = "function push() { [native code] }";

struct Inner {
	class: String,
	parent: Option<TestTarget>,
	members: RwLock<FxHashMap<String, String>>,
}

#[derive(Clone)]
pub(crate) struct TestTarget(Arc<Inner>);

impl TestTarget {
	pub(crate) fn new(class: &str) -> Self {
		Self(Arc::new(Inner {
			class: class.to_string(),
			parent: None,
			members: RwLock::new(FxHashMap::default()),
		}))
	}

	pub(crate) fn with_parent(class: &str, parent: &TestTarget) -> Self {
		Self(Arc::new(Inner {
			class: class.to_string(),
			parent: Some(parent.clone()),
			members: RwLock::new(FxHashMap::default()),
		}))
	}

	/// Binds a member without going through the registrar.
	pub(crate) fn put(&self, name: &str, source: &str) {
		self.0.members.write().insert(name.to_string(), source.to_string());
	}

	pub(crate) fn own(&self, name: &str) -> Option<String> {
		self.0.members.read().get(name).cloned()
	}
}

impl HostObject for TestTarget {
	type Member = String;

	fn anchor(&self) -> Anchor {
		let strong: Arc<dyn Any + Send + Sync> = self.0.clone();
		Arc::downgrade(&strong)
	}

	fn class_name(&self) -> &str {
		&self.0.class
	}

	fn lookup_member(&self, name: &str) -> Option<String> {
		if let Some(member) = self.own(name) {
			return Some(member);
		}
		self.0.parent.as_ref()?.lookup_member(name)
	}

	fn has_own_member(&self, name: &str) -> bool {
		self.0.members.read().contains_key(name)
	}

	fn define_non_enumerable_member(&self, name: &str, member: String) {
		self.put(name, &member);
	}

	fn is_native(member: &String) -> bool {
		member.contains("[native code]")
	}
}
