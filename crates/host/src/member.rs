//! Members bound on host objects.

use std::fmt;
use std::sync::Arc;

use crate::error::HostError;
use crate::value::Value;

/// Signature of a callable member: receiver, then arguments.
pub type CallFn = dyn Fn(&Value, &[Value]) -> Result<Value, HostError> + Send + Sync;

/// Signature of a built-in implemented by the host itself.
pub type NativeCall = fn(&Value, &[Value]) -> Result<Value, HostError>;

bitflags::bitflags! {
	/// Attributes of a member slot.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct MemberFlags: u8 {
		/// Listed by [`Object::keys`](crate::Object::keys).
		const ENUMERABLE = 1 << 0;
		/// Replaceable through [`Object::set`](crate::Object::set).
		const WRITABLE = 1 << 1;
		/// Removable through [`Object::delete`](crate::Object::delete).
		const CONFIGURABLE = 1 << 2;
	}
}

impl MemberFlags {
	/// Attributes of a plain assignment.
	pub const DATA: Self = Self::all();
	/// Attributes of host built-ins.
	pub const BUILTIN: Self = Self::WRITABLE.union(Self::CONFIGURABLE);
	/// Attributes of registrar-installed members.
	pub const PINNED: Self = Self::empty();
}

/// A host built-in.
#[derive(Clone, Copy)]
pub struct NativeFn {
	pub name: &'static str,
	call: NativeCall,
}

impl NativeFn {
	pub const fn new(name: &'static str, call: NativeCall) -> Self {
		Self { name, call }
	}
}

/// A callable supplied from outside the host, with the source text it prints as.
#[derive(Clone)]
pub struct Function {
	source: Arc<str>,
	call: Arc<CallFn>,
}

impl Function {
	pub fn new<F>(source: impl Into<Arc<str>>, call: F) -> Self
	where
		F: Fn(&Value, &[Value]) -> Result<Value, HostError> + Send + Sync + 'static,
	{
		Self {
			source: source.into(),
			call: Arc::new(call),
		}
	}

	pub fn source(&self) -> &str {
		&self.source
	}

	/// Returns true if both handles share one implementation.
	pub fn same_as(&self, other: &Function) -> bool {
		Arc::ptr_eq(&self.call, &other.call)
	}
}

/// Anything that can be bound under a member name.
#[derive(Clone)]
pub enum Member {
	Native(NativeFn),
	Function(Function),
	Value(Value),
}

impl Member {
	/// Calls the member with `this` as receiver.
	pub fn call(&self, name: &str, this: &Value, args: &[Value]) -> Result<Value, HostError> {
		match self {
			Self::Native(native) => (native.call)(this, args),
			Self::Function(function) => (function.call)(this, args),
			Self::Value(_) => Err(HostError::NotCallable {
				name: name.to_string(),
			}),
		}
	}
}

impl From<Function> for Member {
	fn from(function: Function) -> Self {
		Self::Function(function)
	}
}

impl From<Value> for Member {
	fn from(value: Value) -> Self {
		Self::Value(value)
	}
}

/// Canonical textual form, as a script would see it when printing the member.
impl fmt::Display for Member {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Native(native) => write!(f, "function {}() {{ [native code] }}", native.name),
			Self::Function(function) => f.write_str(function.source()),
			Self::Value(value) => write!(f, "{value}"),
		}
	}
}

impl fmt::Debug for Member {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Native(native) => f.debug_tuple("Native").field(&native.name).finish(),
			Self::Function(function) => f.debug_tuple("Function").field(&function.source()).finish(),
			Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
		}
	}
}
