/// Errors raised by the reference host when members are read, written, or called.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
	#[error("{class}.{name} is not defined")]
	NoSuchMember { class: String, name: String },
	#[error("{name} is not a function")]
	NotCallable { name: String },
	#[error("cannot assign to read-only member {name}")]
	ReadOnly { name: String },
	#[error("cannot delete non-configurable member {name}")]
	NotConfigurable { name: String },
	#[error("{method} expects {expected}, got {got}")]
	Type {
		method: &'static str,
		expected: &'static str,
		got: &'static str,
	},
}
