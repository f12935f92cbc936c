//! Manifest-driven installation of catalogue functions onto realm prototypes.
//!
//! A manifest names, per built-in class, the members a provider wants to attach:
//!
//! ```toml
//! provider = "eslib"
//! version = "1.0.0"
//!
//! [extensions]
//! Array = ["chunk", "compact", "head"]
//! ```
//!
//! Catalogue functions take the receiver as their first argument. They are wrapped into
//! methods, so `[1, 2].head()` calls `head([1, 2])`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use graft_registrar::config::{ConfigError, read_to_string};
use graft_registrar::{Registrar, Rejection};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::HostError;
use crate::member::{Function, Member};
use crate::realm::Realm;
use crate::value::Value;

/// What one provider wants installed, and under which version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallManifest {
	pub provider: String,
	/// Kept as text so malformed versions surface as per-member rejections.
	pub version: String,
	/// Class name to member names.
	#[serde(default)]
	pub extensions: BTreeMap<String, Vec<String>>,
}

impl InstallManifest {
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		Self::from_toml_str(&read_to_string(path)?)
	}
}

/// A catalogue function: receiver first, then the call arguments.
pub type CatalogFn = Arc<dyn Fn(&[Value]) -> Result<Value, HostError> + Send + Sync>;

/// Named functions available for installation.
#[derive(Clone, Default)]
pub struct Catalog {
	entries: FxHashMap<String, CatalogFn>,
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert<F>(&mut self, name: impl Into<String>, f: F)
	where
		F: Fn(&[Value]) -> Result<Value, HostError> + Send + Sync + 'static,
	{
		self.entries.insert(name.into(), Arc::new(f));
	}

	pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
	where
		F: Fn(&[Value]) -> Result<Value, HostError> + Send + Sync + 'static,
	{
		self.insert(name, f);
		self
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns `name` wrapped as a method that passes its receiver first.
	pub fn method(&self, name: &str) -> Option<Function> {
		let f = Arc::clone(self.entries.get(name)?);
		let source = format!("function {name}(...args) {{ [catalog code] }}");
		Some(Function::new(source, move |this, args| {
			let mut full = Vec::with_capacity(args.len() + 1);
			full.push(this.clone());
			full.extend_from_slice(args);
			f(&full)
		}))
	}
}

impl std::fmt::Debug for Catalog {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut names: Vec<_> = self.entries.keys().collect();
		names.sort();
		f.debug_struct("Catalog").field("entries", &names).finish()
	}
}

/// A (class, member) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
	pub class: String,
	pub name: String,
}

/// Result of [`install`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallReport {
	pub installed: Vec<Placement>,
	pub rejected: Vec<Rejection>,
	/// Requested members the catalogue does not provide.
	pub missing: Vec<Placement>,
	/// Requested classes the realm does not have.
	pub unknown_classes: Vec<String>,
}

impl InstallReport {
	/// Returns true if every requested member was installed.
	pub fn is_clean(&self) -> bool {
		self.rejected.is_empty() && self.missing.is_empty() && self.unknown_classes.is_empty()
	}
}

/// Installs every member named in `manifest` that the catalogue provides.
///
/// Skipped members are logged as warnings and listed in the report; nothing here
/// aborts early.
pub fn install(
	registrar: &Registrar,
	realm: &Realm,
	manifest: &InstallManifest,
	catalog: &Catalog,
) -> InstallReport {
	let mut report = InstallReport::default();

	for (class, names) in &manifest.extensions {
		let Some(proto) = realm.prototype(class) else {
			tracing::warn!(provider = %manifest.provider, class = %class, "install: unknown class, skipping");
			report.unknown_classes.push(class.clone());
			continue;
		};

		let mut batch = Vec::with_capacity(names.len());
		for name in names {
			match catalog.method(name) {
				Some(method) => batch.push((name.as_str(), Member::Function(method))),
				None => {
					tracing::warn!(provider = %manifest.provider, class = %class, member = %name, "install: not in catalogue, skipping");
					report.missing.push(Placement {
						class: class.clone(),
						name: name.clone(),
					});
				}
			}
		}

		for outcome in registrar.assign(proto, batch, &manifest.provider, &manifest.version) {
			match outcome {
				Ok(installed) => report.installed.push(Placement {
					class: class.clone(),
					name: installed.name,
				}),
				Err(rejection) => {
					tracing::warn!(kind = %rejection.kind, "install: skipping member: {rejection}");
					report.rejected.push(rejection);
				}
			}
		}
	}

	tracing::debug!(
		provider = %manifest.provider,
		installed = report.installed.len(),
		rejected = report.rejected.len(),
		missing = report.missing.len(),
		"install.done"
	);
	report
}

#[cfg(test)]
mod tests;
