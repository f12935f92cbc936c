//! The registration engine.
//!
//! # Role
//!
//! [`Registrar::assign`] decides, entry by entry, whether a provider may attach a member
//! to a target, then performs the attachment and records ownership.
//!
//! # Gate order
//!
//! 1. Version must parse.
//! 2. Existing binding: native, foreign, owned by another provider, or owned by the
//!    same provider at an incompatible version all reject.
//! 3. Reserved (class, name) pairs reject, even when step 2 passed.
//! 4. Commit.
//!
//! # Invariants
//!
//! - One ledger lock is held for a whole batch, so batches are linearizable.
//! - A rejected entry never touches the target or the ledger.
//! - A failing entry never stops the rest of the batch.

use parking_lot::Mutex;

use crate::config::RegistrarConfig;
use crate::detect::{Binding, classify};
use crate::error::{Installed, Outcome, RejectKind, Rejection};
use crate::host::HostObject;
use crate::ledger::{Ownership, OwnershipLedger};
use crate::reserved::ReservedNames;
use crate::version::Version;

/// Ownership-aware installer of members onto shared targets.
#[derive(Debug, Default)]
pub struct Registrar {
	ledger: Mutex<OwnershipLedger>,
	reserved: ReservedNames,
}

/// Per-call context shared by every entry of a batch.
struct Request<'a> {
	class: &'a str,
	provider: &'a str,
	raw_version: &'a str,
	version: Option<Version>,
}

impl Request<'_> {
	fn reject(&self, kind: RejectKind, name: &str) -> Rejection {
		Rejection {
			kind,
			target: self.class.to_string(),
			name: name.to_string(),
			provider: self.provider.to_string(),
			version: self.raw_version.to_string(),
			conflicting_provider: None,
			conflicting_version: None,
		}
	}
}

impl Registrar {
	/// Creates a registrar with the default reserved names.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registrar with an explicit reserved set.
	pub fn with_reserved(reserved: ReservedNames) -> Self {
		Self {
			ledger: Mutex::new(OwnershipLedger::new()),
			reserved,
		}
	}

	pub fn from_config(config: &RegistrarConfig) -> Self {
		Self::with_reserved(ReservedNames::with_extra(&config.reserved))
	}

	pub fn reserved(&self) -> &ReservedNames {
		&self.reserved
	}

	/// Returns the current owner of `name` on `target`.
	pub fn ownership<H: HostObject + ?Sized>(&self, target: &H, name: &str) -> Option<Ownership> {
		self.ledger.lock().get(target, name).cloned()
	}

	/// Attaches each `(name, member)` entry to `target` on behalf of `provider`.
	///
	/// Returns one outcome per entry, in input order. Re-running an identical successful
	/// call succeeds again and rebinds the member.
	pub fn assign<H, N, I>(&self, target: &H, members: I, provider: &str, version: &str) -> Vec<Outcome>
	where
		H: HostObject + ?Sized,
		N: AsRef<str>,
		I: IntoIterator<Item = (N, H::Member)>,
	{
		let request = Request {
			class: target.class_name(),
			provider,
			raw_version: version,
			version: version.parse().ok(),
		};

		let mut ledger = self.ledger.lock();
		ledger.sweep();

		members
			.into_iter()
			.map(|(name, member)| {
				let name = name.as_ref();
				let outcome = self.assign_one(&mut ledger, target, &request, name, member);
				if let Err(rejection) = &outcome {
					tracing::trace!(
						class = request.class,
						member = name,
						provider,
						kind = %rejection.kind,
						"registrar.reject"
					);
				}
				outcome
			})
			.collect()
	}

	fn assign_one<H>(
		&self,
		ledger: &mut OwnershipLedger,
		target: &H,
		request: &Request<'_>,
		name: &str,
		member: H::Member,
	) -> Outcome
	where
		H: HostObject + ?Sized,
	{
		let Some(version) = request.version else {
			return Err(request.reject(RejectKind::InvalidVersion, name));
		};

		let replaced = match classify(ledger, target, name) {
			Binding::Absent => false,
			Binding::Native => return Err(request.reject(RejectKind::AlreadyExistsNative, name)),
			Binding::Foreign => return Err(request.reject(RejectKind::AlreadyExistsExternal, name)),
			Binding::Owned(existing) if existing.provider != request.provider => {
				return Err(Rejection {
					conflicting_provider: Some(existing.provider),
					conflicting_version: Some(existing.version),
					..request.reject(RejectKind::AlreadyExistsIncompatibleLib, name)
				});
			}
			Binding::Owned(existing) if !existing.version.caret_matches(&version) => {
				return Err(Rejection {
					conflicting_provider: Some(existing.provider),
					conflicting_version: Some(existing.version),
					..request.reject(RejectKind::AlreadyExistsIncompatibleVersion, name)
				});
			}
			Binding::Owned(_) => true,
		};

		if self.reserved.contains(request.class, name) {
			return Err(request.reject(RejectKind::ReservedWord, name));
		}

		target.define_non_enumerable_member(name, member);
		ledger.set(
			target,
			name,
			Ownership {
				provider: request.provider.to_string(),
				version,
			},
		);
		tracing::debug!(
			class = request.class,
			member = name,
			provider = request.provider,
			%version,
			replaced,
			"registrar.install"
		);

		Ok(Installed {
			name: name.to_string(),
			version,
			replaced,
		})
	}
}
