//! Ownership-aware registration of members onto shared objects.
//!
//! Providers ask a [`Registrar`] to attach named members to a target. Each request is
//! accepted or rejected on its own:
//!
//! - names bound by the host or by untracked code are never claimed,
//! - a name owned by one provider is never taken over by another,
//! - the owning provider may only move forward within a caret range,
//! - a few names are reserved outright.
//!
//! The registrar sees targets only through the [`HostObject`] trait.

pub mod config;
pub mod detect;
pub mod error;
pub mod host;
pub mod ledger;
pub mod registrar;
pub mod reserved;
pub mod version;

#[cfg(test)]
mod test_fixtures;

pub use config::{ConfigError, RegistrarConfig};
pub use detect::{Binding, classify};
pub use error::{Installed, Outcome, RejectKind, Rejection};
pub use host::{Anchor, HostObject};
pub use ledger::{Ownership, OwnershipLedger, TargetId};
pub use registrar::Registrar;
pub use reserved::{DEFAULT_RESERVED, ReservedEntry, ReservedNames};
pub use version::{Version, VersionError, compatible};
