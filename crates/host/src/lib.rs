//! Reference host object model for the graft registrar.
//!
//! Objects are shared handles with prototype chains and attribute-carrying member
//! slots. Built-in prototypes live in a [`Realm`] and are seeded with native members
//! that print as `[native code]`. [`install`] attaches catalogue functions described by
//! an [`InstallManifest`] through a [`Registrar`](graft_registrar::Registrar).

pub mod error;
pub mod install;
pub mod member;
pub mod object;
pub mod realm;
pub mod value;

pub use error::HostError;
pub use install::{Catalog, CatalogFn, InstallManifest, InstallReport, Placement, install};
pub use member::{CallFn, Function, Member, MemberFlags, NativeCall, NativeFn};
pub use object::Object;
pub use realm::Realm;
pub use value::Value;
