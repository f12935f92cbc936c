use pretty_assertions::assert_eq;

use super::*;
use crate::test_fixtures::TestTarget;

fn owned(provider: &str, version: &str) -> Ownership {
	Ownership {
		provider: provider.to_string(),
		version: version.parse().unwrap(),
	}
}

#[test]
fn test_get_missing_is_none() {
	let ledger = OwnershipLedger::new();
	let target = TestTarget::new("Array");
	assert!(ledger.get(&target, "double").is_none());
	assert!(!ledger.has(&target, "double"));
	assert!(ledger.is_empty());
}

#[test]
fn test_set_then_get() {
	let mut ledger = OwnershipLedger::new();
	let target = TestTarget::new("Array");
	ledger.set(&target, "double", owned("lib1", "1.0.0"));

	assert_eq!(ledger.get(&target, "double"), Some(&owned("lib1", "1.0.0")));
	assert!(ledger.has(&target, "double"));
	assert!(!ledger.has(&target, "triple"));
	assert_eq!(ledger.len(), 1);
}

#[test]
fn test_set_overwrites_in_place() {
	let mut ledger = OwnershipLedger::new();
	let target = TestTarget::new("Array");
	ledger.set(&target, "double", owned("lib1", "1.0.0"));
	ledger.set(&target, "double", owned("lib1", "1.2.0"));

	assert_eq!(ledger.get(&target, "double"), Some(&owned("lib1", "1.2.0")));
	assert_eq!(ledger.len(), 1);
}

#[test]
fn test_identity_not_value() {
	let mut ledger = OwnershipLedger::new();
	let a = TestTarget::new("Array");
	let b = TestTarget::new("Array");
	ledger.set(&a, "double", owned("lib1", "1.0.0"));

	assert!(ledger.has(&a, "double"));
	assert!(!ledger.has(&b, "double"), "same class, different object");
	assert!(ledger.has(&a.clone(), "double"), "clones share identity");
}

#[test]
fn test_records_do_not_keep_target_alive() {
	let mut ledger = OwnershipLedger::new();
	let target = TestTarget::new("Array");
	let anchor = target.anchor();
	ledger.set(&target, "double", owned("lib1", "1.0.0"));
	assert_eq!(ledger.len(), 1);

	drop(target);
	assert_eq!(anchor.strong_count(), 0);
	assert_eq!(ledger.len(), 0);
	assert_eq!(ledger.sweep(), 1);
	assert_eq!(ledger.sweep(), 0);
}
