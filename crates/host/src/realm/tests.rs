use graft_registrar::HostObject;
use pretty_assertions::assert_eq;

use super::*;
use crate::value::Value;

#[test]
fn test_prototypes_by_class() {
	let realm = Realm::new();
	assert!(realm.prototype("Array").is_some_and(|p| p.ptr_eq(realm.array())));
	assert!(realm.prototype("String").is_some_and(|p| p.ptr_eq(realm.string())));
	assert!(realm.prototype("Object").is_some_and(|p| p.ptr_eq(realm.object())));
	assert!(realm.prototype("Set").is_none());
}

#[test]
fn test_array_inherits_from_object() {
	let realm = Realm::new();
	assert!(realm.array().proto().is_some_and(|p| p.ptr_eq(realm.object())));
	assert!(realm.array().get("valueOf").is_some());
}

#[test]
fn test_builtins_are_native_and_hidden() {
	let realm = Realm::new();
	let concat = realm.array().get("concat").unwrap();
	assert!(Object::is_native(&concat));
	assert!(realm.array().keys().is_empty());
	assert_eq!(realm.array().flags("concat"), Some(MemberFlags::BUILTIN));
}

#[test]
fn test_array_natives() {
	let realm = Realm::new();
	let array = realm.array();
	let list = Value::from(vec![1, 2, 3]);

	assert_eq!(
		array.invoke("join", &list, &[Value::from("-")]),
		Ok(Value::from("1-2-3"))
	);
	assert_eq!(array.invoke("at", &list, &[Value::from(-1)]), Ok(Value::from(3)));
	assert_eq!(
		array.invoke("slice", &list, &[Value::from(1)]),
		Ok(Value::from(vec![2, 3]))
	);
	assert_eq!(
		array.invoke("fill", &list, &[Value::from(0), Value::from(1)]),
		Ok(Value::from(vec![1, 0, 0]))
	);
	assert_eq!(
		array.invoke("indexOf", &list, &[Value::from(4)]),
		Ok(Value::from(-1))
	);
	assert_eq!(
		array.invoke("concat", &list, &[Value::from(vec![4]), Value::from(5)]),
		Ok(Value::from(vec![1, 2, 3, 4, 5]))
	);
	assert_eq!(array.invoke("toString", &list, &[]), Ok(Value::from("1,2,3")));
}

#[test]
fn test_string_natives_and_inherited_to_string() {
	let realm = Realm::new();
	let hello = Value::from("  Hello ");
	assert_eq!(
		realm.string().invoke("trim", &hello, &[]),
		Ok(Value::from("Hello"))
	);
	assert_eq!(
		realm.string().invoke("toString", &hello, &[]),
		Ok(Value::from("[object String]"))
	);
}

#[test]
fn test_native_rejects_wrong_receiver() {
	let realm = Realm::new();
	assert!(realm.array().invoke("join", &Value::Null, &[]).is_err());
}

#[test]
fn test_realms_are_independent() {
	let a = Realm::new();
	let b = Realm::new();
	assert!(!a.array().ptr_eq(b.array()));
}
