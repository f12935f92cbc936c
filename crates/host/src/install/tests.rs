use graft_registrar::RejectKind;
use pretty_assertions::assert_eq;

use super::*;

const MANIFEST: &str = r#"
provider = "eslib"
version = "1.0.0"

[extensions]
Array = ["head", "last", "fill", "missing"]
Set = ["head"]
"#;

fn head(args: &[Value]) -> Result<Value, HostError> {
	let items = args.first().and_then(Value::as_array).unwrap_or_default();
	Ok(items.first().cloned().unwrap_or_default())
}

fn last(args: &[Value]) -> Result<Value, HostError> {
	let items = args.first().and_then(Value::as_array).unwrap_or_default();
	Ok(items.last().cloned().unwrap_or_default())
}

fn catalog() -> Catalog {
	Catalog::new()
		.with("head", head)
		.with("last", last)
		.with("fill", |_: &[Value]| Ok(Value::Null))
}

#[test]
fn test_manifest_parses() {
	let manifest = InstallManifest::from_toml_str(MANIFEST).unwrap();
	assert_eq!(manifest.provider, "eslib");
	assert_eq!(manifest.version, "1.0.0");
	assert_eq!(
		manifest.extensions.get("Array"),
		Some(&vec![
			"head".to_string(),
			"last".to_string(),
			"fill".to_string(),
			"missing".to_string(),
		])
	);
}

#[test]
fn test_manifest_requires_provider() {
	assert!(InstallManifest::from_toml_str("version = \"1.0.0\"").is_err());
}

#[test]
fn test_method_passes_receiver_first() {
	let method = catalog().method("last").unwrap();
	let member = Member::Function(method);
	let list = Value::from(vec![1, 2, 3]);
	assert_eq!(member.call("last", &list, &[]), Ok(Value::from(3)));
	assert!(member.to_string().contains("last"));
	assert!(catalog().method("nope").is_none());
}

#[test]
fn test_install_reports_every_member() {
	let registrar = Registrar::new();
	let realm = Realm::new();
	let manifest = InstallManifest::from_toml_str(MANIFEST).unwrap();

	let report = install(&registrar, &realm, &manifest, &catalog());

	assert_eq!(
		report.installed,
		vec![
			Placement {
				class: "Array".into(),
				name: "head".into(),
			},
			Placement {
				class: "Array".into(),
				name: "last".into(),
			},
		]
	);
	assert_eq!(report.rejected.len(), 1);
	assert_eq!(report.rejected[0].kind, RejectKind::AlreadyExistsNative);
	assert_eq!(report.rejected[0].name, "fill");
	assert_eq!(
		report.missing,
		vec![Placement {
			class: "Array".into(),
			name: "missing".into(),
		}]
	);
	assert_eq!(report.unknown_classes, vec!["Set".to_string()]);
	assert!(!report.is_clean());

	let list = Value::from(vec![7, 8]);
	assert_eq!(realm.array().invoke("head", &list, &[]), Ok(Value::from(7)));
	assert!(realm.array().keys().is_empty(), "installed members are hidden");
}

#[test]
fn test_reinstall_is_clean() {
	let registrar = Registrar::new();
	let realm = Realm::new();
	let manifest = InstallManifest {
		provider: "eslib".into(),
		version: "1.0.0".into(),
		extensions: BTreeMap::from([("Array".to_string(), vec!["head".to_string()])]),
	};

	assert!(install(&registrar, &realm, &manifest, &catalog()).is_clean());
	assert!(install(&registrar, &realm, &manifest, &catalog()).is_clean());
}
