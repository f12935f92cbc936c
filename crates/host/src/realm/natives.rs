//! Host built-ins seeded onto the realm's prototypes.

use crate::error::HostError;
use crate::member::NativeFn;
use crate::value::Value;

pub(super) const OBJECT: &[NativeFn] = &[
	NativeFn::new("toString", object_to_string),
	NativeFn::new("valueOf", value_of),
];

pub(super) const ARRAY: &[NativeFn] = &[
	NativeFn::new("at", array_at),
	NativeFn::new("concat", array_concat),
	NativeFn::new("fill", array_fill),
	NativeFn::new("includes", array_includes),
	NativeFn::new("indexOf", array_index_of),
	NativeFn::new("join", array_join),
	NativeFn::new("reverse", array_reverse),
	NativeFn::new("slice", array_slice),
	NativeFn::new("toString", array_to_string),
];

pub(super) const STRING: &[NativeFn] = &[
	NativeFn::new("at", string_at),
	NativeFn::new("includes", string_includes),
	NativeFn::new("toLowerCase", string_to_lower_case),
	NativeFn::new("toUpperCase", string_to_upper_case),
	NativeFn::new("trim", string_trim),
];

fn items<'a>(method: &'static str, this: &'a Value) -> Result<&'a [Value], HostError> {
	this.as_array().ok_or(HostError::Type {
		method,
		expected: "array receiver",
		got: this.type_name(),
	})
}

fn text<'a>(method: &'static str, this: &'a Value) -> Result<&'a str, HostError> {
	this.as_str().ok_or(HostError::Type {
		method,
		expected: "string receiver",
		got: this.type_name(),
	})
}

/// Converts a relative index argument (negative counts from the end) to an offset.
fn relative_index(arg: Option<&Value>, len: usize, default: usize) -> usize {
	let Some(n) = arg.and_then(Value::as_number) else {
		return default;
	};
	let n = n.trunc();
	if n < 0.0 {
		len.saturating_sub((-n) as usize)
	} else {
		(n as usize).min(len)
	}
}

fn object_to_string(this: &Value, _: &[Value]) -> Result<Value, HostError> {
	let tag = match this {
		Value::Undefined => "Undefined",
		Value::Null => "Null",
		Value::Array(_) => "Array",
		Value::Str(_) => "String",
		Value::Number(_) => "Number",
		Value::Bool(_) => "Boolean",
	};
	Ok(Value::Str(format!("[object {tag}]")))
}

fn value_of(this: &Value, _: &[Value]) -> Result<Value, HostError> {
	Ok(this.clone())
}

fn array_at(this: &Value, args: &[Value]) -> Result<Value, HostError> {
	let items = items("at", this)?;
	let Some(n) = args.first().and_then(Value::as_number) else {
		return Ok(items.first().cloned().unwrap_or_default());
	};
	let n = n.trunc();
	let index = if n < 0.0 {
		items.len().checked_sub((-n) as usize)
	} else {
		Some(n as usize)
	};
	Ok(index.and_then(|i| items.get(i)).cloned().unwrap_or_default())
}

fn array_concat(this: &Value, args: &[Value]) -> Result<Value, HostError> {
	let mut out = items("concat", this)?.to_vec();
	for arg in args {
		match arg {
			Value::Array(more) => out.extend(more.iter().cloned()),
			other => out.push(other.clone()),
		}
	}
	Ok(Value::Array(out))
}

fn array_fill(this: &Value, args: &[Value]) -> Result<Value, HostError> {
	let mut out = items("fill", this)?.to_vec();
	let len = out.len();
	let value = args.first().cloned().unwrap_or_default();
	let start = relative_index(args.get(1), len, 0);
	let end = relative_index(args.get(2), len, len);
	for slot in out.iter_mut().take(end).skip(start) {
		*slot = value.clone();
	}
	Ok(Value::Array(out))
}

fn array_includes(this: &Value, args: &[Value]) -> Result<Value, HostError> {
	let needle = args.first().cloned().unwrap_or_default();
	Ok(Value::Bool(items("includes", this)?.contains(&needle)))
}

fn array_index_of(this: &Value, args: &[Value]) -> Result<Value, HostError> {
	let needle = args.first().cloned().unwrap_or_default();
	let found = items("indexOf", this)?.iter().position(|v| *v == needle);
	Ok(Value::Number(found.map_or(-1.0, |i| i as f64)))
}

fn array_join(this: &Value, args: &[Value]) -> Result<Value, HostError> {
	let separator = args.first().and_then(Value::as_str).unwrap_or(",");
	let joined = items("join", this)?
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(separator);
	Ok(Value::Str(joined))
}

fn array_reverse(this: &Value, _: &[Value]) -> Result<Value, HostError> {
	let mut out = items("reverse", this)?.to_vec();
	out.reverse();
	Ok(Value::Array(out))
}

fn array_slice(this: &Value, args: &[Value]) -> Result<Value, HostError> {
	let items = items("slice", this)?;
	let start = relative_index(args.first(), items.len(), 0);
	let end = relative_index(args.get(1), items.len(), items.len());
	Ok(Value::Array(items.get(start..end).unwrap_or_default().to_vec()))
}

fn array_to_string(this: &Value, _: &[Value]) -> Result<Value, HostError> {
	array_join(this, &[])
}

fn string_at(this: &Value, args: &[Value]) -> Result<Value, HostError> {
	let chars: Vec<char> = text("at", this)?.chars().collect();
	let index = relative_index(args.first(), chars.len(), 0);
	Ok(chars
		.get(index)
		.map_or(Value::Undefined, |c| Value::Str(c.to_string())))
}

fn string_includes(this: &Value, args: &[Value]) -> Result<Value, HostError> {
	let needle = args.first().and_then(Value::as_str).unwrap_or("undefined");
	Ok(Value::Bool(text("includes", this)?.contains(needle)))
}

fn string_to_lower_case(this: &Value, _: &[Value]) -> Result<Value, HostError> {
	Ok(Value::Str(text("toLowerCase", this)?.to_lowercase()))
}

fn string_to_upper_case(this: &Value, _: &[Value]) -> Result<Value, HostError> {
	Ok(Value::Str(text("toUpperCase", this)?.to_uppercase()))
}

fn string_trim(this: &Value, _: &[Value]) -> Result<Value, HostError> {
	Ok(Value::Str(text("trim", this)?.trim().to_string()))
}
