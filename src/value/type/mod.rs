// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
	sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::error::ColumnError;

/// Shape descriptor for column values: a scalar kind, or a composite kind
/// carrying child descriptors.
///
/// Descriptors are immutable after creation; composite children sit behind
/// `Arc` so columns of the same shape share one descriptor.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Bool,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text
	Utf8,
	/// A variable-length list of elements of one type
	Array(Arc<Type>),
	/// Contiguous key/value runs, both sides typed
	Map {
		key: Arc<Type>,
		value: Arc<Type>,
	},
	/// A fixed set of named, heterogeneous fields
	Row(Arc<RowFields>),
}

/// Named field list of a row type. Field names are unique and positional
/// with their types.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFields {
	names: Vec<String>,
	types: Vec<Type>,
}

impl RowFields {
	pub fn new(names: Vec<String>, types: Vec<Type>) -> crate::Result<Self> {
		if names.len() != types.len() {
			return Err(ColumnError::LengthMismatch {
				expected: names.len(),
				found: types.len(),
			});
		}
		for (i, name) in names.iter().enumerate() {
			if names[..i].contains(name) {
				return Err(ColumnError::DuplicateField {
					name: name.clone(),
				});
			}
		}
		Ok(Self {
			names,
			types,
		})
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	pub fn name_of(&self, idx: usize) -> Option<&str> {
		self.names.get(idx).map(String::as_str)
	}

	pub fn child_at(&self, idx: usize) -> Option<&Type> {
		self.types.get(idx)
	}

	pub fn child_index(&self, name: &str) -> Option<usize> {
		self.names.iter().position(|n| n == name)
	}

	pub fn contains_child(&self, name: &str) -> bool {
		self.child_index(name).is_some()
	}

	pub fn types(&self) -> &[Type] {
		&self.types
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}
}

impl Type {
	pub fn array(element: Type) -> Self {
		Type::Array(Arc::new(element))
	}

	pub fn map(key: Type, value: Type) -> Self {
		Type::Map {
			key: Arc::new(key),
			value: Arc::new(value),
		}
	}

	pub fn row<N: Into<String>>(fields: Vec<(N, Type)>) -> crate::Result<Self> {
		let (names, types): (Vec<String>, Vec<Type>) = fields.into_iter().map(|(n, t)| (n.into(), t)).unzip();
		Ok(Type::Row(Arc::new(RowFields::new(names, types)?)))
	}

	pub fn is_number(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Float4 | Type::Float8)
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_float(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Bool)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_composite(&self) -> bool {
		matches!(self, Type::Array(_) | Type::Map { .. } | Type::Row(_))
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Bool => f.write_str("bool"),
			Type::Int1 => f.write_str("int1"),
			Type::Int2 => f.write_str("int2"),
			Type::Int4 => f.write_str("int4"),
			Type::Int8 => f.write_str("int8"),
			Type::Float4 => f.write_str("float4"),
			Type::Float8 => f.write_str("float8"),
			Type::Utf8 => f.write_str("utf8"),
			Type::Array(element) => write!(f, "array<{}>", element),
			Type::Map {
				key,
				value,
			} => write!(f, "map<{}, {}>", key, value),
			Type::Row(fields) => {
				f.write_str("row<")?;
				for (i, (name, ty)) in fields.names.iter().zip(fields.types.iter()).enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}: {}", name, ty)?;
				}
				f.write_str(">")
			}
		}
	}
}

/// Split on commas that sit outside any `<...>` nesting.
fn split_top_level(s: &str) -> Vec<&str> {
	let mut parts = Vec::new();
	let mut depth = 0usize;
	let mut start = 0;
	for (i, c) in s.char_indices() {
		match c {
			'<' => depth += 1,
			'>' => depth = depth.saturating_sub(1),
			',' if depth == 0 => {
				parts.push(&s[start..i]);
				start = i + 1;
			}
			_ => {}
		}
	}
	parts.push(&s[start..]);
	parts
}

impl FromStr for Type {
	type Err = ColumnError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		let unsupported = || ColumnError::UnsupportedKind {
			name: s.to_string(),
		};

		match s {
			"bool" => return Ok(Type::Bool),
			"int1" => return Ok(Type::Int1),
			"int2" => return Ok(Type::Int2),
			"int4" => return Ok(Type::Int4),
			"int8" => return Ok(Type::Int8),
			"float4" => return Ok(Type::Float4),
			"float8" => return Ok(Type::Float8),
			"utf8" => return Ok(Type::Utf8),
			_ => {}
		}

		let inner = |prefix: &str| {
			s.strip_prefix(prefix).and_then(|rest| rest.strip_suffix('>'))
		};

		if let Some(element) = inner("array<") {
			return Ok(Type::array(element.parse()?));
		}

		if let Some(body) = inner("map<") {
			let parts = split_top_level(body);
			if parts.len() != 2 {
				return Err(unsupported());
			}
			return Ok(Type::map(parts[0].parse()?, parts[1].parse()?));
		}

		if let Some(body) = inner("row<") {
			let mut fields = Vec::new();
			for part in split_top_level(body) {
				let (name, ty) = part.split_once(':').ok_or_else(unsupported)?;
				fields.push((name.trim().to_string(), ty.parse::<Type>()?));
			}
			return Type::row(fields);
		}

		Err(unsupported())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_display_scalars() {
		assert_eq!(Type::Int4.to_string(), "int4");
		assert_eq!(Type::Bool.to_string(), "bool");
		assert_eq!(Type::Utf8.to_string(), "utf8");
	}

	#[test]
	fn test_display_nested() {
		let ty = Type::map(Type::Utf8, Type::array(Type::Int8));
		assert_eq!(ty.to_string(), "map<utf8, array<int8>>");
	}

	#[test]
	fn test_parse_scalars() {
		assert_eq!("int1".parse::<Type>().unwrap(), Type::Int1);
		assert_eq!("float8".parse::<Type>().unwrap(), Type::Float8);
	}

	#[test]
	fn test_parse_roundtrip_nested() {
		let ty = Type::map(Type::Utf8, Type::array(Type::Int4));
		assert_eq!(ty.to_string().parse::<Type>().unwrap(), ty);

		let row = Type::row(vec![("id", Type::Int8), ("tags", Type::array(Type::Utf8))]).unwrap();
		assert_eq!(row.to_string().parse::<Type>().unwrap(), row);
	}

	#[test]
	fn test_parse_unknown_kind() {
		let err = "decimal".parse::<Type>().unwrap_err();
		assert_eq!(err, ColumnError::UnsupportedKind {
			name: "decimal".to_string()
		});

		assert!("array<decimal>".parse::<Type>().is_err());
	}

	#[test]
	fn test_row_duplicate_field() {
		let err = Type::row(vec![("a", Type::Int4), ("a", Type::Utf8)]).unwrap_err();
		assert_eq!(err, ColumnError::DuplicateField {
			name: "a".to_string()
		});
	}

	#[test]
	fn test_row_fields_lookup() {
		let fields =
			RowFields::new(vec!["a".to_string(), "b".to_string()], vec![Type::Int4, Type::Utf8]).unwrap();

		assert_eq!(fields.len(), 2);
		assert_eq!(fields.child_index("b"), Some(1));
		assert!(fields.contains_child("a"));
		assert!(!fields.contains_child("c"));
		assert_eq!(fields.name_of(0), Some("a"));
		assert_eq!(fields.child_at(1), Some(&Type::Utf8));
	}

	#[test]
	fn test_predicates() {
		assert!(Type::Int2.is_number());
		assert!(Type::Float4.is_float());
		assert!(!Type::Utf8.is_number());
		assert!(Type::array(Type::Int4).is_composite());
		assert!(!Type::Bool.is_composite());
	}
}
