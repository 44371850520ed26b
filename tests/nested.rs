// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use colvec::{Column, ColumnError, Type, Value};

#[test]
fn test_array_of_arrays() {
	let inner_ty = Type::array(Type::Int4);
	let ty = Type::array(inner_ty.clone());
	let mut column = Column::new(&ty);

	let mut first = Column::new(&inner_ty);
	first.push_list(&Column::int4(vec![1, 2])).unwrap();
	first.push_list(&Column::int4(vec![3])).unwrap();

	let mut second = Column::new(&inner_ty);
	second.push_list(&Column::int4(vec![4, 5, 6])).unwrap();

	column.push_list(&first).unwrap();
	column.push_list(&second).unwrap();
	column.push_undefined().unwrap();

	assert_eq!(column.len(), 3);
	assert_eq!(column.size_at(0).unwrap(), Some(2));
	assert_eq!(column.size_at(1).unwrap(), Some(1));
	assert_eq!(column.size_at(2).unwrap(), None);

	let element = column.list_at(0).unwrap().unwrap();
	assert_eq!(element.get_type(), &inner_ty);
	let leaf = element.list_at(1).unwrap().unwrap();
	assert_eq!(leaf.get_value(0).unwrap(), Value::Int4(3));
}

#[test]
fn test_map_runs_stay_paired() {
	let ty = Type::map(Type::Utf8, Type::Int8);
	let mut column = Column::new(&ty);

	column.push_entries(&Column::utf8(vec!["a", "b"]), &Column::int8(vec![1, 2])).unwrap();
	column.push_undefined().unwrap();
	column.push_entries(&Column::utf8(vec!["c"]), &Column::int8(vec![3])).unwrap();

	for index in 0..column.len() {
		let keys = column.map_keys(index).unwrap();
		let values = column.map_values(index).unwrap();
		match (keys, values) {
			(Some(keys), Some(values)) => assert_eq!(keys.len(), values.len()),
			(None, None) => assert!(!column.is_defined(index)),
			_ => panic!("keys and values disagree at {index}"),
		}
	}

	assert_eq!(column.offset_at(2).unwrap(), Some((2, 3)));
	let keys = column.map_keys(2).unwrap().unwrap();
	assert_eq!(keys.get_value(0).unwrap(), Value::utf8("c"));
}

#[test]
fn test_map_push_is_atomic() {
	let ty = Type::map(Type::Utf8, Type::Int8);
	let mut column = Column::new(&ty);

	let err = column.push_entries(&Column::utf8(vec!["a", "b"]), &Column::int8(vec![1])).unwrap_err();
	assert!(matches!(err, ColumnError::LengthMismatch { .. }));
	assert!(column.is_empty());

	let err = column.push_entries(&Column::utf8(vec!["a"]), &Column::utf8(vec!["b"])).unwrap_err();
	assert!(matches!(err, ColumnError::TypeMismatch { .. }));
	assert!(column.is_empty());
}

#[test]
fn test_row_lifecycle() {
	let ty = Type::row(vec![("name", Type::Utf8), ("score", Type::Int4)]).unwrap();
	let mut column = Column::new(&ty);

	assert_eq!(column.children_size().unwrap(), 2);
	assert_eq!(column.child_at(0).unwrap().get_type(), &Type::Utf8);

	column.set_length(3).unwrap();
	column.set_child(0, Column::utf8(vec!["ada", "bob", "eve"])).unwrap();
	column.set_child(1, Column::int4(vec![90, 70, 80])).unwrap();
	column.set_defined(1, false).unwrap();

	assert_eq!(column.len(), 3);
	assert_eq!(column.undefined_count(), 1);
	assert!(!column.is_defined(1));
	assert_eq!(column.child_at(1).unwrap().get_value(1).unwrap(), Value::Int4(70));

	let err = column.set_child(1, Column::utf8(vec!["x"])).unwrap_err();
	assert!(matches!(err, ColumnError::TypeMismatch { .. }));

	let err = column.set_length(1).unwrap_err();
	assert!(matches!(err, ColumnError::LengthMismatch { .. }));
}

#[test]
fn test_views_refuse_mutation() {
	let ty = Type::array(Type::Int4);
	let mut column = Column::new(&ty);
	column.push_list(&Column::int4(vec![1, 2])).unwrap();
	column.push_list(&Column::int4(vec![3])).unwrap();

	let mut view = column.slice(0, 1).unwrap();
	assert_eq!(view.push_list(&Column::int4(vec![9])).unwrap_err(), ColumnError::NotAppendable);

	let mut element = column.list_at(0).unwrap().unwrap();
	assert_eq!(element.push(9i32).unwrap_err(), ColumnError::NotAppendable);
}

#[test]
fn test_extend_from_requires_same_type() {
	let mut column = Column::new(&Type::array(Type::Int4));
	let other = Column::new(&Type::array(Type::Int8));

	let err = column.extend_from(&other).unwrap_err();
	assert_eq!(err, ColumnError::TypeMismatch {
		expected: "array<int4>".to_string(),
		found: "array<int8>".to_string(),
	});
}

#[test]
fn test_extend_from_array_window() {
	let ty = Type::array(Type::Int4);
	let mut source = Column::new(&ty);
	source.push_list(&Column::int4(vec![1])).unwrap();
	source.push_list(&Column::int4(vec![2, 3])).unwrap();
	source.push_list(&Column::int4(vec![4])).unwrap();

	let mut target = Column::new(&ty);
	target.extend_from(&source.slice(1, 2).unwrap()).unwrap();

	assert_eq!(target.len(), 2);
	assert_eq!(target.size_at(0).unwrap(), Some(2));
	let element = target.list_at(0).unwrap().unwrap();
	assert_eq!(element.get_value(1).unwrap(), Value::Int4(3));
}

#[test]
fn test_serde_roundtrip_row_of_arrays() {
	let ty = Type::row(vec![("tags", Type::array(Type::Utf8))]).unwrap();
	let mut column = Column::new(&ty);
	column.set_length(1).unwrap();

	let mut tags = Column::new(&Type::array(Type::Utf8));
	tags.push_list(&Column::utf8(vec!["x", "y"])).unwrap();
	column.set_child(0, tags).unwrap();

	let json = serde_json::to_string(&column).unwrap();
	let back: Column = serde_json::from_str(&json).unwrap();

	assert_eq!(back, column);
	let child = back.child_at(0).unwrap();
	assert_eq!(child.list_at(0).unwrap().unwrap().get_value(0).unwrap(), Value::utf8("x"));
}

#[test]
fn test_type_parsing_matches_display() {
	for repr in ["int4", "array<int4>", "map<utf8, int8>", "row<a: int4, b: utf8>"] {
		let ty: Type = repr.parse().unwrap();
		assert_eq!(ty.to_string(), repr);
		assert_eq!(Column::new(&ty).get_type(), &ty);
	}

	let err = "decimal".parse::<Type>().unwrap_err();
	assert_eq!(err, ColumnError::UnsupportedKind {
		name: "decimal".to_string()
	});
}
