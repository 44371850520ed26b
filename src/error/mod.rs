// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ColumnError>;

/// Errors surfaced by column construction, mutation and access.
///
/// Every violation is detected synchronously at the offending call; a failed
/// mutation leaves the column unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColumnError {
	#[error("index {index} out of range for column of length {length}")]
	OutOfRange {
		index: usize,
		length: usize,
	},

	#[error("cannot mutate a column through a sliced view")]
	NotAppendable,

	#[error("stored bytes at position {index} are not valid utf-8")]
	InvalidUtf8 {
		index: usize,
	},

	#[error("unsupported type kind `{name}`")]
	UnsupportedKind {
		name: String,
	},

	#[error("length mismatch: expected {expected}, found {found}")]
	LengthMismatch {
		expected: usize,
		found: usize,
	},

	#[error("type mismatch: expected {expected}, found {found}")]
	TypeMismatch {
		expected: String,
		found: String,
	},

	#[error("duplicate row field `{name}`")]
	DuplicateField {
		name: String,
	},

	#[error("{operation} is not supported on {ty} columns")]
	UnsupportedOperation {
		operation: String,
		ty: String,
	},
}

impl ColumnError {
	pub fn out_of_range(index: usize, length: usize) -> Self {
		ColumnError::OutOfRange {
			index,
			length,
		}
	}

	pub fn type_mismatch(expected: impl ToString, found: impl ToString) -> Self {
		ColumnError::TypeMismatch {
			expected: expected.to_string(),
			found: found.to_string(),
		}
	}

	pub fn unsupported_operation(operation: impl ToString, ty: impl ToString) -> Self {
		ColumnError::UnsupportedOperation {
			operation: operation.to_string(),
			ty: ty.to_string(),
		}
	}
}
