// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

pub mod array;
pub mod bool;
pub mod map;
pub mod number;
pub mod row;
pub mod utf8;

pub use array::ArrayContainer;
pub use bool::BoolContainer;
pub use map::MapContainer;
pub use number::NumberContainer;
pub use row::RowContainer;
pub use utf8::Utf8Container;
