// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

pub mod bitvec;
pub mod cowvec;

pub use bitvec::BitVec;
pub use cowvec::CowVec;
