/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![doc = include_str!("../README.md")]

/// All things related to Bitboards.
mod bitboard;
/// Rendering of computed tables as Rust declarations.
mod emit;
/// Offsets, movement patterns, and the tables generated from them.
mod pattern;
/// Named subsets of the board, built from coordinate predicates.
mod region;
/// Squares on a chessboard, addressed by rank and file.
mod square;

pub use bitboard::*;
pub use emit::*;
pub use pattern::*;
pub use region::*;
pub use square::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::bitboard::*;
    pub use crate::emit::*;
    pub use crate::pattern::*;
    pub use crate::region::*;
    pub use crate::square::*;
}
