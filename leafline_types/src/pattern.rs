/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Bitboard, Square};

/// A table of destinations, indexed by the bit index of the origin square.
pub type MovementTable = [Bitboard; Square::COUNT];

/// A relative step a piece may take, as `(Δrank, Δfile)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Offset {
    pub rank: i8,
    pub file: i8,
}

impl Offset {
    /// Creates a new [`Offset`].
    #[inline(always)]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }
}

/// A named set of [`Offset`]s describing how a kind of piece moves.
///
/// The order of `offsets` has no effect on the generated table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MovementPattern {
    pub name: &'static str,
    pub offsets: &'static [Offset],
}

impl MovementPattern {
    /// Knight-like movement: every `(±1, ±2)` and `(±2, ±1)`.
    pub const PONY: Self = Self {
        name: "pony",
        offsets: &[
            Offset::new(1, 2),
            Offset::new(-1, 2),
            Offset::new(1, -2),
            Offset::new(-1, -2),
            Offset::new(2, 1),
            Offset::new(-2, 1),
            Offset::new(2, -1),
            Offset::new(-2, -1),
        ],
    };

    /// King-like movement: one step in any of the eight directions.
    pub const FIGUREHEAD: Self = Self {
        name: "figurehead",
        offsets: &[
            Offset::new(-1, -1),
            Offset::new(-1, 0),
            Offset::new(-1, 1),
            Offset::new(0, -1),
            Offset::new(0, 1),
            Offset::new(1, -1),
            Offset::new(1, 0),
            Offset::new(1, 1),
        ],
    };

    /// Every built-in pattern, in the order their tables are emitted.
    pub const ALL: [Self; 2] = [Self::PONY, Self::FIGUREHEAD];

    /// Generates this pattern's [`MovementTable`].
    #[inline(always)]
    pub fn table(&self) -> MovementTable {
        movement_table(self.offsets)
    }
}

/// Computes every square reachable from `origin` by a single one of `offsets`.
///
/// Offsets that land off the board contribute nothing.
/// If none of them are legal, the result is [`Bitboard::EMPTY_BOARD`].
///
/// # Example
/// ```
/// # use leafline_types::*;
/// let corner = Square::new(0, 0).unwrap();
/// let reach = reach(corner, MovementPattern::PONY.offsets);
///
/// let expected = Square::new(1, 2).unwrap().bitboard() | Square::new(2, 1).unwrap();
/// assert_eq!(reach, expected);
/// ```
pub fn reach(origin: Square, offsets: &[Offset]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&offset| origin.displace(offset))
        .fold(Bitboard::EMPTY_BOARD, |acc, dest| acc | dest)
}

/// Computes a [`MovementTable`] for `offsets`, with entry `i` holding the reach from square `i`.
pub fn movement_table(offsets: &[Offset]) -> MovementTable {
    let mut table = [Bitboard::EMPTY_BOARD; Square::COUNT];

    for origin in Square::iter() {
        table[origin.index()] = reach(origin, offsets);
    }

    table
}
