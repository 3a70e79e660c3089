/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use anyhow::{anyhow, Result};

use super::{Bitboard, Offset};

/// A single square on an 8x8 board, addressed by `(rank, file)`.
///
/// The bit index of a square is `rank * 8 + file`, so rank `0` occupies bits `0..8`.
/// Every consumer of the generated tables relies on this layout.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Number of ranks (and files) on the board.
    pub const SIDE: u8 = 8;

    /// Creates a new [`Square`] from a rank and file, if both lie in `0..8`.
    ///
    /// # Example
    /// ```
    /// # use leafline_types::Square;
    /// assert_eq!(Square::new(2, 3).unwrap().index(), 19);
    /// assert!(Square::new(8, 0).is_none());
    /// ```
    #[inline(always)]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < Self::SIDE && file < Self::SIDE {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    /// Creates a new [`Square`] from its bit index, if the index is in `0..64`.
    #[inline(always)]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self {
                rank: (index / 8) as u8,
                file: (index % 8) as u8,
            })
        } else {
            None
        }
    }

    /// Parses a square written as `"<rank>,<file>"`, e.g. `"3,3"`.
    pub fn from_coords(s: &str) -> Result<Self> {
        let (rank, file) = s
            .split_once(',')
            .ok_or(anyhow!("Invalid square {s:?}: expected \"<rank>,<file>\""))?;

        let rank = rank.trim().parse::<u8>()?;
        let file = file.trim().parse::<u8>()?;

        Self::new(rank, file).ok_or(anyhow!("Square {s:?} is off the board"))
    }

    /// The rank of this square, in `0..8`.
    #[inline(always)]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// The file of this square, in `0..8`.
    #[inline(always)]
    pub const fn file(&self) -> u8 {
        self.file
    }

    /// The bit index of this square: `rank * 8 + file`.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// A [`Bitboard`] with only this square's bit set.
    ///
    /// # Example
    /// ```
    /// # use leafline_types::*;
    /// let c4 = Square::new(2, 3).unwrap();
    /// assert_eq!(c4.bitboard(), Bitboard::new(524288));
    /// ```
    #[inline(always)]
    pub const fn bitboard(&self) -> Bitboard {
        Bitboard::new(1 << self.index())
    }

    /// Returns `true` if `(rank, file)` names a square on the board.
    #[inline(always)]
    pub const fn is_legal(rank: i16, file: i16) -> bool {
        0 <= rank && rank < Self::SIDE as i16 && 0 <= file && file < Self::SIDE as i16
    }

    /// Moves this square by `offset`, yielding `None` if the result is off the board.
    ///
    /// Legality is checked on the displaced coordinates, so the same offset may be legal
    /// from one square and illegal from another.
    ///
    /// # Example
    /// ```
    /// # use leafline_types::*;
    /// let corner = Square::new(0, 0).unwrap();
    /// assert_eq!(corner.displace(Offset::new(1, 2)), Square::new(1, 2));
    /// assert_eq!(corner.displace(Offset::new(-1, 2)), None);
    /// ```
    #[inline(always)]
    pub const fn displace(&self, offset: Offset) -> Option<Self> {
        let rank = self.rank as i16 + offset.rank as i16;
        let file = self.file as i16 + offset.file as i16;

        if Self::is_legal(rank, file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// An iterator over all 64 squares, in increasing bit index order.
    #[inline(always)]
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(square: Square) -> Self {
        square.bitboard()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rank, self.file)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} [{}]", self.index())
    }
}
