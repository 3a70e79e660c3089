/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
};

use super::Square;

/// A set of squares, stored as a 64-bit mask.
///
/// Bit `i` is set if and only if the square with index `i` is a member.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// A board with no squares set.
    pub const EMPTY_BOARD: Self = Self(0);

    /// A board with every square set.
    pub const FULL_BOARD: Self = Self(u64::MAX);

    /// Constructs a new [`Bitboard`] from the provided bits.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the inner `u64` of this [`Bitboard`].
    #[inline(always)]
    pub const fn inner(&self) -> u64 {
        self.0
    }

    /// Bitwise OR, usable in `const` contexts.
    #[inline(always)]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Bitwise AND, usable in `const` contexts.
    #[inline(always)]
    pub const fn and(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Number of squares in this set.
    #[inline(always)]
    pub const fn population(&self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Returns `true` if no squares are set.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `square` is a member of this set.
    #[inline(always)]
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & square.bitboard().0 != 0
    }

    /// Removes and returns the lowest-indexed square in this set, if any.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        if self.is_empty() {
            return None;
        }

        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Square::from_index(index)
    }

    /// An iterator over the squares in this set, in increasing index order.
    #[inline(always)]
    pub fn iter(&self) -> BitboardIter {
        BitboardIter { bitboard: *self }
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl BitOr<Square> for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Square) -> Self::Output {
        self.or(rhs.bitboard())
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitOrAssign<Square> for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Square) {
        self.0 |= rhs.bitboard().0;
    }
}

impl From<u64> for Bitboard {
    #[inline(always)]
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY_BOARD, |acc, sq| acc | sq)
    }
}

/// Yields the squares of a [`Bitboard`], lowest index first.
pub struct BitboardIter {
    bitboard: Bitboard,
}

impl Iterator for BitboardIter {
    type Item = Square;
    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.bitboard.pop_lsb()
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Bitboard {
    /// Renders an 8x8 grid with rank 7 on top and file 0 on the left.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..Square::SIDE).rev() {
            let row = (0..Square::SIDE)
                .filter_map(|file| Square::new(rank, file))
                .map(|sq| if self.contains(sq) { "X" } else { "." })
                .collect::<Vec<_>>()
                .join(" ");

            if rank > 0 {
                writeln!(f, "{row}")?;
            } else {
                write!(f, "{row}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard({:#018x})", self.0)
    }
}
