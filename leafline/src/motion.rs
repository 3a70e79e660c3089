/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Bitboard, Square};

// Include the pre-generated movement tables
include!(concat!(env!("OUT_DIR"), "/motion.rs"));

/// Fetch the squares a knight-like piece on `square` can reach.
#[inline(always)]
pub fn pony_movement(square: Square) -> Bitboard {
    Bitboard::new(PONY_MOVEMENT_TABLE[square.index()])
}

/// Fetch the squares a king-like piece on `square` can reach.
#[inline(always)]
pub fn figurehead_movement(square: Square) -> Bitboard {
    Bitboard::new(FIGUREHEAD_MOVEMENT_TABLE[square.index()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MovementPattern;

    #[test]
    fn compiled_tables_match_generation() {
        let pony = MovementPattern::PONY.table();
        let figurehead = MovementPattern::FIGUREHEAD.table();

        for square in Square::iter() {
            assert_eq!(pony_movement(square), pony[square.index()], "{square}");
            assert_eq!(
                figurehead_movement(square),
                figurehead[square.index()],
                "{square}"
            );
        }
    }

    #[test]
    fn pony_from_corner() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(PONY_MOVEMENT_TABLE[0], (1 << 10) | (1 << 17));
        assert_eq!(pony_movement(corner).population(), 2);
    }

    #[test]
    fn figurehead_counts() {
        let corner = Square::new(0, 0).unwrap();
        let interior = Square::new(3, 3).unwrap();

        assert_eq!(FIGUREHEAD_MOVEMENT_TABLE[0], 0b10 | (0b11 << 8));
        assert_eq!(figurehead_movement(corner).population(), 3);
        assert_eq!(figurehead_movement(interior).population(), 8);
        assert!(!figurehead_movement(interior).contains(interior));
    }
}
