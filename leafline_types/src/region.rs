/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Bitboard, Square};

/// Named rank bands, paired with the rank each one covers.
pub const LANDMARK_RANKS: [(&str, u8); 4] = [
    ("low seventh heaven", 1),
    ("low colonelcy", 2),
    ("high seventh heaven", 6),
    ("high colonelcy", 5),
];

/// Builds a [`Bitboard`] of every square whose `(rank, file)` satisfies `predicate`.
///
/// # Example
/// ```
/// # use leafline_types::*;
/// let diagonal = region_mask(|rank, file| rank == file);
/// assert_eq!(diagonal.population(), 8);
/// ```
pub fn region_mask(predicate: impl Fn(u8, u8) -> bool) -> Bitboard {
    Square::iter()
        .filter(|sq| predicate(sq.rank(), sq.file()))
        .collect()
}

/// The sixteen central squares: rank and file both in `2..6`.
pub fn center_of_the_world() -> Bitboard {
    region_mask(|rank, file| (2..6).contains(&rank) && (2..6).contains(&file))
}

/// All eight squares on `rank`.
pub fn rank_band(rank: u8) -> Bitboard {
    region_mask(|r, _| r == rank)
}

/// All eight squares on `file`.
pub fn file_band(file: u8) -> Bitboard {
    region_mask(|_, f| f == file)
}

/// One [`file_band`] per file, indexed by file.
pub fn file_bands() -> [Bitboard; Square::SIDE as usize] {
    std::array::from_fn(|file| file_band(file as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_has_sixteen_central_squares() {
        let center = center_of_the_world();
        assert_eq!(center.population(), 16);

        for sq in center {
            assert!((2..6).contains(&sq.rank()), "{sq}");
            assert!((2..6).contains(&sq.file()), "{sq}");
        }
    }

    #[test]
    fn first_file_band() {
        let indices = file_band(0).iter().map(|sq| sq.index()).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 8, 16, 24, 32, 40, 48, 56]);
    }

    #[test]
    fn file_bands_hold_their_own_file() {
        for (file, band) in file_bands().into_iter().enumerate() {
            assert_eq!(band.population(), 8);
            for sq in band {
                assert_eq!(sq.file() as usize, file);
            }
        }
    }

    #[test]
    fn rank_bands() {
        assert_eq!(rank_band(0).inner(), 0xff);
        assert_eq!(rank_band(7).inner(), 0xff_u64 << 56);

        for (name, rank) in LANDMARK_RANKS {
            let band = rank_band(rank);
            assert_eq!(band.population(), 8, "{name}");
            assert!(band.iter().all(|sq| sq.rank() == rank), "{name}");
        }
    }

    #[test]
    fn bands_partition_the_board() {
        let files = file_bands()
            .into_iter()
            .fold(Bitboard::EMPTY_BOARD, |acc, bb| acc | bb);
        assert_eq!(files, Bitboard::FULL_BOARD);
    }

    #[test]
    fn masks_are_deterministic() {
        assert_eq!(center_of_the_world(), center_of_the_world());
        assert_eq!(file_bands(), file_bands());
    }
}
