/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Include the pre-generated region masks
include!(concat!(env!("OUT_DIR"), "/landmark.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{center_of_the_world, file_bands, rank_band, Bitboard, Square};

    #[test]
    fn compiled_masks_match_generation() {
        assert_eq!(CENTER_OF_THE_WORLD, center_of_the_world().inner());
        assert_eq!(LOW_SEVENTH_HEAVEN, rank_band(1).inner());
        assert_eq!(LOW_COLONELCY, rank_band(2).inner());
        assert_eq!(HIGH_COLONELCY, rank_band(5).inner());
        assert_eq!(HIGH_SEVENTH_HEAVEN, rank_band(6).inner());
        assert_eq!(FILES, file_bands().map(|bb| bb.inner()));
    }

    #[test]
    fn concerning_maps_and_territories() {
        for (file, pins) in FILES.iter().enumerate() {
            let squares = Bitboard::new(*pins).iter().collect::<Vec<Square>>();
            assert_eq!(squares.len(), 8);
            for square in squares {
                assert_eq!(square.file() as usize, file);
            }
        }
    }

    #[test]
    fn center_is_sixteen_squares() {
        assert_eq!(CENTER_OF_THE_WORLD.count_ones(), 16);
        assert_eq!(FILES[0], 0x0101_0101_0101_0101);
    }
}
