/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, mem, str};

use anyhow::{bail, Context, Result};
use arrayvec::{ArrayString, ArrayVec};

/// Width, in bytes, of a move label on the wire.
pub const LABEL_WIDTH: usize = 10;

/// Number of slots in a [`ScoringBuffer`].
pub const SCORING_CAPACITY: usize = 60;

/// Size, in bytes, of one [`RawScoring`] on the wire.
pub const RAW_SCORING_SIZE: usize = LABEL_WIDTH + mem::size_of::<f32>();

/// Size, in bytes, of a whole [`ScoringBuffer`] on the wire.
pub const SCORING_BUFFER_SIZE: usize = SCORING_CAPACITY * RAW_SCORING_SIZE;

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`SCORING_CAPACITY`] scorings.
pub type ScoringList = ArrayVec<Scoring, SCORING_CAPACITY>;

/// A move label paired with the engine's score for it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Scoring {
    pub label: ArrayString<LABEL_WIDTH>,
    pub score: f32,
}

impl Scoring {
    /// Creates a new [`Scoring`], failing if `label` is longer than [`LABEL_WIDTH`] bytes.
    pub fn new(label: &str, score: f32) -> Result<Self> {
        let Ok(label) = ArrayString::from(label) else {
            bail!("Move label {label:?} is longer than {LABEL_WIDTH} bytes");
        };

        Ok(Self { label, score })
    }
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.label, self.score)
    }
}

/// One slot of the engine's result buffer, exactly as laid out in memory.
///
/// A NUL-padded label immediately followed by a native-endian `f32`, with no padding.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C, packed)]
pub struct RawScoring {
    pub movement: [u8; LABEL_WIDTH],
    pub score: f32,
}

const _: () = assert!(mem::size_of::<RawScoring>() == RAW_SCORING_SIZE);
const _: () = assert!(mem::size_of::<ScoringBuffer>() == SCORING_BUFFER_SIZE);

impl RawScoring {
    /// An unused slot: empty label, score `0.0`.
    pub const SENTINEL: Self = Self {
        movement: [0; LABEL_WIDTH],
        score: 0.0,
    };

    /// Encodes a label and score into a slot, NUL-padding the label.
    pub fn new(label: &str, score: f32) -> Result<Self> {
        let bytes = label.as_bytes();
        if bytes.len() > LABEL_WIDTH {
            bail!("Move label {label:?} is longer than {LABEL_WIDTH} bytes");
        }

        let mut movement = [0; LABEL_WIDTH];
        movement[..bytes.len()].copy_from_slice(bytes);

        Ok(Self { movement, score })
    }

    /// Reads a slot from its wire bytes.
    pub fn from_wire(bytes: &[u8; RAW_SCORING_SIZE]) -> Self {
        let mut movement = [0; LABEL_WIDTH];
        movement.copy_from_slice(&bytes[..LABEL_WIDTH]);

        let mut score = [0; mem::size_of::<f32>()];
        score.copy_from_slice(&bytes[LABEL_WIDTH..]);

        Self {
            movement,
            score: f32::from_ne_bytes(score),
        }
    }

    /// Returns `true` if this slot is unused.
    #[inline(always)]
    pub fn is_sentinel(&self) -> bool {
        let score = self.score;
        self.movement == [0; LABEL_WIDTH] && score == 0.0
    }

    /// The label text, with trailing NUL padding removed.
    ///
    /// Fails if the remaining bytes are not valid UTF-8.
    pub fn label(&self) -> Result<&str> {
        let end = self
            .movement
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |last| last + 1);

        str::from_utf8(&self.movement[..end])
            .with_context(|| format!("Move label {:?} is not valid text", &self.movement[..end]))
    }

    /// Decodes this slot into a [`Scoring`].
    pub fn render(&self) -> Result<Scoring> {
        Scoring::new(self.label()?, self.score)
    }
}

impl Default for RawScoring {
    fn default() -> Self {
        Self::SENTINEL
    }
}

/// The fixed-capacity buffer the scoring engine writes its results into.
///
/// Written in place during a single call, from slot `0` onwards. Slots the engine does not
/// use are left as [`RawScoring::SENTINEL`].
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(transparent)]
pub struct ScoringBuffer([RawScoring; SCORING_CAPACITY]);

impl ScoringBuffer {
    /// Creates a buffer with every slot set to the sentinel.
    #[inline(always)]
    pub const fn new() -> Self {
        Self([RawScoring::SENTINEL; SCORING_CAPACITY])
    }

    /// Reads a buffer from its wire bytes.
    pub fn from_wire(bytes: &[u8; SCORING_BUFFER_SIZE]) -> Self {
        let mut buffer = Self::new();

        for (slot, chunk) in buffer.0.iter_mut().zip(bytes.chunks_exact(RAW_SCORING_SIZE)) {
            // `chunks_exact` only yields chunks of the requested size
            let mut raw = [0; RAW_SCORING_SIZE];
            raw.copy_from_slice(chunk);
            *slot = RawScoring::from_wire(&raw);
        }

        buffer
    }

    /// All slots, in order.
    #[inline(always)]
    pub const fn slots(&self) -> &[RawScoring; SCORING_CAPACITY] {
        &self.0
    }

    /// All slots, mutably, in order.
    #[inline(always)]
    pub fn slots_mut(&mut self) -> &mut [RawScoring; SCORING_CAPACITY] {
        &mut self.0
    }

    /// Pointer to the first slot, for handing to the engine.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut RawScoring {
        self.0.as_mut_ptr()
    }

    /// Decodes every non-sentinel slot, preserving slot order.
    ///
    /// Fails if a used slot's label is not valid text.
    pub fn decode(&self) -> Result<ScoringList> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, raw)| !raw.is_sentinel())
            .map(|(slot, raw)| {
                raw.render()
                    .with_context(|| format!("Failed to decode scoring in slot {slot}"))
            })
            .collect()
    }
}

impl Default for ScoringBuffer {
    fn default() -> Self {
        Self::new()
    }
}
