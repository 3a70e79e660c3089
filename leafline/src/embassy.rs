/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    ffi::{c_char, CString},
    fmt,
    path::Path,
};

use anyhow::{anyhow, Context, Result};
use libloading::Library;
use log::{debug, info};

use super::{RawScoring, ScoringBuffer, ScoringList};

/// Signature of the engine's `score` entry point.
///
/// Takes NUL-terminated preservation runes, a search depth, and a pointer to
/// [`SCORING_CAPACITY`](crate::SCORING_CAPACITY) slots to fill in place.
pub type ScoreFn = unsafe extern "C" fn(*const c_char, u8, *mut RawScoring);

/// Name of the symbol exported by the scoring engine.
pub const ENTRY_POINT: &[u8] = b"score";

/// Places the scoring engine is searched for, in order.
pub const LIBRARY_LOCATIONS: [&str; 3] = [
    "./libleafline.so",
    "./target/release/libleafline.so",
    "./target/debug/libleafline.so",
];

/// Anything that can rank the moves available after a sequence of preservation runes.
pub trait Scorer {
    /// Scores every move available after `preservation_runes`, searching `depth` plies ahead.
    ///
    /// Both arguments are passed through untouched; their meaning belongs to the engine.
    fn score(&self, preservation_runes: &str, depth: u8) -> Result<ScoringList>;
}

/// A [`Scorer`] backed by the external scoring engine's `score` entry point.
pub struct EngineScorer {
    entry_point: ScoreFn,

    /// Keeps `entry_point` alive. `None` if the entry point lives in this process.
    _library: Option<Library>,
}

impl EngineScorer {
    /// Loads the scoring engine at `path` and resolves its entry point.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // SAFETY: The engine library has no load-time initialisers with preconditions.
        let library = unsafe { Library::new(path) }
            .with_context(|| format!("Failed to load scoring engine from {}", path.display()))?;

        // SAFETY: `ScoreFn` matches the signature the engine exports under `ENTRY_POINT`.
        let entry_point = unsafe { library.get::<ScoreFn>(ENTRY_POINT) }
            .map(|symbol| *symbol)
            .with_context(|| format!("{} has no `score` entry point", path.display()))?;

        info!("Loaded scoring engine from {}", path.display());

        Ok(Self {
            entry_point,
            _library: Some(library),
        })
    }

    /// Loads the first scoring engine found in [`LIBRARY_LOCATIONS`].
    pub fn locate() -> Result<Self> {
        Self::locate_among(&LIBRARY_LOCATIONS)
    }

    /// Loads the first scoring engine that exists among `candidates`.
    pub fn locate_among(candidates: &[impl AsRef<Path>]) -> Result<Self> {
        let path = candidates
            .iter()
            .map(|candidate| -> &Path { candidate.as_ref() })
            .find(|path| path.exists())
            .ok_or(anyhow!("couldn't locate libleafline.so!"))?;

        Self::open(path)
    }

    /// Wraps an entry point that is already present in this process.
    ///
    /// # Safety
    ///
    /// `entry_point` must only read the NUL-terminated string it is given and must write
    /// at most [`SCORING_CAPACITY`](crate::SCORING_CAPACITY) slots through the buffer pointer.
    pub const unsafe fn from_entry_point(entry_point: ScoreFn) -> Self {
        Self {
            entry_point,
            _library: None,
        }
    }
}

impl Scorer for EngineScorer {
    fn score(&self, preservation_runes: &str, depth: u8) -> Result<ScoringList> {
        let runes = CString::new(preservation_runes)
            .context("Preservation runes cannot contain NUL bytes")?;
        let mut buffer = ScoringBuffer::new();

        debug!("Scoring {preservation_runes:?} at depth {depth}");

        // SAFETY: `runes` and `buffer` outlive the call, and `buffer` has room for every slot
        // the engine may write.
        unsafe { (self.entry_point)(runes.as_ptr(), depth, buffer.as_mut_ptr()) };

        let scorings = buffer.decode()?;
        debug!("Engine returned {} scorings", scorings.len());

        Ok(scorings)
    }
}

impl fmt::Debug for EngineScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineScorer")
            .field("entry_point", &(self.entry_point as *const ()))
            .field("loaded", &self._library.is_some())
            .finish()
    }
}
