/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![doc = include_str!("../README.md")]

pub use leafline_types::*;

/// The [`Scorer`] interface and an adapter for the external scoring engine.
mod embassy;
/// Region masks generated at build time.
mod landmark;
/// Movement tables generated at build time.
mod motion;
/// Wire format and decoding of the engine's result buffer.
mod scoring;

pub use embassy::*;
pub use landmark::*;
pub use motion::*;
pub use scoring::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::embassy::*;
    pub use crate::landmark::*;
    pub use crate::motion::*;
    pub use crate::scoring::*;
    pub use leafline_types::*;
}
