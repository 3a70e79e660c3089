/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use leafline::{EngineScorer, Scorer};

/// Rank the moves available after a sequence of preservation runes.
#[derive(Debug, Parser)]
struct Cli {
    /// Score from the given book of preservation runes.
    #[arg(long)]
    from: String,

    /// Rank moves using minimax lookahead this deep.
    #[arg(long)]
    depth: u8,

    /// Load the scoring engine from this path instead of searching the usual locations.
    #[arg(long)]
    library: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let scorer = match &args.library {
        Some(path) => EngineScorer::open(path)?,
        None => EngineScorer::locate()?,
    };

    let scorings = scorer.score(&args.from, args.depth)?;

    if scorings.is_empty() {
        println!("No moves to score.");
    }

    for scoring in &scorings {
        let score = format!("{:+.3}", scoring.score);
        let score = if scoring.score > 0.0 {
            score.green()
        } else if scoring.score < 0.0 {
            score.red()
        } else {
            score.normal()
        };

        println!("{:10}\t{score}", scoring.label.as_str());
    }

    Ok(())
}
