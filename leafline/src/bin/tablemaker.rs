/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::PathBuf;

use clap::Parser;

use leafline::{
    generate_landmark_file, generate_motion_file, reach, MovementPattern, Square, LANDMARK_FILE,
    MOTION_FILE,
};

/// Write the movement tables and region masks as Rust source.
#[derive(Debug, Parser)]
struct Cli {
    /// Directory to write `motion.rs` and `landmark.rs` into.
    #[arg(long, default_value = "src")]
    out_dir: PathBuf,

    /// Instead of writing files, print what each pattern reaches from `<rank>,<file>`.
    #[arg(long)]
    show: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    if let Some(coords) = &args.show {
        let square = Square::from_coords(coords)?;

        for pattern in MovementPattern::ALL {
            println!("{} from {square}:\n{}\n", pattern.name, reach(square, pattern.offsets));
        }

        return Ok(());
    }

    generate_motion_file(&args.out_dir)?;
    println!("Wrote {MOTION_FILE}!");

    generate_landmark_file(&args.out_dir)?;
    println!("Wrote {LANDMARK_FILE}!");

    Ok(())
}
