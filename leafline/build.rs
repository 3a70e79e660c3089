use std::env;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // Re-run the build script if it was changed
    println!("cargo::rerun-if-changed=build.rs");

    let outdir = env::var_os("OUT_DIR").context("OUT_DIR is not set")?;

    // Generate PONY_MOVEMENT_TABLE and FIGUREHEAD_MOVEMENT_TABLE
    leafline_types::generate_motion_file(&outdir)?;

    // Generate the central region, rank bands, and file bands
    leafline_types::generate_landmark_file(&outdir)?;

    Ok(())
}
