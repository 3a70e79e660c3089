/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt::Write, fs, path::Path};

use anyhow::{Context, Result};
use log::debug;

use super::{
    center_of_the_world, file_bands, rank_band, Bitboard, MovementPattern, MovementTable,
    LANDMARK_RANKS,
};

/// File name of the generated movement tables.
pub const MOTION_FILE: &str = "motion.rs";

/// File name of the generated region masks.
pub const LANDMARK_FILE: &str = "landmark.rs";

const GENERATED_HEADER: &str = "// @generated by leafline_types. Do not edit by hand.\n\n";

/// Converts a human-readable name like `"low colonelcy"` into `LOW_COLONELCY`.
pub fn constant_name(name: &str) -> String {
    name.to_uppercase().replace(' ', "_")
}

#[inline(always)]
fn literal(bb: Bitboard) -> String {
    format!("{:#018x}", bb.inner())
}

/// Declares a [`MovementTable`] as `pub static <NAME>_MOVEMENT_TABLE: [u64; 64]`.
///
/// # Example
/// ```
/// # use leafline_types::*;
/// let decl = movement_table_declaration("pony", &MovementPattern::PONY.table());
/// assert!(decl.starts_with("pub static PONY_MOVEMENT_TABLE: [u64; 64] = [\n"));
/// assert!(decl.contains("    0x0000000000020400,\n"));
/// ```
pub fn movement_table_declaration(name: &str, table: &MovementTable) -> String {
    let mut decl = format!(
        "pub static {}_MOVEMENT_TABLE: [u64; {}] = [\n",
        constant_name(name),
        table.len()
    );

    for &entry in table {
        _ = writeln!(decl, "    {},", literal(entry));
    }

    decl.push_str("];\n");
    decl
}

/// Declares a single mask as `pub static <NAME>: u64`.
pub fn scalar_declaration(name: &str, value: Bitboard) -> String {
    format!("pub static {}: u64 = {};\n", constant_name(name), literal(value))
}

/// Declares a small array of masks as `pub static <NAME>: [u64; N]`.
pub fn array_declaration(name: &str, values: &[Bitboard]) -> String {
    let entries = values
        .iter()
        .map(|&bb| literal(bb))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "pub static {}: [u64; {}] = [{entries}];\n",
        constant_name(name),
        values.len()
    )
}

/// Source for every built-in [`MovementPattern`] table.
pub fn motion_source() -> String {
    let tables = MovementPattern::ALL
        .iter()
        .map(|pattern| movement_table_declaration(pattern.name, &pattern.table()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{GENERATED_HEADER}{tables}")
}

/// Source for the central region, the named rank bands, and the file bands.
pub fn landmark_source() -> String {
    let mut source = String::from(GENERATED_HEADER);

    source.push_str(&scalar_declaration(
        "center of the world",
        center_of_the_world(),
    ));

    for (name, rank) in LANDMARK_RANKS {
        source.push_str(&scalar_declaration(name, rank_band(rank)));
    }

    source.push_str(&array_declaration("files", &file_bands()));
    source
}

/// Writes [`motion_source`] to `motion.rs` inside `dir`.
pub fn generate_motion_file(dir: impl AsRef<Path>) -> Result<()> {
    let path = dir.as_ref().join(MOTION_FILE);
    debug!("Writing movement tables to {}", path.display());

    fs::write(&path, motion_source())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Writes [`landmark_source`] to `landmark.rs` inside `dir`.
pub fn generate_landmark_file(dir: impl AsRef<Path>) -> Result<()> {
    let path = dir.as_ref().join(LANDMARK_FILE);
    debug!("Writing region masks to {}", path.display());

    fs::write(&path, landmark_source())
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pulls every hexadecimal literal out of generated source, in order.
    fn literals(source: &str) -> Vec<u64> {
        source
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter_map(|token| token.strip_prefix("0x"))
            .map(|hex| u64::from_str_radix(hex, 16).unwrap())
            .collect()
    }

    #[test]
    fn constant_names() {
        assert_eq!(constant_name("high seventh heaven"), "HIGH_SEVENTH_HEAVEN");
        assert_eq!(constant_name("pony"), "PONY");
    }

    #[test]
    fn table_declaration_decodes_to_the_table() {
        let table = MovementPattern::FIGUREHEAD.table();
        let decl = movement_table_declaration("figurehead", &table);

        let expected = table.iter().map(Bitboard::inner).collect::<Vec<_>>();
        assert_eq!(literals(&decl), expected);
        assert!(decl.starts_with("pub static FIGUREHEAD_MOVEMENT_TABLE: [u64; 64] = [\n"));
        assert!(decl.ends_with("];\n"));
    }

    #[test]
    fn scalar_and_array_declarations() {
        assert_eq!(
            scalar_declaration("low colonelcy", rank_band(2)),
            "pub static LOW_COLONELCY: u64 = 0x0000000000ff0000;\n"
        );

        let decl = array_declaration("files", &file_bands());
        assert!(decl.starts_with("pub static FILES: [u64; 8] = [0x0101010101010101, "));
        assert_eq!(literals(&decl).len(), 8);
    }

    #[test]
    fn landmark_source_values() {
        let values = literals(&landmark_source());

        // Center, four bands, then eight files
        assert_eq!(values.len(), 13);
        assert_eq!(values[0], center_of_the_world().inner());
        assert_eq!(values[0], 0x0000_3c3c_3c3c_0000);
        assert_eq!(values[1], rank_band(1).inner());
        assert_eq!(values[3], rank_band(6).inner());
        assert_eq!(values[4], rank_band(5).inner());
    }

    #[test]
    fn motion_source_lists_pony_then_figurehead() {
        let source = motion_source();
        let pony = source.find("PONY_MOVEMENT_TABLE").unwrap();
        let figurehead = source.find("FIGUREHEAD_MOVEMENT_TABLE").unwrap();
        assert!(pony < figurehead);
        assert_eq!(literals(&source).len(), 128);
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        assert_eq!(motion_source(), motion_source());
        assert_eq!(landmark_source(), landmark_source());
    }

    #[test]
    fn writes_files_to_disk() {
        let dir = std::env::temp_dir().join(format!("leafline_emit_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        generate_motion_file(&dir).unwrap();
        generate_landmark_file(&dir).unwrap();

        assert_eq!(fs::read_to_string(dir.join(MOTION_FILE)).unwrap(), motion_source());
        assert_eq!(fs::read_to_string(dir.join(LANDMARK_FILE)).unwrap(), landmark_source());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn writing_to_a_missing_directory_fails() {
        let dir = std::env::temp_dir().join("leafline_emit_missing").join("nowhere");
        assert!(generate_motion_file(&dir).is_err());
    }
}
