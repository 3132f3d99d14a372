//! `l3transform.config` writer
//!
//! Emits the layout existing tools produce: a `void AliL3Transform::Init(){`
//! wrapper, the sector block, the slice block and both row tables, one
//! `name = value ;` statement per line. The wrapper and the `//` comment
//! lines are skipped by the reader.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use super::fields::{Field, PADS_PER_ROW_FIELD, ROW_RADIUS_FIELD, SCALAR_FIELDS};
use super::CONFIG_FILE_NAME;
use crate::geometry::Geometry;
use crate::Result;

/// Fractional digits of the row radii.
const RADIUS_DIGITS: usize = 15;

/// Renders a geometry in configuration-file form.
pub fn format_config(geometry: &Geometry) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_into(&mut out, geometry);
    out
}

/// Writes `dir/l3transform.config` and returns the file path.
pub fn write_config(dir: impl AsRef<Path>, geometry: &Geometry) -> Result<PathBuf> {
    let path = dir.as_ref().join(CONFIG_FILE_NAME);
    fs::write(&path, format_config(geometry))?;
    Ok(path)
}

fn write_into(out: &mut String, geometry: &Geometry) -> std::fmt::Result {
    writeln!(out, "void AliL3Transform::Init(){{")?;

    for scalar in SCALAR_FIELDS {
        match scalar.name {
            "fNTimeBins" => writeln!(out, "  //sector:")?,
            "fNSlice" => writeln!(out, "\n  //slices:")?,
            _ => {}
        }
        match scalar.field {
            Field::Count { get, .. } => writeln!(out, "  {} = {} ;", scalar.name, get(geometry))?,
            Field::Signed { get, .. } => writeln!(out, "  {} = {} ;", scalar.name, get(geometry))?,
            Field::Float { get, digits, .. } => {
                writeln!(out, "  {} = {:.*} ;", scalar.name, digits, get(geometry))?
            }
        }
    }

    for (i, radius) in geometry.row_radius.iter().enumerate() {
        writeln!(out, "  {}[{}] = {:.*} ;", ROW_RADIUS_FIELD, i, RADIUS_DIGITS, radius)?;
    }
    for (i, pads) in geometry.pads_per_row.iter().enumerate() {
        writeln!(out, "  {}[{}] = {} ;", PADS_PER_ROW_FIELD, i, pads)?;
    }

    writeln!(out, "}}")
}
