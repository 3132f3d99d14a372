//! `l3transform.config` reader
//!
//! The file is a stream of whitespace-separated tokens. Every known field is
//! written as `name = value ;`; the two row tables are written as
//! `fX[0] = v ; fX[1] = v ; ...` with exactly `fNRow` entries. Any token that
//! is not a known field name is skipped, which lets the reader digest files
//! carrying extra fields, comments or the C++-style wrapper the writer emits.

use std::fs;
use std::path::Path;

use tracing::{debug, error};

use super::fields::{
    array_entry_name, scalar_field, Field, PADS_PER_ROW_FIELD, ROW_RADIUS_FIELD,
};
use super::CONFIG_FILE_NAME;
use crate::geometry::Geometry;
use crate::{Result, TransformError};

/// Reads `dir/l3transform.config` on top of `base`.
///
/// Fields absent from the file keep their value from `base`. The returned
/// geometry keeps `base.version`; bumping it is the caller's business.
pub fn read_config(dir: impl AsRef<Path>, base: &Geometry) -> Result<Geometry> {
    let path = dir.as_ref().join(CONFIG_FILE_NAME);
    let contents = fs::read_to_string(&path).map_err(|source| TransformError::ConfigUnavailable {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&contents, base)
}

/// Parses configuration text on top of `base`.
pub fn parse_config(text: &str, base: &Geometry) -> Result<Geometry> {
    let mut geometry = base.clone();
    let mut tokens = Tokens::new(text);
    let mut skipped = 0usize;

    let first_radius = array_entry_name(ROW_RADIUS_FIELD, 0);
    let first_pads = array_entry_name(PADS_PER_ROW_FIELD, 0);

    while let Some(name) = tokens.next() {
        if let Some(scalar) = scalar_field(name) {
            let value = tokens.assignment(name)?;
            apply_scalar(&mut geometry, scalar.name, scalar.field, value, &tokens)?;
        } else if name == first_radius {
            let value = tokens.assignment(name)?;
            geometry.row_radius = read_table(
                &mut tokens,
                ROW_RADIUS_FIELD,
                value,
                geometry.row_count,
                Tokens::parse_float,
            )?;
        } else if name == first_pads {
            let value = tokens.assignment(name)?;
            geometry.pads_per_row = read_table(
                &mut tokens,
                PADS_PER_ROW_FIELD,
                value,
                geometry.row_count,
                Tokens::parse_count,
            )?;
        } else {
            skipped += 1;
        }
    }

    debug!(skipped, "configuration parsed");
    Ok(geometry)
}

/// Reads the rest of a row table whose entry 0 carried `first`.
///
/// `rows` comes from the file, so the buffer grows with the entries actually
/// present rather than being sized from it up front.
fn read_table<'a, T>(
    tokens: &mut Tokens<'a>,
    field: &'static str,
    first: &'a str,
    rows: usize,
    parse: fn(&Tokens<'a>, &str) -> Result<T>,
) -> Result<Vec<T>> {
    // each entry spans four tokens: name = value ;
    let mut table = Vec::with_capacity(rows.min(tokens.remaining() / 4 + 1));
    table.push(parse(&*tokens, first)?);
    for index in 1..rows {
        let value = tokens.array_entry(field, index)?;
        table.push(parse(&*tokens, value)?);
    }
    Ok(table)
}

fn apply_scalar(
    geometry: &mut Geometry,
    name: &str,
    field: Field,
    value: &str,
    tokens: &Tokens<'_>,
) -> Result<()> {
    match field {
        Field::Count { set, expected, .. } => {
            let v = tokens.parse_count(value)?;
            if let Some(expected) = expected.filter(|&e| e != v) {
                error!(
                    field = name,
                    expected,
                    found = v,
                    "structural constant differs from the reference detector; \
                     row-indexed tables and region boundaries depend on it"
                );
            }
            set(geometry, v);
        }
        Field::Signed { set, .. } => {
            let v = value.parse::<i32>().map_err(|e| tokens.value_error(format!(
                "expected an integer, found '{}': {}",
                value, e
            )))?;
            set(geometry, v);
        }
        Field::Float { set, .. } => set(geometry, tokens.parse_float(value)?),
    }
    Ok(())
}

/// Whitespace tokenizer that remembers its position for error reports.
struct Tokens<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
    /// Index of the most recent value token.
    value_pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace().collect(),
            pos: 0,
            value_pos: 0,
        }
    }

    fn next(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }

    fn error(&self, message: String) -> TransformError {
        TransformError::Parse {
            token_index: self.pos.saturating_sub(1),
            message,
        }
    }

    fn expect(&mut self, literal: &str, context: &str) -> Result<()> {
        match self.next() {
            Some(t) if t == literal => Ok(()),
            Some(t) => Err(self.error(format!(
                "expected '{}' after {}, found '{}'",
                literal, context, t
            ))),
            None => Err(self.error(format!(
                "unexpected end of file, expected '{}' after {}",
                literal, context
            ))),
        }
    }

    /// Consumes `= value ;` and returns the value token.
    fn assignment(&mut self, name: &str) -> Result<&'a str> {
        self.expect("=", name)?;
        let value = self
            .next()
            .ok_or_else(|| self.error(format!("unexpected end of file, missing value of {}", name)))?;
        self.value_pos = self.pos - 1;
        self.expect(";", name)?;
        Ok(value)
    }

    /// Consumes `field[index] = value ;`. Running out of tokens, or finding
    /// any other name, means the table is shorter than the row count.
    fn array_entry(&mut self, field: &'static str, index: usize) -> Result<&'a str> {
        let expected = array_entry_name(field, index);
        match self.tokens.get(self.pos) {
            Some(&name) if name == expected => {
                self.pos += 1;
                self.assignment(name)
            }
            _ => Err(TransformError::MissingArrayEntry { field, index }),
        }
    }

    fn value_error(&self, message: String) -> TransformError {
        TransformError::Parse {
            token_index: self.value_pos,
            message,
        }
    }

    fn parse_count(&self, value: &str) -> Result<usize> {
        value.parse::<usize>().map_err(|e| {
            self.value_error(format!("expected a non-negative integer, found '{}': {}", value, e))
        })
    }

    fn parse_float(&self, value: &str) -> Result<f64> {
        value
            .parse::<f64>()
            .map_err(|e| self.value_error(format!("expected a number, found '{}': {}", value, e)))
    }
}
