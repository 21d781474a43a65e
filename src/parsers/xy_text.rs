//! Parser for plain `x y` sample files.
//!
//! One sample per line, two whitespace-separated decimal numbers. Blank
//! lines are ignored; anything else that is not exactly two finite numbers
//! fails the whole file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{PlotError, Result};
use crate::geometry::{PointCategory, Sample};

/// Samples and their marker categories, index-aligned
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedSamples {
    pub samples: Vec<Sample>,
    pub categories: Vec<PointCategory>,
}

/// Plain-text `x y` parser
pub struct XyText;

impl XyText {
    pub fn parse(&self, file_contents: &str) -> Result<ParsedSamples> {
        let mut parsed = ParsedSamples::default();

        for (idx, line) in file_contents.lines().enumerate() {
            let line_number = idx + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();

            match tokens.as_slice() {
                [] => continue,
                [x, y] => {
                    let sample = Sample::new(
                        parse_coordinate(x, line_number)?,
                        parse_coordinate(y, line_number)?,
                    );
                    parsed.samples.push(sample);
                    parsed.categories.push(PointCategory::from_token(y));
                }
                other => {
                    return Err(PlotError::malformed(
                        line_number,
                        format!("expected 2 values, found {}", other.len()),
                    ));
                }
            }
        }

        if parsed.samples.is_empty() {
            return Err(PlotError::EmptyDataset);
        }

        Ok(parsed)
    }
}

fn parse_coordinate(token: &str, line: usize) -> Result<f64> {
    let value: f64 = token
        .parse()
        .map_err(|_| PlotError::malformed(line, format!("'{}' is not a number", token)))?;

    if !value.is_finite() {
        return Err(PlotError::malformed(
            line,
            format!("'{}' is not a finite number", token),
        ));
    }
    Ok(value)
}

/// Read and parse a sample file from disk
pub fn load_file(path: &Path) -> Result<ParsedSamples> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PlotError::file_not_found(path),
        _ => PlotError::Io(e),
    })?;

    let parsed = XyText.parse(&contents).inspect_err(|e| {
        tracing::warn!("Rejected {}: {}", path.display(), e);
    })?;

    tracing::info!(
        "Parsed {} samples from {}",
        parsed.samples.len(),
        path.display()
    );
    Ok(parsed)
}
