//! Delimited scan table loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, ScanError};
use crate::grid::Grid;
use crate::matrix::RadiusMatrix;
use crate::options::LoaderOptions;

/// Reads a delimited numeric table into a [`RadiusMatrix`].
///
/// The first `header_rows` lines are skipped whatever they contain. After that,
/// anything from a `#` to the end of the line is a comment, blank lines are
/// ignored and every remaining line is one row of radius samples.
#[derive(Debug, Clone, Default)]
pub struct ScanLoader {
    options: LoaderOptions,
}

impl ScanLoader {
    /// Creates a loader, rejecting options that fail [`LoaderOptions::validate`].
    pub fn new(options: LoaderOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Returns the loader options.
    #[must_use]
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Loads the scan stored at `path`.
    ///
    /// Returns [`ScanError::NotFound`] when the path is not a readable file and
    /// [`ScanError::Format`] when the table is malformed.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<RadiusMatrix> {
        let path = path.as_ref();
        let not_found = |source| ScanError::NotFound {
            path: path.to_path_buf(),
            source,
        };

        let metadata = std::fs::metadata(path).map_err(not_found)?;
        if !metadata.is_file() {
            return Err(not_found(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        let file = File::open(path).map_err(not_found)?;

        let matrix = self.load_from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded scan '{}' ({} angles x {} depths)",
            path.display(),
            matrix.angles(),
            matrix.depths()
        );
        Ok(matrix)
    }

    /// Parses a scan table from any buffered reader.
    ///
    /// Header lines are skipped as raw bytes. Every later line must be UTF-8.
    pub fn load_from_reader(&self, mut reader: impl BufRead) -> Result<RadiusMatrix> {
        let delimiter = self.options.delimiter;
        let mut cols: Option<usize> = None;
        let mut rows = 0;
        let mut data = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            if line_no <= self.options.header_rows {
                continue;
            }

            let line = std::str::from_utf8(&buf)
                .map_err(|_| ScanError::format(line_no, "line is not valid UTF-8"))?;
            // everything after '#' is a comment
            let content = line.split_once('#').map_or(line, |(head, _)| head);
            let trimmed = content.trim();
            if trimmed.is_empty() {
                continue;
            }

            let start = data.len();
            for field in trimmed.split(delimiter) {
                data.push(parse_field(field, line_no)?);
            }
            let width = data.len() - start;

            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(ScanError::format(
                        line_no,
                        format!("expected {expected} columns, found {width}"),
                    ));
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let Some(cols) = cols else {
            return Err(ScanError::format(
                self.options.header_rows + 1,
                "no data rows after the header",
            ));
        };

        RadiusMatrix::new(Grid::from_vec(rows, cols, data)?)
    }
}

fn parse_field(field: &str, line_no: usize) -> Result<f64> {
    let field = field.trim();
    let value: f64 = field
        .parse()
        .map_err(|_| ScanError::format(line_no, format!("'{field}' is not a number")))?;
    if !value.is_finite() {
        return Err(ScanError::format(
            line_no,
            format!("'{field}' is not a finite radius"),
        ));
    }
    if value < 0.0 {
        return Err(ScanError::format(
            line_no,
            format!("negative radius {value}"),
        ));
    }
    Ok(value)
}
