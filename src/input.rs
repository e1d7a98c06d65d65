//! Reading text records and extracting their numeric keys.
//!
//! One record per line. Blank lines and lines starting with `#` are skipped.
//! The key is a single field of the record, selected by a [`KeyColumn`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rayon::prelude::*;

use crate::error::{NumdistError, Result};

/// Path argument meaning "read standard input".
pub const STDIN_MARKER: &str = "-";

/// Which field of a record holds the key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyColumn {
    index: usize,
    /// `None` splits on any run of whitespace.
    delimiter: Option<String>,
}

impl KeyColumn {
    #[must_use]
    pub const fn new(index: usize, delimiter: Option<String>) -> Self {
        Self { index, delimiter }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    /// The selected field of `record`, trimmed. `None` if the record is too short.
    #[must_use]
    pub fn field<'a>(&self, record: &'a str) -> Option<&'a str> {
        match self.delimiter.as_deref() {
            None => record.split_whitespace().nth(self.index),
            Some(delim) => record.split(delim).nth(self.index).map(str::trim),
        }
    }
}

/// A non-blank, non-comment input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source.
    pub line: usize,
    pub text: String,
}

/// A parsed key and the line it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub line: usize,
    pub key: f64,
}

/// Read every data line from `reader`.
///
/// # Errors
/// Returns an error if reading fails.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        records.push(Record {
            line: i + 1,
            text: line.trim_end_matches('\r').to_string(),
        });
    }
    Ok(records)
}

/// Parse the key of every record in parallel, keeping input order.
///
/// # Errors
/// Returns `Parse` for the first record (by line) whose key field is missing
/// or not a number.
pub fn parse_samples(records: &[Record], column: &KeyColumn) -> Result<Vec<Sample>> {
    let parsed: Vec<Result<Sample>> = records
        .par_iter()
        .map(|record| parse_sample(record, column))
        .collect();
    parsed.into_iter().collect()
}

fn parse_sample(record: &Record, column: &KeyColumn) -> Result<Sample> {
    let field = column.field(&record.text).unwrap_or("");
    match field.parse::<f64>() {
        Ok(key) => Ok(Sample {
            line: record.line,
            key,
        }),
        Err(_) => Err(NumdistError::Parse {
            line: record.line,
            value: field.to_string(),
        }),
    }
}

/// Read and parse samples from `reader`.
///
/// # Errors
/// Returns an error if reading fails or a key cannot be parsed.
pub fn read_samples<R: BufRead>(reader: R, column: &KeyColumn) -> Result<Vec<Sample>> {
    parse_samples(&read_records(reader)?, column)
}

/// Open `path` for reading, or standard input when `path` is `None` or `-`.
///
/// # Errors
/// Returns `FileRead` if the file cannot be opened.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path.as_os_str() != STDIN_MARKER => {
            let file = File::open(path).map_err(|source| NumdistError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
