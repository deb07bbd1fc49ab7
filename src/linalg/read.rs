use std::error::Error as StdError;
use std::fmt;
use std::path::Path;

use csv::ReaderBuilder;
use num_traits::Float;
use serde::de::DeserializeOwned;

use super::matrix::Matrix;
use crate::error::AlgebraError;

/// Errors raised while loading a matrix from a delimited file.
#[derive(Debug)]
pub enum ReadError {
    /// Underlying I/O failure.
    Io(std::io::Error),
    /// The file is not valid CSV or a field is not a number.
    Csv(csv::Error),
    /// The file contains no data records.
    EmptyFile,
    /// The records do not form a rectangular matrix.
    Malformed(AlgebraError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "I/O error: {e}"),
            ReadError::Csv(e) => write!(f, "CSV parsing error: {e}"),
            ReadError::EmptyFile => write!(f, "CSV file contains no data records"),
            ReadError::Malformed(e) => write!(f, "{e}"),
        }
    }
}

impl StdError for ReadError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            ReadError::Csv(e) => Some(e),
            ReadError::EmptyFile => None,
            ReadError::Malformed(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(e: std::io::Error) -> Self {
        ReadError::Io(e)
    }
}

impl From<csv::Error> for ReadError {
    fn from(e: csv::Error) -> Self {
        ReadError::Csv(e)
    }
}

impl<F: Float> Matrix<F> {
    /// Reads a row-major matrix from a headerless delimited numeric file,
    /// one matrix row per record.
    ///
    /// # Errors
    /// [`ReadError`] on I/O or parse failure, an empty file, or ragged
    /// records.
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Self, ReadError>
    where
        F: DeserializeOwned,
    {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)?;

        let mut rows = Vec::new();
        for result in rdr.deserialize() {
            let record: Vec<F> = result?;
            rows.push(record);
        }

        if rows.is_empty() {
            return Err(ReadError::EmptyFile);
        }

        Self::from_rows(rows).map_err(ReadError::Malformed)
    }
}
