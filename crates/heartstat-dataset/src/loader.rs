//! CSV loading
//!
//! The first row must be a header naming every column of
//! [`REQUIRED_COLUMNS`](crate::schema::REQUIRED_COLUMNS). Extra columns are
//! kept in file order. Fields are parsed with [`Value::parse`].

use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use crate::{
    dataset::{Column, Dataset, Value},
    schema::REQUIRED_COLUMNS,
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("input file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[display("failed to read {}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("malformed CSV")]
    Csv { source: csv::Error },
    #[display("required column '{name}' is missing from the header")]
    MissingColumn { name: String },
    #[display("column '{name}' appears more than once in the header")]
    DuplicateColumn { name: String },
}

impl Dataset {
    /// Loads a dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if `path` does not exist, and the
    /// errors of [`Dataset::from_reader`] for malformed content.
    pub fn from_csv_path<P>(path: P) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            let path = path.to_owned();
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound { path }
            } else {
                LoadError::Io { path, source }
            }
        })?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            rows = dataset.num_rows(),
            columns = dataset.num_columns(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Loads a dataset from CSV text.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Csv`] if the CSV is malformed, including rows whose
    ///   field count differs from the header
    /// - [`LoadError::MissingColumn`] if a required column is absent
    /// - [`LoadError::DuplicateColumn`] if a header name repeats
    pub fn from_reader<R>(reader: R) -> Result<Self, LoadError>
    where
        R: io::Read,
    {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|source| LoadError::Csv { source })?
            .iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();

        let mut seen = HashSet::new();
        if let Some(name) = headers.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(LoadError::DuplicateColumn { name: name.clone() });
        }
        if let Some(name) = REQUIRED_COLUMNS
            .iter()
            .find(|required| !seen.contains(**required))
        {
            return Err(LoadError::MissingColumn {
                name: (*name).to_owned(),
            });
        }

        let mut columns = vec![Vec::new(); headers.len()];
        for record in reader.records() {
            let record = record.map_err(|source| LoadError::Csv { source })?;
            for (values, field) in columns.iter_mut().zip(record.iter()) {
                values.push(Value::parse(field));
            }
        }

        let columns = headers
            .into_iter()
            .zip(columns)
            .map(|(name, values)| Column::new(name, values))
            .collect();
        Ok(Dataset::new(columns))
    }
}
