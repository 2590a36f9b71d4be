//! Dataset Module
//! Shared x-sequence plus named y-series, validated on construction.

use std::fmt::Write as _;
use thiserror::Error;

/// A comparison chart needs at least two series.
pub const MIN_SERIES: usize = 2;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Invalid input: series '{label}' has {actual} points, expected {expected}")]
    LengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid input: {actual} series given, at least {} required", MIN_SERIES)]
    TooFewSeries { actual: usize },
}

/// One named sequence of y values drawn against the dataset's x values.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    label: String,
    values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Shared x-sequence with two or more series of matching length.
///
/// Fields are private so every `Dataset` has passed [`Dataset::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Vec<f64>,
    series: Vec<Series>,
}

impl Dataset {
    /// Build a dataset, rejecting any series whose length differs from `x`
    /// and fewer than [`MIN_SERIES`] series.
    pub fn new(x: Vec<f64>, series: Vec<Series>) -> Result<Self, DatasetError> {
        for s in &series {
            if s.values.len() != x.len() {
                return Err(DatasetError::LengthMismatch {
                    label: s.label.clone(),
                    expected: x.len(),
                    actual: s.values.len(),
                });
            }
        }

        if series.len() < MIN_SERIES {
            return Err(DatasetError::TooFewSeries {
                actual: series.len(),
            });
        }

        Ok(Self { x, series })
    }

    /// Build from borrowed columns: `(label, y values)` pairs.
    pub fn from_columns(x: &[f64], columns: &[(&str, &[f64])]) -> Result<Self, DatasetError> {
        let series = columns
            .iter()
            .map(|(label, values)| Series::new(*label, values.to_vec()))
            .collect();
        Self::new(x.to_vec(), series)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Number of points in every series.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// (x, y) pairs of a series, in the order they were supplied.
    pub fn points(&self, series: &Series) -> Vec<(f64, f64)> {
        self.x
            .iter()
            .copied()
            .zip(series.values.iter().copied())
            .collect()
    }

    /// Tab-separated timing table, one row per x value.
    pub fn summary_table(&self) -> String {
        let mut out = String::from("n");
        for s in &self.series {
            let _ = write!(out, "\t{} Time (s)", s.label);
        }
        out.push('\n');

        for (i, x) in self.x.iter().enumerate() {
            let _ = write!(out, "{}", x);
            for s in &self.series {
                let _ = write!(out, "\t{:.6}", s.values[i]);
            }
            out.push('\n');
        }

        out
    }
}
