//! Pearson correlation between numeric columns
//!
//! Columns may contain missing values (`None`). Each pair of columns is
//! correlated over the rows where both values are present, so a missing
//! value in one column does not discard the row for unrelated pairs.
//!
//! A coefficient is undefined (`NaN`) when fewer than two complete pairs
//! exist or when either side has zero variance.
//!
//! # Examples
//!
//! ```
//! use heartstat_stats::correlation::CorrelationMatrix;
//!
//! let x = [Some(1.0), Some(2.0), Some(3.0)];
//! let y = [Some(2.0), Some(4.0), Some(6.0)];
//! let z = [Some(3.0), Some(2.0), Some(1.0)];
//! let matrix = CorrelationMatrix::from_columns([("x", &x[..]), ("y", &y[..]), ("z", &z[..])]);
//!
//! assert!((matrix.get(0, 1) - 1.0).abs() < 1e-12);
//! assert!((matrix.get(0, 2) + 1.0).abs() < 1e-12);
//! ```

/// Pearson product-moment correlation coefficient of paired samples.
///
/// Returns `None` if there are fewer than two pairs or if either variable
/// is constant.
///
/// # Examples
///
/// ```
/// use heartstat_stats::correlation::pearson;
///
/// let r = pearson([(1.0, 1.0), (2.0, 3.0), (3.0, 2.0)]).unwrap();
/// assert!((r - 0.5).abs() < 1e-12);
/// assert_eq!(pearson([(1.0, 5.0), (2.0, 5.0)]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson<I>(pairs: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let pairs = pairs.into_iter().collect::<Vec<_>>();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;
    let (sxy, sxx, syy) = pairs
        .iter()
        .fold((0.0, 0.0, 0.0), |(sxy, sxx, syy), (x, y)| {
            let dx = x - mean_x;
            let dy = y - mean_y;
            (sxy + dx * dy, sxx + dx * dx, syy + dy * dy)
        });

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// Square matrix of pairwise Pearson correlation coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    /// Row-major coefficients, `NaN` where undefined.
    values: Vec<f64>,
}

impl CorrelationMatrix {
    /// Correlates every pair of the given named columns.
    ///
    /// # Panics
    ///
    /// Panics if the columns have different lengths.
    #[must_use]
    pub fn from_columns<'a, I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, &'a [Option<f64>])>,
        S: Into<String>,
    {
        let (names, columns): (Vec<String>, Vec<&[Option<f64>]>) = columns
            .into_iter()
            .map(|(name, values)| (name.into(), values))
            .unzip();
        assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "columns must have the same length"
        );

        let dim = names.len();
        let mut values = vec![f64::NAN; dim * dim];
        for i in 0..dim {
            for j in i..dim {
                let pairs = columns[i]
                    .iter()
                    .zip(columns[j])
                    .filter_map(|(x, y)| Some(((*x)?, (*y)?)));
                let r = pearson(pairs).map_or(f64::NAN, |r| if i == j { 1.0 } else { r });
                values[i * dim + j] = r;
                values[j * dim + i] = r;
            }
        }

        Self { names, values }
    }

    /// Column names, in row/column order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows (and columns) of the matrix.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.names.len()
    }

    /// Coefficient between the `row`-th and `col`-th column.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.dim() + col]
    }

    /// Coefficient between two columns looked up by name.
    #[must_use]
    pub fn get_by_name(&self, a: &str, b: &str) -> Option<f64> {
        let row = self.names.iter().position(|n| n == a)?;
        let col = self.names.iter().position(|n| n == b)?;
        Some(self.get(row, col))
    }

    /// Iterates over the rows as `(name, coefficients)`.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.chunks(self.dim().max(1)))
    }
}
