//! Plain-text interpretation of the four moments of a column

use std::io::{self, Write};

use heartstat_stats::moments::Moments;

/// |skewness| above this is reported as skewed.
pub(crate) const SKEW_THRESHOLD: f64 = 0.2;
/// |excess kurtosis| above this is reported as lepto- or platykurtic.
pub(crate) const KURTOSIS_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub(crate) enum SkewDirection {
    #[display("right")]
    Right,
    #[display("left")]
    Left,
    #[display("not")]
    None,
}

impl SkewDirection {
    /// Classifies the unrounded skewness; the threshold itself is not skewed.
    pub(crate) fn classify(skewness: f64) -> Self {
        if skewness > SKEW_THRESHOLD {
            Self::Right
        } else if skewness < -SKEW_THRESHOLD {
            Self::Left
        } else {
            Self::None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub(crate) enum KurtosisShape {
    #[display("leptokurtic")]
    Leptokurtic,
    #[display("platykurtic")]
    Platykurtic,
    #[display("mesokurtic")]
    Mesokurtic,
}

impl KurtosisShape {
    pub(crate) fn classify(excess_kurtosis: f64) -> Self {
        if excess_kurtosis > KURTOSIS_THRESHOLD {
            Self::Leptokurtic
        } else if excess_kurtosis < -KURTOSIS_THRESHOLD {
            Self::Platykurtic
        } else {
            Self::Mesokurtic
        }
    }
}

/// Writes the moments of `column` and their interpretation, preceded by a
/// blank line.
pub(crate) fn write_report<W>(out: &mut W, column: &str, moments: &Moments) -> io::Result<()>
where
    W: Write,
{
    let Moments {
        mean,
        std_dev,
        skewness,
        excess_kurtosis,
    } = *moments;

    writeln!(out)?;
    writeln!(out, "For the attribute {column}:")?;
    writeln!(
        out,
        "Mean = {mean:.2}, Standard Deviation = {std_dev:.2}, Skewness = {skewness:.2}, and Excess Kurtosis = {excess_kurtosis:.2}."
    )?;
    writeln!(
        out,
        "The data was {} skewed and {}.",
        SkewDirection::classify(skewness),
        KurtosisShape::classify(excess_kurtosis),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skew_threshold_is_exclusive() {
        assert_eq!(SkewDirection::classify(0.2), SkewDirection::None);
        assert_eq!(SkewDirection::classify(-0.2), SkewDirection::None);
        assert_eq!(SkewDirection::classify(0.21), SkewDirection::Right);
        assert_eq!(SkewDirection::classify(-0.21), SkewDirection::Left);
        assert_eq!(SkewDirection::classify(0.0), SkewDirection::None);
    }

    #[test]
    fn test_kurtosis_shape() {
        assert_eq!(KurtosisShape::classify(3.0), KurtosisShape::Leptokurtic);
        assert_eq!(KurtosisShape::classify(-1.2), KurtosisShape::Platykurtic);
        assert_eq!(KurtosisShape::classify(0.2), KurtosisShape::Mesokurtic);
        assert_eq!(KurtosisShape::classify(-0.2), KurtosisShape::Mesokurtic);
    }

    #[test]
    fn test_classification_uses_unrounded_value() {
        // Prints as 0.20 but lies above the threshold.
        assert_eq!(SkewDirection::classify(0.2004), SkewDirection::Right);
    }

    #[test]
    fn test_report_text() {
        let moments = Moments {
            mean: 54.366_336,
            std_dev: 9.067_101,
            skewness: -0.201_459,
            excess_kurtosis: -0.542_167,
        };
        let mut out = Vec::new();
        write_report(&mut out, "age", &moments).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nFor the attribute age:\n\
             Mean = 54.37, Standard Deviation = 9.07, Skewness = -0.20, and Excess Kurtosis = -0.54.\n\
             The data was left skewed and platykurtic.\n"
        );
    }

    #[test]
    fn test_report_of_moments() {
        let moments = Moments::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, "chol", &moments).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Mean = 3.00, Standard Deviation = 1.41, Skewness = 0.00"));
        assert!(text.ends_with("The data was not skewed and platykurtic.\n"));
    }
}
