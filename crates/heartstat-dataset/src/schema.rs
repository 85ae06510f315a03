//! Column names and coded domains of the heart-disease table

use std::ops::RangeInclusive;

pub const AGE: &str = "age";
pub const SEX: &str = "sex";
/// Chest-pain type.
pub const CP: &str = "cp";
/// Serum cholesterol in mg/dl.
pub const CHOL: &str = "chol";
/// Fasting blood sugar > 120 mg/dl.
pub const FBS: &str = "fbs";
/// Resting ECG result.
pub const RESTECG: &str = "restecg";
/// Exercise-induced angina.
pub const EXANG: &str = "exang";
/// Slope of the peak exercise ST segment.
pub const SLOPE: &str = "slope";
/// Number of major vessels colored by fluoroscopy.
pub const CA: &str = "ca";
/// Thalassemia.
pub const THAL: &str = "thal";
/// Disease label: 0 = no disease, 1 = disease.
pub const TARGET: &str = "target";

/// Columns every input file must provide.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    AGE, SEX, CP, CHOL, FBS, RESTECG, EXANG, SLOPE, CA, THAL, TARGET,
];

/// Columns holding integer-coded categories.
pub const CATEGORICAL_COLUMNS: [&str; 9] =
    [SEX, CP, FBS, RESTECG, EXANG, SLOPE, CA, THAL, TARGET];

pub const TARGET_DOMAIN: RangeInclusive<i64> = 0..=1;
pub const CP_DOMAIN: RangeInclusive<i64> = 0..=3;

/// Columns whose codes are checked against a fixed domain after cleaning.
pub const CODED_DOMAINS: [(&str, RangeInclusive<i64>); 2] =
    [(TARGET, TARGET_DOMAIN), (CP, CP_DOMAIN)];

/// Display names of the disease labels, indexed by code.
pub const TARGET_LABELS: [&str; 2] = ["No Disease", "Disease"];

/// Display names of the chest-pain types, indexed by code.
pub const CHEST_PAIN_LABELS: [&str; 4] = [
    "Typical Angina",
    "Atypical Angina",
    "Non-Anginal",
    "Asymptomatic",
];
