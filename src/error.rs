//! Error types for Tsetlin Machine.

use core::fmt;

/// # Overview
///
/// Errors that can occur when building or using a Tsetlin Machine.
///
/// Configuration variants are returned before any automaton is allocated.
/// Input variants are returned at the call boundary, never after a partial
/// update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingClauses,
    MissingFeatures,
    InvalidStates(i16),
    InvalidSpecificity,
    InvalidThreshold,
    TooFewClasses(usize),
    TooFewClauses { clauses: usize, classes: usize },
    EmptyDataset,
    DimensionMismatch { expected: usize, got: usize },
    NonBinaryInput { index: usize, value: u8 },
    InvalidLabel { label: usize, n_classes: usize },
    LabelCountMismatch { samples: usize, labels: usize }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingClauses => write!(f, "n_clauses must be > 0"),
            Self::MissingFeatures => write!(f, "n_features must be > 0"),
            Self::InvalidStates(n) => {
                write!(f, "n_states must be even and >= 2, got {n}")
            }
            Self::InvalidSpecificity => write!(f, "s must be > 1.0"),
            Self::InvalidThreshold => write!(f, "threshold must be > 0"),
            Self::TooFewClasses(n) => write!(f, "need at least 2 classes, got {n}"),
            Self::TooFewClauses {
                clauses,
                classes
            } => {
                write!(f, "{clauses} clauses cannot be split across {classes} classes")
            }
            Self::EmptyDataset => write!(f, "dataset cannot be empty"),
            Self::DimensionMismatch {
                expected,
                got
            } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
            Self::NonBinaryInput {
                index,
                value
            } => {
                write!(f, "input[{index}] = {value} is not binary")
            }
            Self::InvalidLabel {
                label,
                n_classes
            } => {
                write!(f, "label {label} out of range for {n_classes} classes")
            }
            Self::LabelCountMismatch {
                samples,
                labels
            } => {
                write!(f, "{samples} samples but {labels} labels")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// # Overview
///
/// Result type for Tsetlin Machine operations.
pub type Result<T> = core::result::Result<T, Error>;
