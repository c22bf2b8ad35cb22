use std::fmt;

/// Why a volume entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountProblem {
    Empty,
    NotANumber,
    NotFinite,
    NotPositive,
}

impl fmt::Display for AmountProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("no amount given"),
            Self::NotANumber => f.write_str("not a number"),
            Self::NotFinite => f.write_str("not a finite number"),
            Self::NotPositive => f.write_str("must be greater than zero"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MixError {
    InvalidAmount { input: String, problem: AmountProblem },
    UnknownGrade(String),
    UnknownCementProfile { grade: String, profile: String },
    DataError(String),
}

pub type Result<T> = std::result::Result<T, MixError>;

impl fmt::Display for MixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount { input, problem } => {
                write!(f, "invalid amount '{input}': {problem}")
            }
            Self::UnknownGrade(grade) => write!(f, "unknown concrete grade: {grade}"),
            Self::UnknownCementProfile { grade, profile } => {
                write!(f, "unknown cement profile '{profile}' for grade '{grade}'")
            }
            Self::DataError(msg) => write!(f, "data error: {msg}"),
        }
    }
}

impl std::error::Error for MixError {}
