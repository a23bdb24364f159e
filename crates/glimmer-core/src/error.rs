use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("{num1} + {num2} overflows")]
    SumOverflow { num1: i64, num2: i64 },

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("invalid color literal '{0}'")]
    InvalidColor(String),

    /// Lookup by element id failed. Nothing was mutated.
    #[error("no element with id '{0}'")]
    TargetNotFound(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
