use crate::{NameError, PercentError, RPEError, RepsError, SetsError, ShortNameError, WeightError};

/// Failures that are recovered where they occur. Callers keep the prior state
/// and report the error instead of propagating it to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0} not found")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

macro_rules! impl_from_input_error {
    ($($error: ty),*) => {
        $(
            impl From<$error> for Error {
                fn from(value: $error) -> Self {
                    Error::InvalidInput(value.to_string())
                }
            }
        )*
    };
}

impl_from_input_error!(
    NameError,
    ShortNameError,
    WeightError,
    RepsError,
    RPEError,
    SetsError,
    PercentError
);
