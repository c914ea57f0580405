use thiserror::Error;

/// Errors returned by [`compute`](super::compute).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Time is missing, zero or not a number, or the pace has no `:`.
    #[error("Enter correct data.")]
    InvalidInput,
}
