//! Calculator layer: input parsing, validation and the distance computation.
//!
//! Architecture:
//! ```text
//!   time field      pace field
//!        │               │
//!        ▼               ▼
//!   ┌───────────┐   ┌────────┐
//!   │ TimeInput │   │  Pace  │  parse + validate raw text
//!   └───────────┘   └────────┘
//!        │               │
//!        └──────┬────────┘
//!               ▼
//!         ┌──────────┐
//!         │ Distance │  time / pace minutes
//!         └──────────┘
//!               │
//!               ▼
//!         "Distance: 6.00 km"  /  "Enter correct data."
//! ```

pub mod error;
pub mod format;
pub mod model;
mod number;

pub use error::CalcError;
pub use model::{Distance, Pace, TimeInput};

/// Validate the raw form inputs and compute the distance they describe.
///
/// Both validation failures collapse into [`CalcError::InvalidInput`]; the
/// caller never learns which field was wrong. A pace that evaluates to zero
/// minutes is not an error and yields an infinite distance.
pub fn compute(time_raw: &str, pace_raw: &str) -> Result<Distance, CalcError> {
    let time = TimeInput::parse(time_raw);
    let pace = Pace::parse(pace_raw);

    match (time, pace) {
        (Some(time), Some(pace)) => Ok(Distance::from_time_and_pace(time, pace)),
        _ => Err(CalcError::InvalidInput),
    }
}

/// Text for the output region: the result line or the error message.
pub fn render(time_raw: &str, pace_raw: &str) -> String {
    match compute(time_raw, pace_raw) {
        Ok(distance) => distance.to_string(),
        Err(e) => e.to_string(),
    }
}
