use std::fmt;

use super::format::to_fixed;
use super::number::{leading_float, read_number};

// ---------------------------------------------------------------------------
// TimeInput – elapsed running time in minutes
// ---------------------------------------------------------------------------

/// Elapsed time entered by the user, in minutes. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInput(f64);

impl TimeInput {
    /// Parse the raw time field from its leading number; trailing text such
    /// as a unit is ignored. Returns `None` unless that number is finite and
    /// greater than zero.
    pub fn parse(raw: &str) -> Option<Self> {
        leading_float(raw)
            .filter(|t| t.is_finite() && *t > 0.0)
            .map(TimeInput)
    }

    pub fn minutes(&self) -> f64 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Pace – "M:SS" per kilometre
// ---------------------------------------------------------------------------

/// Pace per kilometre as entered, split into its minute and second parts.
///
/// The parts are not range-checked: `"5:90"` is 6.5 minutes and a part that
/// does not read as a number is NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pace {
    pub minutes_part: f64,
    pub seconds_part: f64,
}

impl Pace {
    /// Parse the raw pace field. Only a missing `:` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if !raw.contains(':') {
            return None;
        }
        let mut parts = raw.split(':');
        let minutes_part = read_number(parts.next().unwrap_or(""));
        let seconds_part = read_number(parts.next().unwrap_or(""));
        Some(Pace {
            minutes_part,
            seconds_part,
        })
    }

    /// Pace as fractional minutes per kilometre.
    pub fn minutes(&self) -> f64 {
        self.minutes_part + self.seconds_part / 60.0
    }
}

// ---------------------------------------------------------------------------
// Distance – the computed result
// ---------------------------------------------------------------------------

/// Distance covered in `time` at `pace`, in kilometres.
///
/// May be infinite or NaN when the pace evaluates to zero or is malformed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    pub time: TimeInput,
    pub pace: Pace,
    km: f64,
}

impl Distance {
    pub fn from_time_and_pace(time: TimeInput, pace: Pace) -> Self {
        Distance {
            time,
            pace,
            km: time.minutes() / pace.minutes(),
        }
    }

    pub fn km(&self) -> f64 {
        self.km
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance: {} km", to_fixed(self.km, 2))
    }
}
