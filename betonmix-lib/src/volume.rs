use std::fmt;
use std::str::FromStr;

use crate::error::{AmountProblem, MixError, Result};

/// A validated concrete volume in cubic meters: finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Volume(f64);

impl Volume {
    pub fn new(cubic_meters: f64) -> Result<Self> {
        let problem = if !cubic_meters.is_finite() {
            AmountProblem::NotFinite
        } else if cubic_meters <= 0.0 {
            AmountProblem::NotPositive
        } else {
            return Ok(Volume(cubic_meters));
        };
        Err(MixError::InvalidAmount {
            input: cubic_meters.to_string(),
            problem,
        })
    }

    pub fn cubic_meters(self) -> f64 {
        self.0
    }
}

/// Accepts surrounding whitespace and a single decimal comma ("2,5").
impl FromStr for Volume {
    type Err = MixError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |problem| MixError::InvalidAmount {
            input: s.to_string(),
            problem,
        };

        let text = s.trim();
        if text.is_empty() {
            return Err(invalid(AmountProblem::Empty));
        }

        let normalized;
        let text = if !text.contains('.') && text.matches(',').count() == 1 {
            normalized = text.replace(',', ".");
            normalized.as_str()
        } else {
            text
        };

        let value: f64 = text
            .parse()
            .map_err(|_| invalid(AmountProblem::NotANumber))?;
        Volume::new(value).map_err(|e| match e {
            MixError::InvalidAmount { problem, .. } => invalid(problem),
            other => other,
        })
    }
}

impl TryFrom<f64> for Volume {
    type Error = MixError;

    fn try_from(value: f64) -> Result<Self> {
        Volume::new(value)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m³", self.0)
    }
}
