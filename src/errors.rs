use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CalculationError {
    #[error("Invalid parameter '{name}': {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: InvalidReason,
    },

    #[error("Overflow: {quantity} is not representable ({value})")]
    Overflow { quantity: &'static str, value: f64 },

    #[error("Fuel exhausted: burn requires {required} kg but only {available} kg is available")]
    FuelExhausted { required: f64, available: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Negative,
    NotANumber,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Negative => write!(f, "must not be negative"),
            InvalidReason::NotANumber => write!(f, "is not a valid number"),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculationError>;

// Accepts finite, non-negative values. Anything else is reported under `name`.
pub fn check_parameter(name: &'static str, value: f64) -> Result<()> {
    let reason = if value.is_nan() || value == f64::INFINITY {
        Some(InvalidReason::NotANumber)
    } else if value < 0.0 {
        Some(InvalidReason::Negative)
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CalculationError::InvalidParameter {
            name,
            value,
            reason,
        }),
        None => Ok(()),
    }
}

// Finite inputs can still overflow once multiplied.
pub fn check_result(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::Overflow { quantity, value })
    }
}
