use tracing::debug;

use crate::errors::{check_parameter, check_result, CalculationError, Result};
use crate::utils::units::{Kilograms, KilogramsPerSecond, Seconds};

// Over-burning is an error, never a negative mass.
pub fn remaining_fuel(
    fuel: Kilograms,
    burn_rate: KilogramsPerSecond,
    time: Seconds,
) -> Result<Kilograms> {
    check_parameter("fuel", fuel.0)?;
    check_parameter("fuel_burn_rate", burn_rate.0)?;
    check_parameter("time", time.0)?;

    let consumed = Kilograms(check_result("fuel consumed", (burn_rate * time).0)?);
    if consumed.0 > fuel.0 {
        return Err(CalculationError::FuelExhausted {
            required: consumed.0,
            available: fuel.0,
        });
    }

    let remaining = Kilograms(fuel.0 - consumed.0);
    debug!(
        consumed_kg = consumed.0,
        remaining_kg = remaining.0,
        "computed remaining fuel"
    );
    Ok(remaining)
}
