use tracing::debug;

use crate::errors::{check_parameter, check_result, Result};
use crate::utils::units::{Meters, MetersPerSecond, MetersPerSecondSquared, Seconds};

// Velocity must already be in m/s.
pub fn velocity_update(velocity: f64, acceleration: f64, time: f64) -> Result<f64> {
    check_parameter("velocity", velocity)?;
    check_parameter("acceleration", acceleration)?;
    check_parameter("time", time)?;

    check_result("velocity", velocity + acceleration * time)
}

pub fn new_velocity(
    velocity: MetersPerSecond,
    acceleration: MetersPerSecondSquared,
    time: Seconds,
) -> Result<MetersPerSecond> {
    let updated = velocity_update(velocity.0, acceleration.0, time.0)?;
    debug!(
        initial_mps = velocity.0,
        final_mps = updated,
        "computed new velocity"
    );
    Ok(MetersPerSecond(updated))
}

pub fn new_distance(distance: Meters, velocity: MetersPerSecond, time: Seconds) -> Result<Meters> {
    check_parameter("distance", distance.0)?;
    check_parameter("velocity", velocity.0)?;
    check_parameter("time", time.0)?;

    let travelled = Meters(check_result("distance", (distance + velocity * time).0)?);
    debug!(distance_m = travelled.0, "computed new distance");
    Ok(travelled)
}
