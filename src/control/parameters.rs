use crate::constants::{
    ACCELERATION, BURN_TIME, FUEL_BURN_RATE, INITIAL_DISTANCE, INITIAL_FUEL, INITIAL_VELOCITY,
};
use crate::errors::{check_parameter, Result};
use crate::utils::units::{
    Kilograms, KilogramsPerSecond, KilometersPerHour, Meters, MetersPerSecondSquared, Seconds,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightParameters {
    pub initial_velocity: KilometersPerHour,
    pub acceleration: MetersPerSecondSquared,
    pub time: Seconds,
    pub distance: Meters,
    pub fuel: Kilograms,
    pub fuel_burn_rate: KilogramsPerSecond,
}

impl FlightParameters {
    pub fn new(
        initial_velocity: KilometersPerHour,
        acceleration: MetersPerSecondSquared,
        time: Seconds,
        distance: Meters,
        fuel: Kilograms,
        fuel_burn_rate: KilogramsPerSecond,
    ) -> Self {
        FlightParameters {
            initial_velocity,
            acceleration,
            time,
            distance,
            fuel,
            fuel_burn_rate,
        }
    }

    // First failing field wins
    pub fn validate(&self) -> Result<()> {
        check_parameter("initial_velocity", self.initial_velocity.0)?;
        check_parameter("acceleration", self.acceleration.0)?;
        check_parameter("time", self.time.0)?;
        check_parameter("distance", self.distance.0)?;
        check_parameter("fuel", self.fuel.0)?;
        check_parameter("fuel_burn_rate", self.fuel_burn_rate.0)?;
        Ok(())
    }
}

impl Default for FlightParameters {
    fn default() -> Self {
        FlightParameters::new(
            KilometersPerHour(INITIAL_VELOCITY),
            MetersPerSecondSquared(ACCELERATION),
            Seconds(BURN_TIME),
            Meters(INITIAL_DISTANCE),
            Kilograms(INITIAL_FUEL),
            KilogramsPerSecond(FUEL_BURN_RATE),
        )
    }
}
