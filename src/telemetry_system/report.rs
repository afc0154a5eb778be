use std::fmt;

use tracing::info;

use crate::control::fuel::remaining_fuel;
use crate::control::parameters::FlightParameters;
use crate::errors::{check_result, Result};
use crate::trajectory_system::kinematics::{new_distance, new_velocity};
use crate::utils::units::{Kilograms, Kilometers, KilometersPerHour, MetersPerSecond};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightReport {
    pub new_velocity: KilometersPerHour,
    pub new_distance: Kilometers,
    pub remaining_fuel: Kilograms,
}

impl FlightReport {
    pub fn compute(params: &FlightParameters) -> Result<Self> {
        params.validate()?;

        // All kinematics run in SI units; only the results go back to km/h and km.
        let initial_velocity: MetersPerSecond = params.initial_velocity.into();

        let velocity = new_velocity(initial_velocity, params.acceleration, params.time)?;
        let distance = new_distance(params.distance, initial_velocity, params.time)?;
        let fuel = remaining_fuel(params.fuel, params.fuel_burn_rate, params.time)?;

        let velocity_kmh: KilometersPerHour = velocity.into();

        let report = FlightReport {
            new_velocity: KilometersPerHour(check_result("velocity", velocity_kmh.0)?),
            new_distance: distance.into(),
            remaining_fuel: fuel,
        };
        info!(
            velocity_kmh = report.new_velocity.0,
            distance_km = report.new_distance.0,
            fuel_kg = report.remaining_fuel.0,
            "flight report computed"
        );
        Ok(report)
    }

    pub fn display(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for FlightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Corrected New Velocity: {}", self.new_velocity)?;
        writeln!(f, "Corrected New Distance: {}", self.new_distance)?;
        write!(f, "Corrected Remaining Fuel: {}", self.remaining_fuel)
    }
}
