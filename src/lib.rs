pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::fuel::remaining_fuel;
pub use control::parameters::FlightParameters;
pub use errors::{CalculationError, InvalidReason};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::kinematics::{new_distance, new_velocity, velocity_update};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::report::FlightReport;

// Re-export commonly used utilities
pub use utils::units::{
    Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, Meters, MetersPerSecond,
    MetersPerSecondSquared, Seconds,
};
