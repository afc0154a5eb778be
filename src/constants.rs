// Unit Conversion
pub const KMH_PER_MPS: f64 = 3.6; // 1 m/s = 3.6 km/h
pub const METERS_PER_KILOMETER: f64 = 1_000.0;

// Mission Inputs
pub const INITIAL_VELOCITY: f64 = 10_000.0; // km/h
pub const ACCELERATION: f64 = 3.0; // m/s²
pub const BURN_TIME: f64 = 3_600.0; // s (1 hour)
pub const INITIAL_DISTANCE: f64 = 0.0; // m
pub const INITIAL_FUEL: f64 = 5_000.0; // kg
pub const FUEL_BURN_RATE: f64 = 0.5; // kg/s
