use std::fmt;
use std::ops::{Add, Mul};

use crate::constants::{KMH_PER_MPS, METERS_PER_KILOMETER};

// Speeds only meet the formulas as m/s; km/h goes through `From`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KilometersPerHour(pub f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetersPerSecond(pub f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetersPerSecondSquared(pub f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seconds(pub f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meters(pub f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kilometers(pub f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kilograms(pub f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KilogramsPerSecond(pub f64);

impl From<KilometersPerHour> for MetersPerSecond {
    fn from(speed: KilometersPerHour) -> Self {
        MetersPerSecond(speed.0 / KMH_PER_MPS)
    }
}

impl From<MetersPerSecond> for KilometersPerHour {
    fn from(speed: MetersPerSecond) -> Self {
        KilometersPerHour(speed.0 * KMH_PER_MPS)
    }
}

impl From<Meters> for Kilometers {
    fn from(length: Meters) -> Self {
        Kilometers(length.0 / METERS_PER_KILOMETER)
    }
}

impl From<Kilometers> for Meters {
    fn from(length: Kilometers) -> Self {
        Meters(length.0 * METERS_PER_KILOMETER)
    }
}

// v * t
impl Mul<Seconds> for MetersPerSecond {
    type Output = Meters;

    fn mul(self, time: Seconds) -> Meters {
        Meters(self.0 * time.0)
    }
}

// a * t
impl Mul<Seconds> for MetersPerSecondSquared {
    type Output = MetersPerSecond;

    fn mul(self, time: Seconds) -> MetersPerSecond {
        MetersPerSecond(self.0 * time.0)
    }
}

// burn rate * t
impl Mul<Seconds> for KilogramsPerSecond {
    type Output = Kilograms;

    fn mul(self, time: Seconds) -> Kilograms {
        Kilograms(self.0 * time.0)
    }
}

impl Add for Meters {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Meters(self.0 + other.0)
    }
}

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/h", self.0)
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.0)
    }
}
