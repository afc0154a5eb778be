use approx::assert_relative_eq;
use flight_calculation::{
    errors::CalculationError, velocity_update, FlightParameters, FlightReport, InvalidReason,
    Kilograms, KilogramsPerSecond, KilometersPerHour, Meters, MetersPerSecond,
    MetersPerSecondSquared, Seconds,
};

// Helper function to create a burn with custom inputs
fn create_test_parameters(velocity_kmh: f64, time: f64, fuel: f64) -> FlightParameters {
    FlightParameters::new(
        KilometersPerHour(velocity_kmh),
        MetersPerSecondSquared(3.0),
        Seconds(time),
        Meters(0.0),
        Kilograms(fuel),
        KilogramsPerSecond(0.5),
    )
}

#[test]
fn test_default_mission_report() {
    println!("INTEGRATION TEST: Default Mission Report");

    let report = FlightReport::compute(&FlightParameters::default())
        .expect("Default inputs should be valid");

    let expected_velocity = (10_000.0 / 3.6 + 3.0 * 3_600.0) * 3.6;
    assert_relative_eq!(report.new_velocity.0, expected_velocity, epsilon = 1e-6);
    assert_relative_eq!(report.new_velocity.0, 48_880.0, epsilon = 1e-6);

    let expected_distance_km = (10_000.0 / 3.6) * 3_600.0 / 1_000.0;
    assert_relative_eq!(report.new_distance.0, expected_distance_km, epsilon = 1e-6);
    assert_relative_eq!(report.new_distance.0, 10_000.0, epsilon = 1e-6);

    assert_relative_eq!(report.remaining_fuel.0, 3_200.0, epsilon = 1e-9);

    println!("{}", report);
    println!("Default Mission Report Test: PASSED");
}

#[test]
fn test_report_output_lines() {
    let report = FlightReport::compute(&FlightParameters::default()).unwrap();
    let rendered = report.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 3, "Report should have exactly three lines");
    assert!(lines[0].starts_with("Corrected New Velocity: ") && lines[0].ends_with(" km/h"));
    assert!(lines[1].starts_with("Corrected New Distance: ") && lines[1].ends_with(" km"));
    assert_eq!(lines[2], "Corrected Remaining Fuel: 3200 kg");
}

#[test]
fn test_repeated_computation_is_identical() {
    let params = FlightParameters::default();

    let first = FlightReport::compute(&params).unwrap();
    let second = FlightReport::compute(&params).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_unconverted_velocity_is_distinguishable() {
    // Passing km/h straight into the velocity update is accepted numerically,
    // so callers must convert. The typed path gives the SI answer.
    let kmh = KilometersPerHour(10_000.0);
    let mps: MetersPerSecond = kmh.into();

    let wrong = velocity_update(kmh.0, 3.0, 3_600.0).unwrap();
    let right = velocity_update(mps.0, 3.0, 3_600.0).unwrap();

    assert_relative_eq!(right, 13_577.777_777_777_777, epsilon = 1e-6);
    assert!(wrong > right);
}

#[test]
fn test_invalid_velocity_is_reported() {
    let params = create_test_parameters(-10_000.0, 3_600.0, 5_000.0);

    let err = FlightReport::compute(&params).unwrap_err();
    assert_eq!(
        err,
        CalculationError::InvalidParameter {
            name: "initial_velocity",
            value: -10_000.0,
            reason: InvalidReason::Negative,
        }
    );
    assert_eq!(
        err.to_string(),
        "Invalid parameter 'initial_velocity': -10000 (must not be negative)"
    );
}

#[test]
fn test_nan_time_is_reported() {
    let params = create_test_parameters(10_000.0, f64::NAN, 5_000.0);

    match FlightReport::compute(&params) {
        Err(CalculationError::InvalidParameter { name, reason, .. }) => {
            assert_eq!(name, "time");
            assert_eq!(reason, InvalidReason::NotANumber);
        }
        other => panic!("Expected NaN time to be rejected, got {:?}", other),
    }
}

#[test]
fn test_fuel_exhaustion_is_reported() {
    let params = create_test_parameters(10_000.0, 3_600.0, 1_000.0);

    let err = FlightReport::compute(&params).unwrap_err();
    assert_eq!(
        err,
        CalculationError::FuelExhausted {
            required: 1_800.0,
            available: 1_000.0,
        }
    );
}

#[test]
fn test_short_burn() {
    let params = create_test_parameters(36.0, 10.0, 100.0);
    let report = FlightReport::compute(&params).unwrap();

    // 10 m/s + 3 m/s² * 10 s = 40 m/s
    assert_relative_eq!(report.new_velocity.0, 144.0, epsilon = 1e-9);
    // 10 m/s * 10 s = 100 m
    assert_relative_eq!(report.new_distance.0, 0.1, epsilon = 1e-12);
    assert_relative_eq!(report.remaining_fuel.0, 95.0, epsilon = 1e-12);
}

#[test]
fn test_overflowing_burn_is_an_error() {
    let params = FlightParameters::new(
        KilometersPerHour(10_000.0),
        MetersPerSecondSquared(1e300),
        Seconds(1e10),
        Meters(0.0),
        Kilograms(5_000.0),
        KilogramsPerSecond(0.0),
    );

    match FlightReport::compute(&params) {
        Err(CalculationError::Overflow { quantity, value }) => {
            assert_eq!(quantity, "velocity");
            assert!(value.is_infinite());
        }
        other => panic!("Expected overflow, got {:?}", other),
    }
}
