use flight_calculation::*;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let params = FlightParameters::default();

    match FlightReport::compute(&params) {
        Ok(report) => {
            report.display();
            Ok(())
        }
        Err(e) => {
            error!("Flight calculation failed: {}", e);
            Err(e.into())
        }
    }
}
