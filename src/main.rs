use flight_simulation::optimization_system::analysis::{
    compare_optimizations, display_summary, write_summary_file,
};
use flight_simulation::optimization_system::hybrid::hybrid_optimization;
use flight_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = AircraftParams::default();
    let config = SimulationConfig::default();
    let environment = Environment::default();

    // Baseline flight for visualization hand-off
    let aircraft = Aircraft::new(
        params.clone(),
        config.initial_position,
        config.initial_velocity,
        config.initial_fuel,
    )?;
    let mut simulator = FlightSimulator::new(
        aircraft,
        config.time_step,
        config.max_time,
        environment.clone(),
    )?;

    println!("Running baseline flight for {}...", params.name);
    let telemetry = simulator.run();
    println!(
        "Flight ended after {} steps ({:?})",
        telemetry.len(),
        simulator.stop_condition()
    );
    telemetry.display_summary();

    for issue in telemetry.validate() {
        println!("Telemetry warning: {}", issue);
    }

    telemetry.write_csv_file("flight_data.csv")?;
    println!("Telemetry written to flight_data.csv");

    // Standard optimization: thrust-scale sweep
    let sweep = standard_optimization(&params, &config, &environment, &SweepSettings::default())?;
    println!(
        "Standard optimization: scale {:.4} reaches {:.2} m",
        sweep.optimal.thrust_scale, sweep.optimal.max_altitude
    );

    // Placeholder learned strategy
    let optimizer = DummyOptimizer;
    let learned = optimizer.optimize();
    let curve = optimizer.learning_curve();
    println!(
        "{} optimization: scale {:.4} claims {:.2} m over {} training episodes",
        optimizer.name(),
        learned.thrust_scale,
        learned.max_altitude,
        curve.len()
    );

    // Hybrid of the two
    let hybrid = hybrid_optimization(&sweep.optimal, &learned);

    let summary = compare_optimizations(&sweep, &learned, &hybrid);
    display_summary(&summary);
    write_summary_file("optimization_comparison.csv", &summary)?;
    println!("Comparison written to optimization_comparison.csv");

    Ok(())
}
