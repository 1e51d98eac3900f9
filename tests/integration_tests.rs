use flight_simulation::{
    Aircraft, AircraftParams, Environment, FlightSimulator, SimulationConfig, StopCondition,
    Telemetry, Vector3D, Wind,
};

use approx::assert_relative_eq;

// Aero3D-X reference scenario with the wind turned off
fn create_reference_aircraft(thrust_scale: f64) -> Aircraft {
    let params = AircraftParams {
        thrust: 1.5e6 * thrust_scale,
        ..AircraftParams::default()
    };

    Aircraft::with_seed(
        params,
        Vector3D::new(0.0, 0.0, 0.0),
        Vector3D::new(150.0, 0.0, 0.0),
        5_000.0,
        0,
    )
    .expect("reference parameters are valid")
}

fn calm_environment() -> Environment {
    Environment::new(9.81, 1.225, Wind::calm())
}

fn run_reference_flight(thrust_scale: f64) -> (Telemetry, Option<StopCondition>) {
    let aircraft = create_reference_aircraft(thrust_scale);
    let mut simulator = FlightSimulator::new(aircraft, 0.05, 1_200.0, calm_environment())
        .expect("reference configuration is valid");
    let telemetry = simulator.run();
    (telemetry, simulator.stop_condition())
}

#[test]
fn test_reference_flight_end_to_end() {
    println!("INTEGRATION TEST: Reference Flight");

    let (telemetry, stop_condition) = run_reference_flight(1.0);

    assert!(!telemetry.is_empty(), "Flight must record telemetry");
    println!(
        "Recorded {} steps, ended with {:?}, peak altitude {:.1} m",
        telemetry.len(),
        stop_condition,
        telemetry.max_altitude()
    );

    let records = telemetry.records();
    assert_relative_eq!(records[0].time, 0.05, epsilon = 1e-12);

    let final_time = telemetry.last().unwrap().time;
    assert!(
        final_time <= 1_200.0 + 0.05,
        "Final time {:.2}s must not exceed the horizon by more than one step",
        final_time
    );

    // Only the final record may be below ground
    for record in &records[..records.len() - 1] {
        assert!(
            record.position.z >= 0.0,
            "Mid-flight altitude {:.2} m below ground at t={:.2}s",
            record.position.z,
            record.time
        );
    }

    assert!(
        telemetry.validate().is_empty(),
        "Telemetry must pass the consistency check"
    );
    println!("Reference Flight Test: PASSED");
}

#[test]
fn test_fuel_is_monotonic_and_cutoff_latches() {
    println!("INTEGRATION TEST: Fuel Monotonicity");

    let environment = calm_environment();
    let mut aircraft = create_reference_aircraft(1.0);
    let mut previous_fuel = 5_000.0;
    let mut exhausted_at = None;

    for step in 0..2_000 {
        let record = aircraft.advance(0.05, &environment);

        assert!(
            record.fuel <= previous_fuel,
            "Fuel increased from {:.3} to {:.3} kg at step {}",
            previous_fuel,
            record.fuel,
            step
        );
        assert!(record.fuel >= 0.0, "Fuel went negative at step {}", step);

        if record.fuel == 0.0 && exhausted_at.is_none() {
            exhausted_at = Some(step);
        }
        if exhausted_at.is_some() {
            assert_eq!(
                aircraft.get_thrust(),
                0.0,
                "Thrust must stay zero after exhaustion (step {})",
                step
            );
        }
        previous_fuel = record.fuel;
    }

    let exhausted_at = exhausted_at.expect("5000 kg at ~478 kg/s must run dry within 100 s");
    println!(
        "Tank ran dry at step {} (t={:.2}s)",
        exhausted_at,
        (exhausted_at + 1) as f64 * 0.05
    );
    println!("Fuel Monotonicity Test: PASSED");
}

#[test]
fn test_timestamps_increase_by_exactly_dt() {
    println!("INTEGRATION TEST: Time Monotonicity");

    let (telemetry, _) = run_reference_flight(1.0);

    for pair in telemetry.records().windows(2) {
        assert!(pair[1].time > pair[0].time);
        assert_relative_eq!(pair[1].time - pair[0].time, 0.05, epsilon = 1e-9);
    }
    println!("Time Monotonicity Test: PASSED");
}

#[test]
fn test_crash_terminates_run() {
    println!("INTEGRATION TEST: Crash Termination");

    // Ground start, nothing holding the vehicle up
    let params = AircraftParams {
        thrust: 0.0,
        lift_coeff: 0.0,
        ..AircraftParams::default()
    };
    let aircraft = Aircraft::with_seed(params, Vector3D::zero(), Vector3D::zero(), 0.0, 0)
        .expect("parameters are valid");
    let mut simulator = FlightSimulator::new(aircraft, 0.05, 100.0, calm_environment())
        .expect("configuration is valid");

    let telemetry = simulator.run();

    assert_eq!(simulator.stop_condition(), Some(StopCondition::Crash));
    let last = telemetry.last().expect("crash sample must be recorded");
    assert!(
        last.position.z < 0.0,
        "Final record must be the below-ground sample, got z={:.4} m",
        last.position.z
    );
    assert_relative_eq!(
        last.time,
        telemetry.len() as f64 * 0.05,
        epsilon = 1e-9
    );
    println!(
        "Crashed after {} step(s) at z={:.3} m: PASSED",
        telemetry.len(),
        last.position.z
    );
}

#[test]
fn test_zero_wind_variation_is_deterministic() {
    println!("INTEGRATION TEST: Zero-Variation Determinism");

    // Steady 30 m/s wind, no gusts. Two independently constructed aircraft
    // (fresh entropy seeds) must still agree bit for bit, since the wind
    // draw is the only stochastic input and its band has collapsed.
    let environment = Environment::new(
        9.81,
        1.225,
        Wind::new(Vector3D::new(1.0, 0.0, 0.0), 30.0, 0.0),
    );

    let run = |environment: &Environment| -> Telemetry {
        let aircraft = Aircraft::new(
            AircraftParams::default(),
            Vector3D::new(0.0, 0.0, 0.0),
            Vector3D::new(150.0, 0.0, 0.0),
            5_000.0,
        )
        .expect("parameters are valid");
        let mut simulator =
            FlightSimulator::new(aircraft, 0.05, 120.0, environment.clone())
                .expect("configuration is valid");
        simulator.run()
    };

    let first = run(&environment);
    let second = run(&environment);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.records().iter().zip(second.records().iter()) {
        assert_eq!(a, b, "Telemetry diverged at t={:.2}s", a.time);
    }
    println!("Zero-Variation Determinism Test: PASSED");
}

#[test]
fn test_matching_wind_keeps_forces_finite() {
    println!("INTEGRATION TEST: Zero Relative Airflow");

    // Velocity identical to the steady wind vector: v_rel is exactly zero
    let params = AircraftParams {
        thrust: 0.0,
        ..AircraftParams::default()
    };
    let aircraft = Aircraft::with_seed(
        params,
        Vector3D::new(0.0, 0.0, 5_000.0),
        Vector3D::new(30.0, 0.0, 0.0),
        0.0,
        0,
    )
    .expect("parameters are valid");
    let environment = Environment::new(
        9.81,
        1.225,
        Wind::new(Vector3D::new(1.0, 0.0, 0.0), 30.0, 0.0),
    );
    let mut simulator = FlightSimulator::new(aircraft, 0.05, 10.0, environment)
        .expect("configuration is valid");

    let telemetry = simulator.run();

    assert!(!telemetry.is_empty());
    assert!(
        telemetry.validate().is_empty(),
        "All values must stay finite through the zero-airflow guards"
    );
    println!("Zero Relative Airflow Test: PASSED");
}

#[test]
fn test_thrust_scale_influences_peak_altitude() {
    println!("INTEGRATION TEST: Thrust-Scale Sensitivity");

    let (high, _) = run_reference_flight(1.2);
    let (low, _) = run_reference_flight(0.8);

    let high_peak = high.max_altitude();
    let low_peak = low.max_altitude();
    println!(
        "Peak altitude at scale 1.2: {:.1} m, at scale 0.8: {:.1} m",
        high_peak, low_peak
    );

    assert_ne!(
        high_peak, low_peak,
        "Thrust scaling must change the trajectory outcome"
    );
    println!("Thrust-Scale Sensitivity Test: PASSED");
}

#[test]
fn test_degenerate_configuration_is_rejected() {
    println!("INTEGRATION TEST: Degenerate Configuration");

    let aircraft = create_reference_aircraft(1.0);
    assert!(FlightSimulator::new(aircraft, 0.0, 1_200.0, calm_environment()).is_err());

    let aircraft = create_reference_aircraft(1.0);
    assert!(FlightSimulator::new(aircraft, 0.05, -1.0, calm_environment()).is_err());

    let params = AircraftParams {
        mass: -15_000.0,
        ..AircraftParams::default()
    };
    assert!(Aircraft::new(params, Vector3D::zero(), Vector3D::zero(), 5_000.0).is_err());

    let config = SimulationConfig {
        time_step: 0.0,
        ..SimulationConfig::default()
    };
    assert!(config.validate().is_err());

    println!("Degenerate Configuration Test: PASSED");
}
