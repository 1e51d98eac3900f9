use std::io::{self, Write};

use crate::optimization_system::hybrid::HybridResult;
use crate::optimization_system::standard::SweepOutcome;
use crate::optimization_system::strategy::OptimizationResult;

/// One row of the method-comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSummary {
    pub method: &'static str,
    pub thrust_scale: f64,
    pub max_altitude: f64,
}

/// Line up the three optimization passes by recommended thrust scale and
/// claimed peak altitude.
pub fn compare_optimizations(
    standard: &SweepOutcome,
    learned: &OptimizationResult,
    hybrid: &HybridResult,
) -> Vec<MethodSummary> {
    vec![
        MethodSummary {
            method: "Standard",
            thrust_scale: standard.optimal.thrust_scale,
            max_altitude: standard.optimal.max_altitude,
        },
        MethodSummary {
            method: "AI-Enhanced",
            thrust_scale: learned.thrust_scale,
            max_altitude: learned.max_altitude,
        },
        MethodSummary {
            method: "Hybrid",
            thrust_scale: hybrid.thrust_scale,
            max_altitude: hybrid.max_altitude,
        },
    ]
}

pub fn write_summary_csv<W: Write>(
    writer: &mut W,
    summary: &[MethodSummary],
) -> io::Result<()> {
    writeln!(writer, "method,thrust_scale,max_altitude")?;
    for row in summary {
        writeln!(
            writer,
            "{},{:.4},{:.2}",
            row.method, row.thrust_scale, row.max_altitude
        )?;
    }
    Ok(())
}

pub fn write_summary_file(path: &str, summary: &[MethodSummary]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary_csv(&mut file, summary)
}

pub fn display_summary(summary: &[MethodSummary]) {
    println!("--- Optimization Comparison ---");
    println!("{:<12} {:>12} {:>16}", "Method", "Thrust Scale", "Max Altitude");
    for row in summary {
        println!(
            "{:<12} {:>12.4} {:>14.2} m",
            row.method, row.thrust_scale, row.max_altitude
        );
    }
}
