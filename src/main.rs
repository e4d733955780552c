use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rs_poe_kinematics::cross_check::cross_check;
use rs_poe_kinematics::parameters::poe_kinematics::ChainParameters;
use rs_poe_kinematics::parameters_robots::poe_kinematics::BUILTIN_CHAINS;
use rs_poe_kinematics::utils::{dump_transform, is_rigid_transform};

/// Forward kinematics of a serial chain by the product of exponentials, computed in
/// the space and in the body frame, with an element-wise cross-check of both results.
#[derive(Parser, Debug)]
#[command(name = "rs-poe-kinematics", version, about)]
struct Args {
    /// Built-in chain to evaluate: textbook, ur5 or script
    #[arg(long, default_value = "textbook")]
    chain: String,

    /// YAML file with chain parameters (takes precedence over --chain)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Absolute tolerance of the cross-check (overrides the chain tolerance)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Derive the body frame screw axes from the space frame ones instead of using the given ones
    #[arg(long)]
    derive_body: bool,

    /// Print the chain parameters as YAML before evaluating
    #[arg(long)]
    show_parameters: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut chain = match &args.file {
        Some(path) => ChainParameters::from_yaml_file(path)
            .with_context(|| format!("Failed to load chain parameters from {}", path.display()))?,
        None => ChainParameters::builtin(&args.chain).ok_or_else(|| {
            anyhow!("Unknown chain '{}', expected one of: {}", args.chain, BUILTIN_CHAINS.join(", "))
        })?,
    };
    if let Some(tolerance) = args.tolerance {
        chain.tolerance = tolerance;
    }
    if args.derive_body {
        chain = chain.with_derived_body_screws();
    }
    if args.show_parameters {
        println!("{}", chain.to_yaml());
    }

    info!(dof = chain.dof(), tolerance = chain.tolerance, "evaluating chain");
    let check = cross_check(&chain).context("Forward kinematics failed")?;

    for (name, pose) in [("space", &check.space), ("body", &check.body)] {
        if !is_rigid_transform(pose, 1e-6) {
            warn!("{} frame result is not a rigid transform", name);
        }
    }

    println!("Forward Kinematics (Space Frame) T1:");
    dump_transform(&check.space);
    println!();

    println!("Forward Kinematics (Body Frame) T2:");
    dump_transform(&check.body);
    println!();

    let comparison = &check.comparison;
    if comparison.matches {
        println!("T1 and T2 match within tolerance {}", comparison.tolerance);
    } else {
        println!("T1 and T2 do NOT match within tolerance {}", comparison.tolerance);
        info!(cells = ?comparison.exceeding(), max = comparison.max_difference(), "entries over tolerance");
    }

    println!("\nElement-wise differences:");
    dump_transform(&comparison.diff);
    Ok(())
}
