use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{fmt, layer::SubscriberExt as _};

use crate::conversion_error::ConversionError;
use crate::types::Environment;

mod ansible;
mod conversion_error;
mod inventory_builder;
mod terraform;
mod types;

/// Convert Terraform outputs to an Ansible inventory
#[derive(Parser, Debug)]
#[command(name = "terraform-inventory", version)]
struct Cli {
    /// Environment the inventory is generated for
    #[arg(long = "env", value_enum)]
    environment: Environment,

    /// Path to the JSON written by `terraform output -json`
    #[arg(long = "tf-output")]
    tf_output: PathBuf,

    /// Path of the Ansible inventory YAML file to write
    #[arg(long)]
    output: PathBuf,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    match convert(cli.environment, &cli.tf_output, &cli.output) {
        Ok(()) => {
            println!("Inventory written to {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("conversion failed: {:?}", e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn setup_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout is reserved for the result line
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .expect("tracing-subscriber setup failed");
}

fn convert(
    environment: Environment,
    tf_output: &Path,
    output: &Path,
) -> Result<(), ConversionError> {
    let outputs = terraform::load_outputs(tf_output)?;
    debug!("Loaded Terraform outputs: {:?}", outputs);

    let inventory = inventory_builder::build_inventory(&outputs, environment);

    info!(
        "Built {} inventory with {} group(s)",
        environment,
        inventory.all.children.len()
    );

    ansible::write_inventory(&inventory, output)
}
