//! Writes an `l3transform.config`.
//!
//! ```bash
//! # reference geometry
//! cargo run --bin make_init_file -- -o /tmp/conf
//!
//! # re-emit an existing configuration, printing it as JSON too
//! cargo run --bin make_init_file -- -i /opt/tpc/conf -o /tmp/conf --json
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tpc_transform::{write_config, GeometryConfig};

#[derive(Parser, Debug)]
#[command(name = "make_init_file")]
#[command(about = "Write a TPC transform configuration file")]
struct Args {
    /// Directory to write l3transform.config into
    #[arg(long, short = 'o')]
    output: String,

    /// Directory holding a configuration to start from
    #[arg(long, short = 'i')]
    input: Option<String>,

    /// Also print the geometry as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = GeometryConfig::new();
    if let Some(input) = &args.input {
        config.try_init(input, None)?;
    }

    std::fs::create_dir_all(&args.output)?;
    let geometry = config.geometry();
    let path = write_config(&args.output, &geometry)?;
    tracing::info!(path = %path.display(), version = geometry.version, "configuration written");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&*geometry)?);
    }

    Ok(())
}
