//! Broadside CLI — scene queries, index statistics, and validation.

use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod scene;

#[derive(Parser)]
#[command(name = "broadside")]
#[command(version, about = "Broadside — 2D spatial collision detection engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Which narrow-phase method a query uses.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    /// Bounds-overlap: one side per contacting candidate.
    Bounds,
    /// Point-probe: independent edge tests, zero to four sides.
    Points,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one named collider against the rest of a scene.
    Query {
        /// Path to scene file (JSON).
        path: String,

        /// Name of the target collider.
        #[arg(short, long)]
        name: String,

        /// Classification method.
        #[arg(short, long, value_enum, default_value_t = Method::Bounds)]
        method: Method,

        /// Detection margin added around the target.
        #[arg(short, long, default_value_t = 0.0)]
        offset: f32,
    },

    /// Build the index for a scene and print occupancy statistics.
    Stats {
        /// Path to scene file (JSON).
        path: String,
    },

    /// Validate a scene file.
    Validate {
        /// Path to scene file (JSON).
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query {
            path,
            name,
            method,
            offset,
        } => commands::query(&path, &name, method, offset),
        Commands::Stats { path } => commands::stats(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
