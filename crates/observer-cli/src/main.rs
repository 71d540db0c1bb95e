//! CLI for observer-core — sweep an observer's distinguishability scale.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "observer-sim")]
#[command(about = "observer-sim — when does an observer collapse what it sees?")]
#[command(version = observer_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep the distinguishability scale Λ and sample the interference pattern at each point.
    /// Defaults reproduce the reference run: p_err=0.05, Λ in [1, 10], 20 points.
    Sweep {
        /// JSON config file; explicit flags override its values
        #[arg(long)]
        config: Option<String>,

        /// Classical misclassification probability of the observer
        #[arg(long)]
        error_probability: Option<f64>,

        /// First Λ of the grid
        #[arg(long)]
        lambda_min: Option<f64>,

        /// Last Λ of the grid (inclusive)
        #[arg(long)]
        lambda_max: Option<f64>,

        /// Number of grid points
        #[arg(long)]
        points: Option<usize>,

        /// Bernoulli trials per grid point
        #[arg(long)]
        samples: Option<usize>,

        /// Critical scale Λc for the collapse predicate
        #[arg(long)]
        critical_scale: Option<f64>,

        /// Fixed RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Evaluate each Λ on an independent model snapshot instead of mutating one model
        #[arg(long)]
        snapshot: bool,

        /// Write the sweep report as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// Evaluate the collapse predicate for a single observer
    Collapse {
        /// Real part of the distinguishability amplitude
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        re: f64,

        /// Imaginary part of the distinguishability amplitude
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        im: f64,

        /// Classical misclassification probability
        #[arg(long, default_value = "0.0")]
        error_probability: f64,

        /// Critical scale Λc
        #[arg(long, default_value = "4.6")]
        critical_scale: f64,

        /// Reject |d| > 1 or p_err outside [0, 1] instead of evaluating them
        #[arg(long)]
        strict: bool,
    },

    /// Cognitive dimension 2/(1+|d|²) across |d| in [0, 1]
    Dimension {
        /// Number of grid points
        #[arg(long, default_value = "100")]
        points: usize,

        /// Critical scale Λc marked on the curve
        #[arg(long, default_value = "4.6")]
        critical_scale: f64,

        /// Write the curve as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// Outcome probability, entropy, and trace distance across cognitive resolution ε
    Resolution {
        /// Number of grid points
        #[arg(long, default_value = "50")]
        points: usize,

        /// Write the curves as JSON
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sweep {
            config,
            error_probability,
            lambda_min,
            lambda_max,
            points,
            samples,
            critical_scale,
            seed,
            snapshot,
            output,
        } => commands::sweep::run(commands::sweep::SweepCommandConfig {
            config_path: config.as_deref(),
            overrides: commands::sweep::SweepOverrides {
                error_probability,
                lambda_min,
                lambda_max,
                points,
                samples_per_point: samples,
                critical_scale,
                seed,
                snapshot,
            },
            output_path: output.as_deref(),
        }),
        Commands::Collapse {
            re,
            im,
            error_probability,
            critical_scale,
            strict,
        } => commands::collapse::run(re, im, error_probability, critical_scale, strict),
        Commands::Dimension {
            points,
            critical_scale,
            output,
        } => commands::dimension::run(points, critical_scale, output.as_deref()),
        Commands::Resolution { points, output } => {
            commands::resolution::run(points, output.as_deref())
        }
    }
}
