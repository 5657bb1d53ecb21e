use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use crystal_lattice_env::config::{EnvConfig, LATTICE_TOLERANCE};
use crystal_lattice_env::environment::{CubeAction, LatticeParametersEnv};
use crystal_lattice_env::lattice::{LatticeParameters, LatticeSystem, identify_lattice_system};
use env_logger::Env;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "lattice-env")]
#[command(about = "Constrained lattice-parameter environment for crystal generation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON configuration file (defaults are used for missing fields)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lattice system, overrides the configuration
    #[arg(short, long)]
    system: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the constraint table of the active lattice system
    Constraints,
    /// Convert a state (six values in [0, 1]) to lattice parameters
    ToLattice {
        #[arg(num_args = 6, allow_negative_numbers = true)]
        state: Vec<f64>,
    },
    /// Convert lattice parameters to a state
    ToState {
        /// Readable parameters, e.g. "(4.0, 4.0, 4.0), (90.0, 90.0, 90.0)"
        readable: Option<String>,

        /// Lengths a b c, used with --angles instead of the readable form
        #[arg(long, num_args = 3)]
        lengths: Option<Vec<f64>>,

        /// Angles alpha beta gamma in degrees
        #[arg(long, num_args = 3)]
        angles: Option<Vec<f64>>,
    },
    /// Sample a random forward trajectory
    Sample {
        /// Number of moves before the end-of-trajectory action
        #[arg(short = 'n', long, default_value = "10")]
        steps: usize,

        /// Random seed
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting lattice-env v{}", crystal_lattice_env::VERSION);

    let mut config = match &cli.config {
        Some(path) => EnvConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => EnvConfig::default(),
    };
    if let Some(name) = &cli.system {
        config.lattice_system = name.parse::<LatticeSystem>()?;
    }
    let mut env = LatticeParametersEnv::new(&config).context("Failed to build environment")?;

    match cli.command {
        Commands::Constraints => {
            print!("{}", env.constraints());
            Ok(())
        }
        Commands::ToLattice { state } => to_lattice(&env, &state),
        Commands::ToState {
            readable,
            lengths,
            angles,
        } => to_state(&env, readable, lengths, angles),
        Commands::Sample { steps, seed } => {
            info!("Sampling {steps} steps in the {} system (seed {seed})", env.lattice_system());
            sample(&mut env, &config, steps, seed)
        }
    }
}

fn to_lattice(env: &LatticeParametersEnv, state: &[f64]) -> Result<()> {
    let state: [f64; 6] = state
        .try_into()
        .context("A state has exactly six values")?;
    if !env.is_valid(&state) {
        warn!("State {state:?} maps outside the projection bounds");
    }
    println!("{}", env.state_to_readable(&state));
    Ok(())
}

fn to_state(
    env: &LatticeParametersEnv,
    readable: Option<String>,
    lengths: Option<Vec<f64>>,
    angles: Option<Vec<f64>>,
) -> Result<()> {
    let params = match readable {
        Some(text) => crystal_lattice_env::environment::parse_readable(&text)?,
        None => LatticeParameters::from_parts(
            None,
            lengths.map(triplet).transpose()?,
            angles.map(triplet).transpose()?,
        )?,
    };

    let identified = identify_lattice_system(&params, 1e3 * LATTICE_TOLERANCE);
    if identified != env.lattice_system() {
        warn!(
            "Parameters look {identified}, the environment is {}; constraints will reshape them",
            env.lattice_system()
        );
    }

    let state = env.parameters_to_state(&params)?;
    if !env.is_valid(&state) {
        bail!("Parameters {params} fall outside the projection bounds");
    }
    println!("{state:?}");
    Ok(())
}

fn triplet(values: Vec<f64>) -> Result<[f64; 3]> {
    values
        .try_into()
        .map_err(|values: Vec<f64>| anyhow::anyhow!("Expected 3 values, got {}", values.len()))
}

fn sample(
    env: &mut LatticeParametersEnv,
    config: &EnvConfig,
    steps: usize,
    seed: u64,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    env.reset();
    println!("{:>4}  {}", 0, env.state_to_readable(env.state()));

    for i in 1..=steps {
        if env.mask_invalid_actions_forward().moves {
            info!("No room left to move after {} steps", i - 1);
            break;
        }
        let action = env
            .stepper()
            .random_action(env.state(), false, config.max_increment, &mut rng);
        let outcome = env.step(&action, false);
        if !outcome.valid {
            warn!("Step {i} was rejected");
            continue;
        }
        println!(
            "{:>4}  {}  valid={}",
            i,
            env.state_to_readable(&outcome.state),
            env.is_valid(&outcome.state)
        );
    }

    let outcome = env.step(&CubeAction::Eos, false);
    if !outcome.valid {
        bail!("End-of-trajectory action was rejected");
    }
    println!("done: {}", env.lattice_parameters());
    Ok(())
}
