use crystal_lattice_env::config::EnvConfig;
use crystal_lattice_env::environment::{CubeAction, LatticeParametersEnv};
use crystal_lattice_env::lattice::LatticeSystem;
use crystal_lattice_env::Result;

fn main() -> Result<()> {
    for system in LatticeSystem::ALL {
        let config = EnvConfig {
            lattice_system: system,
            ..EnvConfig::default()
        };
        let mut env = LatticeParametersEnv::new(&config)?;

        // Same raw move in every system; the constraints decide what survives
        let outcome = env.step(&CubeAction::Move([0.4, 0.5, 0.6, 0.55, 0.45, 0.35]), false);
        println!(
            "{:<13} valid={} {}",
            system.to_string(),
            outcome.valid,
            env.state_to_readable(&outcome.state)
        );

        let state = env.readable_to_state(&env.state_to_readable(env.state()))?;
        println!("{:<13} round trip {:?}", "", state);
    }
    Ok(())
}
