//! Reproducible refresh simulation.

use evet_core::Variable;
use evet_data::DatasetStatistics;
use evet_store::DatasetStore;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Run `cycles` refresh cycles against a fresh store and print the
/// resulting statistics. A fixed `seed` makes the run reproducible.
pub fn run_simulate(cycles: u32, seed: Option<u64>) -> anyhow::Result<DatasetStatistics> {
    let store = DatasetStore::new();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for cycle in 0..cycles {
        store.refresh_data(&mut rng);
        info!("cycle {} complete", cycle + 1);
    }

    let stats = store.statistics();
    println!("{:<14} {:>8} {:>8} {:>8} {:>8}", "Variable", "Mean", "Min", "Max", "Std");
    for variable in Variable::ALL {
        let s = stats.get(variable);
        println!(
            "{:<14} {:>8.3} {:>8.3} {:>8.3} {:>8.3}",
            variable.label(),
            s.mean,
            s.min,
            s.max,
            s.std
        );
    }
    Ok(stats)
}
