//! XOR classification demo.
//!
//! Two outputs encode the class: `[1, 0]` for XOR-true, `[0, 1]` for
//! XOR-false. Prints every prediction with the rolling error rate.

use tracing_subscriber::EnvFilter;
use tsetlin_machine::{RollingError, TsetlinMachine, utils::rng_from_entropy};

fn main() -> tsetlin_machine::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs = [[0, 0], [0, 1], [1, 0], [1, 1]];
    let targets = [[0, 1], [1, 0], [1, 0], [0, 1]];

    let mut tm = TsetlinMachine::create(2, 2, 10)?;
    let mut rng = rng_from_entropy();
    let mut err = RollingError::default();

    for e in 0..1000 {
        let x = &inputs[e % 4];
        let y = &targets[e % 4];

        let out = tm.activate(x)?;
        err.record(out == y);
        println!("{} {} -> {} {} | {:.4}", x[0], x[1], out[0], out[1], err.value());

        tm.learn(y, 4.0, 4, &mut rng)?;
    }

    println!("\nLearned rules:");
    for (o, unit) in tm.rules().iter().enumerate() {
        for (c, rule) in unit.iter().enumerate().filter(|(_, r)| !r.is_empty()) {
            println!("  output {o} clause {c}: {rule}");
        }
    }

    Ok(())
}
