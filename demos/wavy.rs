//! Temporal recall demo.
//!
//! A sine wave is quantized into one-hot frames of `RES` bits. The machine
//! sees the last `MEM` frames and learns to predict the next one. After
//! training it runs closed-loop on its own predictions and prints the
//! recalled wave in `[0, 1]`.

use std::collections::VecDeque;

use tracing_subscriber::EnvFilter;
use tsetlin_machine::{TsetlinMachine, utils::rng_from_entropy};

const RES: usize = 10;
const MEM: usize = 8;
const TRAIN_STEPS: usize = 5000;
const RECALL_STEPS: usize = 100;

fn one_hot(step: usize) -> Vec<u8> {
    let phase = (step as f32 * 0.234).sin() * 0.5 + 0.5;
    let index = ((phase * RES as f32) as usize).min(RES - 1);
    let mut frame = vec![0; RES];
    frame[index] = 1;
    frame
}

fn flatten(memory: &VecDeque<Vec<u8>>) -> Vec<u8> {
    memory.iter().flatten().copied().collect()
}

fn main() -> tsetlin_machine::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tm = TsetlinMachine::create(RES * MEM, RES, 100)?;
    let mut rng = rng_from_entropy();
    let mut memory: VecDeque<Vec<u8>> = (0..MEM).map(|_| vec![0; RES]).collect();
    let mut out = vec![0; RES];

    for step in 0..TRAIN_STEPS {
        let frame = one_hot(step);

        if step != 0 {
            tm.learn(&frame, 5.0, 10, &mut rng)?;
        }

        memory.push_front(frame);
        memory.pop_back();

        out = tm.activate(&flatten(&memory))?.to_vec();
        let line: Vec<String> = out.iter().map(u8::to_string).collect();
        println!("{}", line.join(" "));
    }

    for _ in 0..RECALL_STEPS {
        memory.push_front(out);
        memory.pop_back();

        out = tm.activate(&flatten(&memory))?.to_vec();
        let index = out.iter().position(|&bit| bit == 1).unwrap_or(0);
        println!("{}", index as f32 / (RES - 1) as f32);
    }

    Ok(())
}
