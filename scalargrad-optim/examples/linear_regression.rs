//! # Two-Parameter Linear Regression
//!
//! The classic scalar-gate training walkthrough:
//!
//! 1. **Warm-up**: a single `power` gate `u = 2x^2`, one forward/backward
//!    pass, one ascent step on `x`.
//! 2. **Regression**: fit `m` and `b` to synthetic `y = 3x - 2 + noise`
//!    data through the chain `multiply -> add -> add -> power(2)`, where the
//!    second add folds in the negated target. Squared error descends with a
//!    negative step.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example linear_regression`

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use scalargrad_core::{Circuit, ScalarGradError};
use scalargrad_data::{linear_pairs, Dataset, RandomSampler, Sampler};
use scalargrad_optim::{Optimizer, Sgd};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    // --- Warm-up: one gate, one ascent step ---
    let mut warmup = Circuit::new();
    let x = warmup.leaf(2.0);
    let u = warmup.power("2x^2", x, 2.0, 2.0)?;
    warmup.forward()?;
    warmup.backward(u, None)?;
    println!("Warm-up u = 2x^2 at x = 2:");
    println!("  u: {}", warmup.node(u));
    println!("  x: {}", warmup.node(x));
    let stepped = warmup.value(x) + 0.01 * warmup.gradient(x);
    warmup.set_value(x, stepped);
    warmup.zero_gradients();
    warmup.forward()?;
    println!("  after one ascent step, u: {}", warmup.node(u));

    // --- Regression: fit y = 3x - 2 ---
    let data = linear_pairs(3.0, -2.0, 0.1, -2.0..2.0, 200, 17);
    let iterations = 100_000;
    let sampler = RandomSampler::new(true, Some(iterations)).with_seed(29);

    let mut circuit = Circuit::new();
    let mut rng = StdRng::seed_from_u64(5);
    let m_init = Normal::new(0.0, 1.0)
        .expect("unit normal parameters are valid")
        .sample(&mut rng);
    let m = circuit.leaf(m_init);
    let b = circuit.leaf(0.0);
    let sample_x = circuit.leaf(0.0);
    let sample_y_neg = circuit.leaf(0.0);

    let mx = circuit.multiply("m*x", m, sample_x)?;
    let mx_b = circuit.add("m*x + b", mx, b)?;
    let residual = circuit.add("m*x + b - y", mx_b, sample_y_neg)?;
    let loss = circuit.power("(m*x + b - y)^2", residual, 2.0, 1.0)?;

    let mut sgd = Sgd::new(-0.01);
    for (iteration, index) in sampler.iter(data.len()).enumerate() {
        let (input, target) = data
            .get(index)
            .expect("sampler indices are within the dataset");
        circuit.set_value(sample_x, input);
        circuit.set_value(sample_y_neg, -target);
        circuit.forward()?;
        circuit.backward(loss, None)?;
        sgd.step(&mut circuit, &[m, b]);
        sgd.zero_grad(&mut circuit);

        if iteration % 10_000 == 0 {
            log::info!(
                "iteration {}: m = {:.4}, b = {:.4}, loss = {:.6}",
                iteration,
                circuit.value(m),
                circuit.value(b),
                circuit.value(loss)
            );
        }
    }

    println!("\nFitted parameters (target m = 3, b = -2):");
    println!("  m: {}", circuit.node(m));
    println!("  b: {}", circuit.node(b));
    Ok(())
}
