//! End-to-end stochastic gradient descent on the scalar regression chain
//! `power((m*x + b) + y_neg, 2)` over synthetic line data.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use scalargrad_core::{Circuit, NodeId};
use scalargrad_data::{linear_pairs, Dataset, PairDataset, RandomSampler, Sampler};
use scalargrad_optim::{Optimizer, Sgd};

const M_TRUE: f64 = 3.0;
const B_TRUE: f64 = -2.0;

struct RegressionChain {
    m: NodeId,
    b: NodeId,
    x: NodeId,
    /// Holds the *negated* target so the chain can add it as a residual.
    y_neg: NodeId,
    loss: NodeId,
}

fn regression_chain(circuit: &mut Circuit, m_init: f64) -> RegressionChain {
    let m = circuit.leaf(m_init);
    let b = circuit.leaf(0.0);
    let x = circuit.leaf(0.0);
    let y_neg = circuit.leaf(0.0);
    let mx = circuit.multiply("m*x", m, x).unwrap();
    let mx_b = circuit.add("m*x + b", mx, b).unwrap();
    let residual = circuit.add("m*x + b - y", mx_b, y_neg).unwrap();
    let loss = circuit.power("(m*x + b - y)^2", residual, 2.0, 1.0).unwrap();
    RegressionChain {
        m,
        b,
        x,
        y_neg,
        loss,
    }
}

fn train(
    circuit: &mut Circuit,
    chain: &RegressionChain,
    data: &PairDataset,
    iterations: usize,
    sampler_seed: u64,
) {
    let sampler = RandomSampler::new(true, Some(iterations)).with_seed(sampler_seed);
    let mut sgd = Sgd::new(-0.01);
    for index in sampler.iter(data.len()) {
        let (input, target) = data.get(index).unwrap();
        circuit.set_value(chain.x, input);
        circuit.set_value(chain.y_neg, -target);
        circuit.forward().unwrap();
        circuit.backward(chain.loss, None).unwrap();
        sgd.step(circuit, &[chain.m, chain.b]);
        sgd.zero_grad(circuit);
    }
}

#[test]
fn test_descent_recovers_slope_and_intercept() {
    let data = linear_pairs(M_TRUE, B_TRUE, 0.1, -2.0..2.0, 200, 7);

    let mut circuit = Circuit::new();
    let mut rng = StdRng::seed_from_u64(3);
    let m_init = Normal::new(0.0, 1.0).unwrap().sample(&mut rng);
    let chain = regression_chain(&mut circuit, m_init);

    train(&mut circuit, &chain, &data, 100_000, 11);

    assert_abs_diff_eq!(circuit.value(chain.m), M_TRUE, epsilon = 0.05);
    assert_abs_diff_eq!(circuit.value(chain.b), B_TRUE, epsilon = 0.05);
}

#[test]
fn test_descent_on_noiseless_data_converges_tightly() {
    let data = linear_pairs(M_TRUE, B_TRUE, 0.0, -2.0..2.0, 200, 19);

    let mut circuit = Circuit::new();
    let chain = regression_chain(&mut circuit, 5.0);

    train(&mut circuit, &chain, &data, 100_000, 23);

    assert_abs_diff_eq!(circuit.value(chain.m), M_TRUE, epsilon = 1e-3);
    assert_abs_diff_eq!(circuit.value(chain.b), B_TRUE, epsilon = 1e-3);
}

#[test]
fn test_descent_reduces_average_loss() {
    let data = linear_pairs(M_TRUE, B_TRUE, 0.1, -2.0..2.0, 200, 7);

    let mut circuit = Circuit::new();
    let chain = regression_chain(&mut circuit, 5.0);

    let average_loss = |circuit: &mut Circuit| {
        let mut total = 0.0;
        for index in 0..data.len() {
            let (input, target) = data.get(index).unwrap();
            circuit.set_value(chain.x, input);
            circuit.set_value(chain.y_neg, -target);
            circuit.forward().unwrap();
            total += circuit.value(chain.loss);
        }
        total / data.len() as f64
    };

    let loss_before = average_loss(&mut circuit);
    train(&mut circuit, &chain, &data, 2_000, 31);
    let loss_after = average_loss(&mut circuit);

    assert!(
        loss_after < loss_before / 10.0,
        "expected a large drop, got {} -> {}",
        loss_before,
        loss_after
    );
}
