//! # Single-Neuron Walkthrough
//!
//! Wires the classic circuit `sigmoid(a*x + b*y + c)`, runs one
//! forward/backward cycle, nudges every leaf along its gradient, and
//! re-evaluates:
//!
//! 1. **Leaf allocation**: five scalar leaves in a `Circuit` arena.
//! 2. **Wiring**: two `multiply` gates, two `add` gates, one `sigmoid` gate,
//!    each with a diagnostic name.
//! 3. **Forward / backward**: gate outputs in wiring order, gradients in
//!    exact reverse order, seeded with 1.0 at the sigmoid output.
//! 4. **Ascent step**: `value += step_size * gradient` on every leaf, which
//!    pushes the sigmoid output up.
//! 5. **Reset and re-run**: gradients zeroed, forward replayed on the new
//!    values.
//!
//! ## Running
//! `cargo run --example logistic_gates`

use scalargrad_core::{Circuit, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    let mut circuit = Circuit::new();

    let a = circuit.leaf(1.0);
    let b = circuit.leaf(2.0);
    let c = circuit.leaf(-3.0);
    let x = circuit.leaf(-1.0);
    let y = circuit.leaf(3.0);
    let leaves = [a, b, c, x, y];

    println!("Leaves before training:");
    for id in leaves {
        println!("{}", circuit.node(id));
    }

    let ax = circuit.multiply("a*x", a, x)?;
    let by = circuit.multiply("b*y", b, y)?;
    let partial = circuit.add("a*x + b*y", ax, by)?;
    let z = circuit.add("(a*x + b*y) + c", partial, c)?;
    let s = circuit.sigmoid("sigmoid(z)", z)?;

    circuit.forward()?;
    circuit.backward(s, None)?;
    println!("\nOutput after the first pass:");
    println!("{}", circuit.node(s));

    // One ascent step on every leaf.
    let step_size = 0.01;
    for id in leaves {
        let update = circuit.value(id) + step_size * circuit.gradient(id);
        circuit.set_value(id, update);
    }

    println!("\nLeaves after one step (gradients still from the first pass):");
    for id in leaves {
        println!("{}", circuit.node(id));
    }

    circuit.zero_gradients();
    circuit.forward()?;
    println!("\nOutput after re-running forward on the updated leaves:");
    println!("{}", circuit.node(s));

    Ok(())
}
