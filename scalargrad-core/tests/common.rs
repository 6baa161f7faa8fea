use scalargrad_core::{Circuit, NodeId, ScalarGradError};

/// Handles for the classic single-neuron circuit `sigmoid(a*x + b*y + c)`.
// Usage across different test crates isn't detected easily, hence allow(dead_code).
#[allow(dead_code)]
pub(crate) struct AffineSigmoid {
    pub a: NodeId,
    pub b: NodeId,
    pub c: NodeId,
    pub x: NodeId,
    pub y: NodeId,
    pub z: NodeId,
    pub s: NodeId,
}

/// Wires `sigmoid(a*x + b*y + c)` with the walkthrough values
/// a=1, b=2, c=-3, x=-1, y=3.
#[allow(dead_code)]
pub(crate) fn affine_sigmoid(circuit: &mut Circuit) -> Result<AffineSigmoid, ScalarGradError> {
    let a = circuit.leaf(1.0);
    let b = circuit.leaf(2.0);
    let c = circuit.leaf(-3.0);
    let x = circuit.leaf(-1.0);
    let y = circuit.leaf(3.0);
    let ax = circuit.multiply("a*x", a, x)?;
    let by = circuit.multiply("b*y", b, y)?;
    let partial = circuit.add("a*x + b*y", ax, by)?;
    let z = circuit.add("(a*x + b*y) + c", partial, c)?;
    let s = circuit.sigmoid("sigmoid(z)", z)?;
    Ok(AffineSigmoid {
        a,
        b,
        c,
        x,
        y,
        z,
        s,
    })
}
