//! Reverse-mode automatic differentiation over scalar gate circuits.
//!
//! A [`Circuit`] owns an arena of [`ValueNode`]s, each a plain
//! (value, gradient) pair addressed by a [`NodeId`] handle, plus the
//! [`GateKind`] gates wired between them. Wiring order doubles as the
//! topological order: [`Circuit::forward`] evaluates every gate in that
//! order, [`Circuit::backward`] replays the exact reverse and accumulates
//! chain-rule contributions into each input's gradient with `+=`. Update
//! steps and gradient resets are explicit caller protocol; see [`Circuit`]
//! for the per-iteration contract.

// Declare the main modules of the crate
pub mod circuit;
pub mod gates;
pub mod grad_check;
pub mod node;
pub mod utils;

pub mod error;
pub use error::ScalarGradError;

pub use circuit::Circuit;
pub use gates::{Gate, GateKind};
pub use grad_check::{check_gradients, GradCheckError};
pub use node::{NodeId, ValueNode};
