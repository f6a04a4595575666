//! Layout and rendering engine
//!
//! Leaf-first: [`shape`] renders single shapes, [`connection`] lays out
//! pairs, [`chain`] and [`fan`] compose multi-edge statements,
//! [`network`] handles cross-statement hub graphs, and the
//! [`Orchestrator`] drives a whole source through classification and
//! joins the per-statement blocks.

pub mod chain;
pub mod connection;
mod connector;
pub mod fan;
pub mod network;
mod orchestrator;
pub mod shape;

pub use orchestrator::Orchestrator;
