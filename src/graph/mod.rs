//! Graphs : labeled base graphs, the common labeled view used by refinement, and tuple graphs.

pub mod base;

pub mod labeled;

pub mod derived;
