//! lib target
//!
//! Computes the (k,s) Weisfeiler-Leman graph kernel of a collection of labeled graphs.
//! Each graph is replaced by its tuple graph ([tuple]), whose vertices are colored by atomic types,
//! then color refinement ([wl]) is run jointly on all tuple graphs and graphs are compared by dot products
//! of their color histograms.
//!
//! [pipeline::compute_kernel] chains all steps.


pub mod errors;

pub mod graph;

pub mod tuple;

pub mod wl;

pub mod io;

pub mod tools;

pub mod pipeline;

pub mod prelude;
