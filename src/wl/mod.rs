//! Weisfeiler-Leman color refinement over a batch of graphs, feature histograms and Gram matrix.

pub mod params;

pub mod refine;

pub mod gram;
