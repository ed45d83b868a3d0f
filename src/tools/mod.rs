//! Random graph generation, used in tests and by the executable when no dataset is given.

pub mod generator;
