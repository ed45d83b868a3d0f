//! Reading datasets and dumping results.

pub mod tudataset;

pub mod csv;
