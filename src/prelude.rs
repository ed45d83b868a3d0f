//! To ease access to most frequently items
//! 

pub use crate::errors::*;

pub use crate::graph::base::*;
pub use crate::graph::labeled::*;
pub use crate::graph::derived::DerivedGraph;

pub use crate::tuple::params::*;
pub use crate::tuple::builder::*;
pub use crate::tuple::atomic::{AtomicType, AtomicTypeRegistry};

pub use crate::wl::params::*;
pub use crate::wl::refine::{ColorRefiner, WlKernel};
pub use crate::wl::gram::*;

pub use crate::io::{csv::*, tudataset::*};

pub use crate::pipeline::*;
