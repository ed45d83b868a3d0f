//! Color refinement parameters



use serde::{Deserialize, Serialize};

use crate::errors::{KernelError, KernelResult};


#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct WlParams {
    /// number of refinement rounds after the initial coloring
    pub nb_iter : usize,
    /// concatenate histograms of all rounds instead of keeping the last one
    pub cumulative : bool,
    /// parallel mode
    pub parallel : bool,
} // end of WlParams


impl WlParams {

    pub fn new(nb_iter : usize, cumulative : bool, parallel : bool) -> Self {
        WlParams{nb_iter, cumulative, parallel}
    }

    /// rounds coming from a signed source (command line, config). Negative values are rejected.
    pub fn from_signed(nb_iter : i64, cumulative : bool, parallel : bool) -> KernelResult<Self> {
        let nb_iter = usize::try_from(nb_iter)
            .map_err(|_| KernelError::InvalidParameter(format!("number of rounds must be >= 0, got {}", nb_iter)))?;
        Ok(WlParams::new(nb_iter, cumulative, parallel))
    }

    ///
    pub fn get_nb_iter(&self) -> usize { self.nb_iter }

    ///
    pub fn is_cumulative(&self) -> bool { self.cumulative }

    ///
    pub fn get_parallel(&self) -> bool { self.parallel }

} // end of impl WlParams


impl Default for WlParams {
    fn default() -> Self {
        WlParams{nb_iter : 4, cumulative : false, parallel : true}
    }
}
