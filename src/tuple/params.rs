//! Parameters of tuple graph construction



use serde::{Deserialize, Serialize};

use crate::errors::{KernelError, KernelResult};


/// How valid tuples are enumerated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Enumeration {
    /// all n^k tuples are generated then filtered on the number of components
    Naive,
    /// connected multisets are grown from s-multisets, then permuted
    Multiset,
}


#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct TupleGraphParams {
    /// length of tuples
    pub k : usize,
    /// maximum number of components of the subgraph induced by a tuple
    pub s : usize,
    /// do atomic types use vertex labels
    pub node_labels : bool,
    ///
    pub enumeration : Enumeration,
} // end of TupleGraphParams


impl TupleGraphParams {

    pub fn new(k : usize, s : usize, node_labels : bool, enumeration : Enumeration) -> Self {
        TupleGraphParams{k, s, node_labels, enumeration}
    }

    /// checks 1 <= s <= k
    pub fn check(&self) -> KernelResult<()> {
        if self.k == 0 {
            return Err(KernelError::InvalidParameter(String::from("k must be >= 1")));
        }
        if self.s == 0 || self.s > self.k {
            return Err(KernelError::InvalidParameter(format!("s must satisfy 1 <= s <= k, got s : {}, k : {}", self.s, self.k)));
        }
        Ok(())
    } // end of check

    ///
    pub fn get_k(&self) -> usize { self.k }

    ///
    pub fn get_s(&self) -> usize { self.s }

    ///
    pub fn use_node_labels(&self) -> bool { self.node_labels }

    ///
    pub fn get_enumeration(&self) -> Enumeration { self.enumeration }

} // end of impl TupleGraphParams


/// (k,s) = (2,1) with node labels and multiset enumeration
impl Default for TupleGraphParams {
    fn default() -> Self {
        TupleGraphParams{k : 2, s : 1, node_labels : true, enumeration : Enumeration::Multiset}
    }
}
