//! Construction of (k,s)-tuple graphs for a batch of base graphs.
//!
//! Enumeration of tuples and computation of their atomic signatures are independent across graphs
//! and run in parallel if asked. Registration of signatures in the global [AtomicTypeRegistry] is done
//! afterwards, sequentially and in graph order, so numbering does not depend on scheduling.

use std::time::SystemTime;
use cpu_time::ProcessTime;

use rayon::prelude::*;

use crate::errors::KernelResult;
use crate::graph::base::BaseGraph;
use crate::graph::derived::{DerivedGraph, Tuple};

use super::atomic::{AtomicSignature, AtomicTypeRegistry};
use super::params::{Enumeration, TupleGraphParams};
use super::{multiset, naive};


pub struct TupleGraphBuilder {
    params : TupleGraphParams,
    /// parallel mode
    parallel : bool,
} // end of TupleGraphBuilder



impl TupleGraphBuilder {

    /// parameters are checked here, before any enumeration.
    pub fn new(params : TupleGraphParams, parallel : bool) -> KernelResult<Self> {
        params.check()?;
        Ok(TupleGraphBuilder{params, parallel})
    }

    ///
    pub fn get_params(&self) -> &TupleGraphParams {
        &self.params
    }

    /// valid tuples of graph, sorted
    pub fn enumerate(&self, graph : &BaseGraph) -> KernelResult<Vec<Tuple>> {
        let (k, s) = (self.params.get_k(), self.params.get_s());
        match self.params.get_enumeration() {
            Enumeration::Naive => naive::enumerate_tuples(graph, k, s),
            Enumeration::Multiset => Ok(multiset::enumerate_tuples(graph, k, s)),
        }
    } // end of enumerate


    // tuples and their signatures, no access to the registry
    fn prepare(&self, graph : &BaseGraph) -> KernelResult<(Vec<Tuple>, Vec<AtomicSignature>)> {
        let tuples = self.enumerate(graph)?;
        let node_labels = self.params.use_node_labels();
        let signatures = tuples.iter().map(|t| AtomicSignature::new(graph, t, node_labels)).collect();
        Ok((tuples, signatures))
    }


    /// builds the tuple graph of one graph, atomic types are taken from (and added to) registry
    pub fn build(&self, graph : &BaseGraph, registry : &mut AtomicTypeRegistry) -> KernelResult<DerivedGraph> {
        let (tuples, signatures) = self.prepare(graph)?;
        let atomic_types = signatures.into_iter().map(|sig| registry.register(sig)).collect::<KernelResult<Vec<_>>>()?;
        Ok(DerivedGraph::new(graph, self.params.get_k(), tuples, atomic_types))
    } // end of build


    /// builds tuple graphs of all graphs with a registry created for the batch
    pub fn build_batch(&self, graphs : &[BaseGraph]) -> KernelResult<(Vec<DerivedGraph>, AtomicTypeRegistry)> {
        log::info!("building ({},{})-tuple graphs of {} graphs, node labels : {}, enumeration : {:?}",
                self.params.get_k(), self.params.get_s(), graphs.len(), self.params.use_node_labels(), self.params.get_enumeration());
        let cpu_start = ProcessTime::now();
        let sys_start = SystemTime::now();
        //
        let prepared : Vec<(Vec<Tuple>, Vec<AtomicSignature>)> = if self.parallel {
            graphs.par_iter().map(|g| self.prepare(g)).collect::<KernelResult<Vec<_>>>()?
        }
        else {
            graphs.iter().map(|g| self.prepare(g)).collect::<KernelResult<Vec<_>>>()?
        };
        // barrier : global numbering in graph order
        let mut registry = AtomicTypeRegistry::new();
        let typed = prepared.into_iter().map(|(tuples, signatures)| {
            let atomic_types = signatures.into_iter().map(|sig| registry.register(sig)).collect::<KernelResult<Vec<_>>>()?;
            Ok((tuples, atomic_types))
        }).collect::<KernelResult<Vec<_>>>()?;
        //
        let k = self.params.get_k();
        let derived : Vec<DerivedGraph> = if self.parallel {
            graphs.par_iter().zip(typed.into_par_iter()).map(|(g, (tuples, types))| DerivedGraph::new(g, k, tuples, types)).collect()
        }
        else {
            graphs.iter().zip(typed).map(|(g, (tuples, types))| DerivedGraph::new(g, k, tuples, types)).collect()
        };
        //
        if log::log_enabled!(log::Level::Info) {
            let nb_vertices : usize = derived.iter().map(|d| d.get_nb_vertices()).sum();
            let nb_edges : usize = derived.iter().map(|d| d.get_nb_edges()).sum();
            log::info!("tuple graphs built, total nb vertices : {}, total nb edges : {}, nb atomic types : {}", nb_vertices, nb_edges, registry.len());
            log::info!("build_batch sys time(s) {:.2e} cpu time(s) {:.2e}", sys_start.elapsed().map(|d| d.as_secs_f64()).unwrap_or(0.), cpu_start.elapsed().as_secs_f64());
        }
        Ok((derived, registry))
    } // end of build_batch

} // end of impl TupleGraphBuilder



// end of mod tests
