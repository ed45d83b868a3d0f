//! The whole computation : base graphs -> tuple graphs -> color refinement -> Gram matrix.
//!
//! Parameters are all checked before any enumeration. Registries (atomic types, colors) live only
//! for the duration of one call.

use serde::{Deserialize, Serialize};

use ndarray::Array2;

use crate::errors::{KernelError, KernelResult};
use crate::graph::base::BaseGraph;
use crate::io::csv::GraphSummary;
use crate::tuple::builder::TupleGraphBuilder;
use crate::tuple::params::TupleGraphParams;
use crate::wl::gram::normalize_gram_matrix;
use crate::wl::params::WlParams;
use crate::wl::refine::ColorRefiner;


#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct KernelParams {
    /// tuple graph construction
    pub tuple : TupleGraphParams,
    /// refinement
    pub wl : WlParams,
    /// normalize the Gram matrix
    pub normalize : bool,
} // end of KernelParams


impl KernelParams {

    pub fn new(tuple : TupleGraphParams, wl : WlParams, normalize : bool) -> Self {
        KernelParams{tuple, wl, normalize}
    }

    ///
    pub fn check(&self) -> KernelResult<()> {
        self.tuple.check()
    }
} // end of impl KernelParams



/// result of [compute_kernel]
pub struct KernelOutput {
    /// the (possibly normalized) Gram matrix
    pub gram : Array2<f64>,
    /// one record per graph
    pub summary : Vec<GraphSummary>,
    /// number of distinct atomic types in the batch
    pub nb_atomic_types : usize,
    /// number of distinct colors at each round
    pub nb_colors : Vec<usize>,
}


/// computes the (k,s) Weisfeiler-Leman kernel of graphs. classes are only passed through to the summary
/// and must have one entry per graph if not empty.
pub fn compute_kernel(graphs : &[BaseGraph], classes : &[i64], params : &KernelParams) -> KernelResult<KernelOutput> {
    params.check()?;
    if !classes.is_empty() && classes.len() != graphs.len() {
        return Err(KernelError::InvalidParameter(format!("{} classes for {} graphs", classes.len(), graphs.len())));
    }
    let builder = TupleGraphBuilder::new(params.tuple, params.wl.get_parallel())?;
    let (derived, registry) = builder.build_batch(graphs)?;
    //
    let refiner = ColorRefiner::new(params.wl);
    let kernel = refiner.refine(&derived)?;
    let nb_colors = kernel.get_nb_colors().to_vec();
    let mut gram = kernel.into_gram();
    let summary : Vec<GraphSummary> = graphs.iter().zip(derived.iter()).enumerate().map(|(rank, (g, d))| {
        GraphSummary{graph : rank, class : classes.get(rank).copied().unwrap_or(0), nb_vertices : g.get_nb_vertices(), nb_edges : g.get_nb_edges(),
                    nb_tuples : d.get_nb_vertices(), nb_tuple_edges : d.get_nb_edges(), self_similarity : gram[[rank, rank]]}
    }).collect();
    if params.normalize {
        normalize_gram_matrix(&mut gram)?;
    }
    Ok(KernelOutput{gram, summary, nb_atomic_types : registry.len(), nb_colors})
} // end of compute_kernel



/// plain Weisfeiler-Leman kernel on the base graphs, edges carrying label 0 and no self loop.
/// The summary then reports no tuple.
pub fn compute_plain_kernel(graphs : &[BaseGraph], classes : &[i64], wl : WlParams, normalize : bool) -> KernelResult<KernelOutput> {
    if !classes.is_empty() && classes.len() != graphs.len() {
        return Err(KernelError::InvalidParameter(format!("{} classes for {} graphs", classes.len(), graphs.len())));
    }
    let kernel = ColorRefiner::new(wl).refine(graphs)?;
    let nb_colors = kernel.get_nb_colors().to_vec();
    let mut gram = kernel.into_gram();
    let summary : Vec<GraphSummary> = graphs.iter().enumerate().map(|(rank, g)| {
        GraphSummary{graph : rank, class : classes.get(rank).copied().unwrap_or(0), nb_vertices : g.get_nb_vertices(), nb_edges : g.get_nb_edges(),
                    nb_tuples : 0, nb_tuple_edges : 0, self_similarity : gram[[rank, rank]]}
    }).collect();
    if normalize {
        normalize_gram_matrix(&mut gram)?;
    }
    Ok(KernelOutput{gram, summary, nb_atomic_types : 0, nb_colors})
} // end of compute_plain_kernel



// end of mod tests
