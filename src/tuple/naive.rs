//! Exhaustive enumeration of valid tuples.
//!
//! All n^k tuples are visited in lexicographic order and those inducing at most s components are kept.
//! This is the reference definition of the tuple graph vertex set; it is only usable for small n and k.

use itertools::Itertools;

use crate::errors::{KernelError, KernelResult};
use crate::graph::base::BaseGraph;
use crate::graph::derived::Tuple;


/// returns valid tuples in lexicographic order.
/// Fails if n^k does not fit in a usize.
pub fn enumerate_tuples(graph : &BaseGraph, k : usize, s : usize) -> KernelResult<Vec<Tuple>> {
    let nb_vertices = graph.get_nb_vertices();
    if nb_vertices == 0 {
        return Ok(Vec::new());
    }
    let nb_candidates = u32::try_from(k).ok()
        .and_then(|k| nb_vertices.checked_pow(k))
        .ok_or_else(|| KernelError::InvalidParameter(format!("naive enumeration of {}^{} tuples overflows", nb_vertices, k)))?;
    log::debug!("naive enumeration, nb candidates : {}", nb_candidates);
    // last coordinate moves fastest, so tuples come in lexicographic order
    let valid : Vec<Tuple> = (0..k).map(|_| 0..nb_vertices).multi_cartesian_product()
        .filter(|tuple| graph.induced_components(tuple) <= s)
        .collect();
    log::debug!("naive enumeration, nb valid tuples : {}", valid.len());
    Ok(valid)
} // end of enumerate_tuples



#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn triangle_pairs_all_valid() {
        log_init_test();
        let graph = BaseGraph::unlabeled(3, &[(0,1), (1,2), (2,0)]).unwrap();
        let tuples = enumerate_tuples(&graph, 2, 1).unwrap();
        assert_eq!(tuples.len(), 9);
        assert_eq!(tuples[0], vec![0, 0]);
        assert_eq!(tuples[1], vec![0, 1]);
        assert_eq!(tuples[8], vec![2, 2]);
    }

    #[test]
    fn isolated_pair() {
        log_init_test();
        let graph = BaseGraph::unlabeled(2, &[]).unwrap();
        let tuples = enumerate_tuples(&graph, 2, 1).unwrap();
        assert_eq!(tuples, vec![vec![0, 0], vec![1, 1]]);
        // with s = 2 every pair is valid
        let tuples = enumerate_tuples(&graph, 2, 2).unwrap();
        assert_eq!(tuples.len(), 4);
    }

    #[test]
    fn single_vertex_with_self_loop() {
        log_init_test();
        let graph = BaseGraph::unlabeled(1, &[(0,0)]).unwrap();
        assert_eq!(enumerate_tuples(&graph, 3, 1).unwrap(), vec![vec![0, 0, 0]]);
        let graph = BaseGraph::unlabeled(3, &[(0,1)]).unwrap();
        let tuples = enumerate_tuples(&graph, 1, 1).unwrap();
        assert_eq!(tuples, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn empty_graph_and_overflow() {
        log_init_test();
        let graph = BaseGraph::unlabeled(0, &[]).unwrap();
        assert!(enumerate_tuples(&graph, 3, 1).unwrap().is_empty());
        let graph = BaseGraph::unlabeled(1000, &[]).unwrap();
        let res = enumerate_tuples(&graph, 40, 1);
        assert!(matches!(res, Err(KernelError::InvalidParameter(_))));
    }

} // end of mod tests
