//! Enumeration of valid tuples by growth of connected multisets.
//!
//! We start from all multisets of s vertices (they induce at most s components) and extend them
//! round after round up to size k. A multiset is extended by one of its own elements or by a neighbour
//! of one of its elements, so extension never increases the number of components.
//! Conversely every valid k-multiset contains an s-multiset from which it can be grown,
//! so the multisets obtained are exactly the valid ones and the n^k candidates are never materialized.
//!
//! Multisets are kept sorted; a seen set on sorted multisets removes duplicates at each round.
//! Tuples are then the permutations of the k-multisets, filtered by a seen set on tuples.

use std::collections::HashSet;

use itertools::Itertools;

use crate::graph::base::BaseGraph;
use crate::graph::derived::Tuple;


/// all sorted multisets of size s drawn from 0..nb_vertices, in lexicographic order
pub(crate) fn seed_multisets(nb_vertices : usize, s : usize) -> Vec<Vec<usize>> {
    if nb_vertices == 0 || s == 0 {
        return Vec::new();
    }
    (0..nb_vertices).combinations_with_replacement(s).collect()
} // end of seed_multisets



/// one growth round. The frontier passed in is consumed.
pub(crate) fn grow_multisets(graph : &BaseGraph, frontier : Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    let mut seen = HashSet::<Vec<usize>, ahash::RandomState>::default();
    let mut extended = Vec::<Vec<usize>>::new();
    let mut push_extension = |multiset : &[usize], w : usize| {
        let mut ext = Vec::<usize>::with_capacity(multiset.len() + 1);
        let pos = multiset.partition_point(|x| *x < w);
        ext.extend_from_slice(&multiset[..pos]);
        ext.push(w);
        ext.extend_from_slice(&multiset[pos..]);
        if !seen.contains(&ext) {
            seen.insert(ext.clone());
            extended.push(ext);
        }
    };
    for multiset in frontier {
        for (rank, &v) in multiset.iter().enumerate() {
            // repeated elements give the same extensions
            if rank > 0 && multiset[rank - 1] == v {
                continue;
            }
            for &w in graph.get_neighbours(v) {
                push_extension(&multiset, w);
            }
            push_extension(&multiset, v);
        }
    }
    extended
} // end of grow_multisets



/// returns valid tuples in lexicographic order
pub fn enumerate_tuples(graph : &BaseGraph, k : usize, s : usize) -> Vec<Tuple> {
    let mut multisets = seed_multisets(graph.get_nb_vertices(), s);
    log::debug!("multiset enumeration, nb seeds of size {} : {}", s, multisets.len());
    for size in s..k {
        multisets = grow_multisets(graph, multisets);
        log::debug!("multiset enumeration, nb multisets of size {} : {}", size + 1, multisets.len());
    }
    //
    let mut seen = HashSet::<Tuple, ahash::RandomState>::default();
    let mut tuples = Vec::<Tuple>::new();
    for multiset in multisets {
        // permutations of a multiset with repeated elements come several times
        for tuple in multiset.iter().copied().permutations(k) {
            if !seen.contains(&tuple) {
                seen.insert(tuple.clone());
                tuples.push(tuple);
            }
        }
    }
    tuples.sort_unstable();
    log::debug!("multiset enumeration, nb valid tuples : {}", tuples.len());
    tuples
} // end of enumerate_tuples



// end of mod tests
