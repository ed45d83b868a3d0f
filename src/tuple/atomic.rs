//! Atomic types of tuples.
//!
//! The atomic type of a tuple (v_0, ..., v_{k-1}) describes for each ordered pair of positions (i,j)
//! whether v_i and v_j are adjacent, equal, or neither, possibly together with the labels of v_i and v_j.
//! Two tuples have the same atomic type iff they have the same description.
//!
//! The registry keys its table by the full sorted description, never by a hash of it,
//! so two distinct descriptions cannot be merged.

use indexmap::IndexSet;

use crate::errors::{KernelError, KernelResult};
use crate::graph::base::{BaseGraph, VertexLabel};

/// dense integer identifying an atomic type
pub type AtomicType = u32;


/// Relation between the vertices at 2 positions of a tuple.
/// Adjacency is tested first, so a vertex with a self loop is Adjacent to itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relation {
    Adjacent = 1,
    NonAdjacent = 2,
    Equal = 3,
}


#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairRelation {
    /// first position
    i : u32,
    /// second position
    j : u32,
    ///
    relation : Relation,
    /// labels of vertices at positions i and j, when node labels are used
    labels : Option<(VertexLabel, VertexLabel)>,
} // end of PairRelation


impl PairRelation {
    ///
    pub fn get_positions(&self) -> (usize, usize) {
        (self.i as usize, self.j as usize)
    }

    ///
    pub fn get_relation(&self) -> Relation {
        self.relation
    }

    ///
    pub fn get_labels(&self) -> Option<(VertexLabel, VertexLabel)> {
        self.labels
    }
} // end of impl PairRelation



/// The canonical form of a tuple: the sorted list of its pair relations.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AtomicSignature(Vec<PairRelation>);


impl AtomicSignature {

    /// computes the signature of tuple in graph
    pub fn new(graph : &BaseGraph, tuple : &[usize], use_labels : bool) -> Self {
        let k = tuple.len();
        let mut pairs = Vec::<PairRelation>::with_capacity(k * k);
        for (i, &v) in tuple.iter().enumerate() {
            for (j, &w) in tuple.iter().enumerate() {
                let relation = if graph.has_edge(v, w) {
                    Relation::Adjacent
                }
                else if v == w {
                    Relation::Equal
                }
                else {
                    Relation::NonAdjacent
                };
                let labels = if use_labels { Some((graph.get_label(v), graph.get_label(w))) } else { None };
                pairs.push(PairRelation{i : i as u32, j : j as u32, relation, labels});
            }
        }
        // pairs are generated in (i,j) order, sorting keeps the key canonical if generation order changes
        pairs.sort_unstable();
        AtomicSignature(pairs)
    } // end of new

    ///
    pub fn get_pairs(&self) -> &[PairRelation] {
        &self.0
    }

} // end of impl AtomicSignature



/// Global table of atomic types seen during a run.
/// A type gets the next integer the first time its signature is registered.
/// The same registry must be used for all graphs whose colors are compared.
pub struct AtomicTypeRegistry {
    types : IndexSet<AtomicSignature, ahash::RandomState>,
} // end of AtomicTypeRegistry


impl Default for AtomicTypeRegistry {
    fn default() -> Self {
        AtomicTypeRegistry{types : IndexSet::with_hasher(ahash::RandomState::new())}
    }
}


impl AtomicTypeRegistry {

    pub fn new() -> Self {
        AtomicTypeRegistry::default()
    }

    /// returns the type of the signature, allocating a new one if signature was never seen.
    /// Fails if the number of types exceeds the range of AtomicType.
    pub fn register(&mut self, signature : AtomicSignature) -> KernelResult<AtomicType> {
        let (rank, inserted) = self.types.insert_full(signature);
        if inserted {
            log::trace!("new atomic type : {}", rank);
        }
        type_of_rank(rank)
    } // end of register

    /// atomic type of a tuple of graph
    pub fn classify(&mut self, tuple : &[usize], graph : &BaseGraph, use_labels : bool) -> KernelResult<AtomicType> {
        self.register(AtomicSignature::new(graph, tuple, use_labels))
    }

    /// returns type of a signature if already registered
    pub fn get_type(&self, signature : &AtomicSignature) -> Option<AtomicType> {
        self.types.get_index_of(signature).and_then(|rank| AtomicType::try_from(rank).ok())
    }

    /// returns the signature of a type
    pub fn get_signature(&self, atomic_type : AtomicType) -> Option<&AtomicSignature> {
        self.types.get_index(atomic_type as usize)
    }

    /// number of distinct types seen
    pub fn len(&self) -> usize {
        self.types.len()
    }

    ///
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

} // end of impl AtomicTypeRegistry


fn type_of_rank(rank : usize) -> KernelResult<AtomicType> {
    AtomicType::try_from(rank).map_err(|_| KernelError::InvalidParameter(format!("too many atomic types : {}", rank + 1)))
}



#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn relations_of_pairs() {
        log_init_test();
        // path 0-1-2, vertex 2 has a self loop
        let graph = BaseGraph::unlabeled(3, &[(0,1), (1,2), (2,2)]).unwrap();
        let signature = AtomicSignature::new(&graph, &[0, 1, 0], false);
        let pairs = signature.get_pairs();
        assert_eq!(pairs.len(), 9);
        let relation = |i : usize, j : usize| pairs.iter().find(|p| p.get_positions() == (i,j)).unwrap().get_relation();
        assert_eq!(relation(0, 0), Relation::Equal);
        assert_eq!(relation(0, 1), Relation::Adjacent);
        assert_eq!(relation(1, 0), Relation::Adjacent);
        assert_eq!(relation(0, 2), Relation::Equal);
        assert_eq!(relation(2, 1), Relation::Adjacent);
        //
        let signature = AtomicSignature::new(&graph, &[2, 0], false);
        let pairs = signature.get_pairs();
        assert_eq!(pairs[0].get_relation(), Relation::Adjacent);
        assert_eq!(pairs[1].get_relation(), Relation::NonAdjacent);
        assert!(pairs.iter().all(|p| p.get_labels().is_none()));
    } // end of relations_of_pairs


    #[test]
    fn first_seen_numbering() {
        log_init_test();
        let graph = BaseGraph::new(vec![4, 4, 9], &[(0,1), (1,2)]).unwrap();
        let mut registry = AtomicTypeRegistry::new();
        assert!(registry.is_empty());
        // (0,1) and (1,2) are both adjacent pairs of distinct vertices
        assert_eq!(registry.classify(&[0, 1], &graph, false).unwrap(), 0);
        assert_eq!(registry.classify(&[0, 0], &graph, false).unwrap(), 1);
        assert_eq!(registry.classify(&[1, 2], &graph, false).unwrap(), 0);
        assert_eq!(registry.classify(&[0, 2], &graph, false).unwrap(), 2);
        assert_eq!(registry.len(), 3);
        // labels separate (0,1) from (1,2)
        assert_eq!(registry.classify(&[0, 1], &graph, true).unwrap(), 3);
        assert_eq!(registry.classify(&[1, 2], &graph, true).unwrap(), 4);
        assert_eq!(registry.classify(&[1, 0], &graph, true).unwrap(), 3);
        let signature = registry.get_signature(4).unwrap().clone();
        assert_eq!(registry.get_type(&signature), Some(4));
        assert!(registry.get_signature(5).is_none());
    } // end of first_seen_numbering


    #[test]
    fn registry_shared_across_graphs() {
        log_init_test();
        let triangle = BaseGraph::unlabeled(3, &[(0,1), (1,2), (2,0)]).unwrap();
        let path = BaseGraph::unlabeled(3, &[(0,1), (1,2)]).unwrap();
        let mut registry = AtomicTypeRegistry::new();
        let t_triangle = registry.classify(&[0, 1, 2], &triangle, false).unwrap();
        let t_path = registry.classify(&[0, 1, 2], &path, false).unwrap();
        assert_ne!(t_triangle, t_path);
        // the path 2-1-0 seen in the triangle is a triangle
        assert_eq!(registry.classify(&[2, 1, 0], &triangle, false).unwrap(), t_triangle);
        // in the path, (1, 0, 2) is centered on 1 and differs from (0, 1, 2)
        let t_center = registry.classify(&[1, 0, 2], &path, false).unwrap();
        assert_ne!(t_center, t_path);
        assert_eq!(registry.classify(&[1, 2, 0], &path, false).unwrap(), t_center);
    } // end of registry_shared_across_graphs


    #[test]
    fn type_range_is_checked() {
        log_init_test();
        assert_eq!(type_of_rank(7).unwrap(), 7);
        assert_eq!(type_of_rank(AtomicType::MAX as usize).unwrap(), AtomicType::MAX);
        if usize::BITS > AtomicType::BITS {
            assert!(matches!(type_of_rank(AtomicType::MAX as usize + 1), Err(KernelError::InvalidParameter(_))));
        }
    }

} // end of mod tests
