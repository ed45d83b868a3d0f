//! The (k,s)-tuple graph.
//!
//! Its vertices are the valid k-tuples of a base graph, labeled by their atomic type.
//! Two tuples are joined when they differ in exactly one coordinate i and the new value is a neighbour
//! of the old one in the base graph. The edge is labeled i+1. Each vertex has one self loop labeled 0.
//!
//! The tuples are kept in an IndexSet: the rank of a tuple in the set is the index of its node
//! in the petgraph graph.

use indexmap::IndexSet;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::base::{BaseGraph, VertexLabel};
use super::labeled::{EdgeLabel, LabeledAdjacency, LabeledGraphT};

use crate::tuple::atomic::AtomicType;

/// an ordered sequence of vertex ranks of a base graph
pub type Tuple = Vec<usize>;

/// label of the self loop
pub const SELF_LOOP_LABEL : EdgeLabel = 0;


pub struct DerivedGraph {
    /// length of tuples
    k : usize,
    /// node weight is the atomic type, edge weight the exchanged coordinate (1-based)
    graph : UnGraph<AtomicType, EdgeLabel>,
    /// tuple of rank r corresponds to NodeIndex r
    tuples : IndexSet<Tuple, ahash::RandomState>,
} // end of struct DerivedGraph



impl DerivedGraph {

    /// Builds the tuple graph. atomic_types\[r\] is the type of tuples\[r\].
    /// A tuple already seen is skipped with its type, the first occurrence fixes the node rank.
    pub(crate) fn new(base : &BaseGraph, k : usize, tuples : Vec<Tuple>, atomic_types : Vec<AtomicType>) -> Self {
        assert_eq!(tuples.len(), atomic_types.len());
        let nb_nodes = tuples.len();
        let mut graph = UnGraph::<AtomicType, EdgeLabel>::with_capacity(nb_nodes, nb_nodes * (k + 1));
        let mut tuple_set = IndexSet::<Tuple, ahash::RandomState>::with_capacity_and_hasher(nb_nodes, ahash::RandomState::new());
        for (t, atomic_type) in tuples.into_iter().zip(atomic_types) {
            if !tuple_set.insert(t) {
                log::debug!("DerivedGraph::new skipping a duplicated tuple");
                continue;
            }
            graph.add_node(atomic_type);
        }
        //
        let mut exchanged = vec![0usize; k];
        for (m, t) in tuple_set.iter().enumerate() {
            let m_idx = NodeIndex::new(m);
            exchanged.copy_from_slice(t);
            for i in 0..k {
                let v = t[i];
                for &w in base.get_neighbours(v) {
                    // a base self loop must not give a second derived self loop
                    if w == v {
                        continue;
                    }
                    exchanged[i] = w;
                    if let Some(rank) = tuple_set.get_index_of(&exchanged) {
                        let n_idx = NodeIndex::new(rank);
                        if graph.find_edge(m_idx, n_idx).is_none() {
                            graph.add_edge(m_idx, n_idx, (i + 1) as EdgeLabel);
                        }
                    }
                }
                exchanged[i] = v;
            }
            graph.add_edge(m_idx, m_idx, SELF_LOOP_LABEL);
        }
        log::trace!("DerivedGraph::new nb nodes : {}, nb edges : {}", graph.node_count(), graph.edge_count());
        DerivedGraph{k, graph, tuples : tuple_set}
    } // end of new


    /// length of tuples
    pub fn get_k(&self) -> usize {
        self.k
    }

    /// get access to the petgraph representation
    pub fn get_graph(&self) -> &UnGraph<AtomicType, EdgeLabel> {
        &self.graph
    }

    /// number of valid tuples
    pub fn get_nb_vertices(&self) -> usize {
        self.graph.node_count()
    }

    /// number of edges, self loops included
    pub fn get_nb_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// returns tuple of a given node rank
    pub fn get_tuple(&self, rank : usize) -> Option<&Tuple> {
        self.tuples.get_index(rank)
    }

    /// returns node rank of a tuple, None if the tuple is not valid
    pub fn get_node_rank(&self, tuple : &[usize]) -> Option<usize> {
        self.tuples.get_index_of(tuple)
    }

    /// atomic type of node of given rank
    pub fn get_atomic_type(&self, rank : usize) -> AtomicType {
        self.graph[NodeIndex::new(rank)]
    }

    /// atomic types in node rank order
    pub fn get_atomic_types(&self) -> Vec<AtomicType> {
        self.graph.node_indices().map(|n| self.graph[n]).collect()
    }

    /// label of edge between nodes of rank a and b if any
    pub fn get_edge_label(&self, a : usize, b : usize) -> Option<EdgeLabel> {
        self.graph.find_edge(NodeIndex::new(a), NodeIndex::new(b)).map(|e| self.graph[e])
    }

    /// list of edges as (rank, rank, label) with rank of first node <= rank of second, sorted.
    pub fn get_sorted_edges(&self) -> Vec<(usize, usize, EdgeLabel)> {
        let mut edges : Vec<(usize, usize, EdgeLabel)> = self.graph.edge_references().map(|e| {
            let (a, b) = (e.source().index(), e.target().index());
            (a.min(b), a.max(b), *e.weight())
        }).collect();
        edges.sort_unstable();
        edges
    }

} // end of impl DerivedGraph



impl LabeledGraphT for DerivedGraph {

    fn get_nb_vertices(&self) -> usize {
        self.graph.node_count()
    }

    fn get_vertex_labels(&self) -> Vec<VertexLabel> {
        self.graph.node_indices().map(|n| VertexLabel::from(self.graph[n])).collect()
    }

    // we do not rely on petgraph iteration of self loops in undirected graphs, each edge is dispatched once
    fn get_labeled_adjacency(&self) -> LabeledAdjacency {
        let mut adjacency : LabeledAdjacency = (0..self.graph.node_count()).map(|_| Vec::new()).collect();
        for edge in self.graph.edge_references() {
            let (a, b) = (edge.source().index(), edge.target().index());
            adjacency[a].push((b, *edge.weight()));
            if a != b {
                adjacency[b].push((a, *edge.weight()));
            }
        }
        adjacency
    }
} // end of impl LabeledGraphT for DerivedGraph



#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn duplicated_tuples_are_skipped() {
        log_init_test();
        let base = BaseGraph::unlabeled(2, &[(0,1)]).unwrap();
        let tuples = vec![vec![0, 1], vec![1, 1], vec![0, 1], vec![1, 0], vec![1, 1]];
        let types = vec![0, 1, 0, 2, 1];
        let derived = DerivedGraph::new(&base, 2, tuples, types);
        assert_eq!(derived.get_nb_vertices(), 3);
        assert_eq!(derived.get_atomic_types(), vec![0, 1, 2]);
        assert_eq!(derived.get_node_rank(&[1, 0]), Some(2));
        // (0,1)-(1,1) on coordinate 1, (1,1)-(1,0) on coordinate 2, plus 3 self loops
        assert_eq!(derived.get_edge_label(0, 1), Some(1));
        assert_eq!(derived.get_edge_label(1, 2), Some(2));
        assert_eq!(derived.get_edge_label(0, 2), None);
        assert_eq!(derived.get_nb_edges(), 5);
        let adjacency = derived.get_labeled_adjacency();
        assert!(adjacency.iter().enumerate().all(|(v, n)| n.iter().filter(|(w, _)| *w == v).count() == 1));
    }

} // end of mod tests
