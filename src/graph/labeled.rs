//! The interface color refinement needs from a graph.
//!
//! Refinement only looks at integer vertex labels and at the list of (neighbour, edge label)
//! around each vertex. Base graphs and tuple graphs both provide it, so plain Weisfeiler-Leman
//! and (k,s) Weisfeiler-Leman share the same refiner.

use super::base::{BaseGraph, VertexLabel};

/// label carried by an edge. For tuple graphs it is the 1-based exchanged coordinate, 0 for the self loop.
pub type EdgeLabel = u32;

/// for each vertex the list of (neighbour rank, edge label).
/// A self loop appears once in the list of its vertex.
pub type LabeledAdjacency = Vec<Vec<(usize, EdgeLabel)>>;


pub trait LabeledGraphT {
    /// number of vertices
    fn get_nb_vertices(&self) -> usize;
    /// initial colors, in vertex rank order
    fn get_vertex_labels(&self) -> Vec<VertexLabel>;
    /// edge labeled adjacency lists, in vertex rank order
    fn get_labeled_adjacency(&self) -> LabeledAdjacency;
} // end of trait LabeledGraphT



/// Base graph edges all get label 0. No self loop is added.
impl LabeledGraphT for BaseGraph {

    fn get_nb_vertices(&self) -> usize {
        BaseGraph::get_nb_vertices(self)
    }

    fn get_vertex_labels(&self) -> Vec<VertexLabel> {
        self.get_labels()
    }

    fn get_labeled_adjacency(&self) -> LabeledAdjacency {
        (0..BaseGraph::get_nb_vertices(self)).map(|v| self.get_neighbours(v).iter().map(|w| (*w, 0)).collect()).collect()
    }
} // end of impl LabeledGraphT for BaseGraph
