//! The input graphs.
//!
//! A base graph is undirected, its vertices are identified by their rank 0..n and each vertex carries
//! one integer label (0 when the data source gives none). Multi edges are merged.
//! A self loop is accepted and makes the vertex adjacent to itself.
//!
//! The graph is stored in a petgraph `UnGraph` and we keep alongside sorted adjacency lists
//! so that edge existence is a binary search, and neighbours are always visited in increasing rank.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

use crate::errors::{KernelError, KernelResult};

/// label attached to a vertex of a base graph
pub type VertexLabel = i64;


pub struct BaseGraph {
    /// petgraph representation, node weight is the vertex label
    graph : UnGraph<VertexLabel, ()>,
    /// sorted and deduplicated neighbours of each vertex
    adjacency : Vec<Vec<usize>>,
} // end of struct BaseGraph



impl BaseGraph {

    /// builds a graph with labels.len() vertices. Edges are given by ranks of vertices.
    pub fn new(labels : Vec<VertexLabel>, edges : &[(usize, usize)]) -> KernelResult<Self> {
        let nb_vertices = labels.len();
        let mut graph = UnGraph::<VertexLabel, ()>::with_capacity(nb_vertices, edges.len());
        for label in labels {
            graph.add_node(label);
        }
        let mut adjacency : Vec<Vec<usize>> = (0..nb_vertices).map(|_| Vec::new()).collect();
        for &(a,b) in edges {
            if a >= nb_vertices || b >= nb_vertices {
                return Err(KernelError::InvalidParameter(format!("edge ({}, {}) out of range, nb vertices : {}", a, b, nb_vertices)));
            }
            // update_edge do not create a second edge between the same nodes
            graph.update_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }
        for edge in graph.edge_references() {
            let (a,b) = (edge.source().index(), edge.target().index());
            adjacency[a].push(b);
            if a != b {
                adjacency[b].push(a);
            }
        }
        for neighbours in adjacency.iter_mut() {
            neighbours.sort_unstable();
            neighbours.dedup();
        }
        log::trace!("BaseGraph::new nb vertices : {}, nb edges : {}", nb_vertices, graph.edge_count());
        Ok(BaseGraph{graph, adjacency})
    } // end of new


    /// builds a graph without labels, all vertices get label 0
    pub fn unlabeled(nb_vertices : usize, edges : &[(usize, usize)]) -> KernelResult<Self> {
        BaseGraph::new(vec![0; nb_vertices], edges)
    }


    /// builds from a petgraph undirected graph, the node weights being the labels.
    pub fn from_petgraph<E>(graph : &UnGraph<VertexLabel, E>) -> KernelResult<Self> {
        let labels : Vec<VertexLabel> = graph.node_indices().map(|n| graph[n]).collect();
        let edges : Vec<(usize, usize)> = graph.edge_references().map(|e| (e.source().index(), e.target().index())).collect();
        BaseGraph::new(labels, &edges)
    }

    /// get access to the petgraph representation
    pub fn get_graph(&self) -> &UnGraph<VertexLabel, ()> {
        &self.graph
    }

    ///
    pub fn get_nb_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// number of edges, self loops included
    pub fn get_nb_edges(&self) -> usize {
        self.graph.edge_count()
    }

    ///
    pub fn get_label(&self, vertex : usize) -> VertexLabel {
        self.graph[NodeIndex::new(vertex)]
    }

    /// labels in vertex rank order
    pub fn get_labels(&self) -> Vec<VertexLabel> {
        self.graph.node_indices().map(|n| self.graph[n]).collect()
    }

    /// neighbours in increasing order. A vertex with a self loop is its own neighbour.
    pub fn get_neighbours(&self, vertex : usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// true if an edge joins v and w (self loop if v == w)
    pub fn has_edge(&self, v : usize, w : usize) -> bool {
        self.adjacency[v].binary_search(&w).is_ok()
    }


    /// number of connected components of the subgraph induced by the distinct vertices in vertices.
    /// An empty slice has no component.
    pub fn induced_components(&self, vertices : &[usize]) -> usize {
        let mut distinct = vertices.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        let nb_distinct = distinct.len();
        let mut unionfind = UnionFind::<usize>::new(nb_distinct);
        let mut nb_components = nb_distinct;
        for i in 0..nb_distinct {
            for j in (i+1)..nb_distinct {
                if self.has_edge(distinct[i], distinct[j]) && unionfind.union(i, j) {
                    nb_components -= 1;
                }
            }
        }
        nb_components
    } // end of induced_components

} // end of impl BaseGraph



#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn multi_edges_merged() {
        log_init_test();
        let graph = BaseGraph::new(vec![1, 2, 3], &[(0,1), (1,0), (0,1), (1,2), (2,2)]).unwrap();
        assert_eq!(graph.get_nb_edges(), 3);
        assert_eq!(graph.get_neighbours(0), &[1]);
        assert_eq!(graph.get_neighbours(1), &[0, 2]);
        assert_eq!(graph.get_neighbours(2), &[1, 2]);
        assert!(graph.has_edge(2, 2));
        assert!(!graph.has_edge(0, 0));
        assert_eq!(graph.get_labels(), vec![1, 2, 3]);
    } // end of multi_edges_merged


    #[test]
    fn edge_out_of_range() {
        log_init_test();
        let res = BaseGraph::unlabeled(2, &[(0, 2)]);
        assert!(matches!(res, Err(KernelError::InvalidParameter(_))));
    }


    #[test]
    fn components_of_induced_subgraph() {
        log_init_test();
        // path 0-1-2 and isolated 3
        let graph = BaseGraph::unlabeled(4, &[(0,1), (1,2)]).unwrap();
        assert_eq!(graph.induced_components(&[]), 0);
        assert_eq!(graph.induced_components(&[0, 0, 0]), 1);
        assert_eq!(graph.induced_components(&[0, 2]), 2);
        assert_eq!(graph.induced_components(&[0, 2, 1]), 1);
        assert_eq!(graph.induced_components(&[0, 2, 3]), 3);
        assert_eq!(graph.induced_components(&[3, 1, 0, 3]), 2);
    } // end of components_of_induced_subgraph


    #[test]
    fn roundtrip_petgraph() {
        log_init_test();
        let mut pgraph = UnGraph::<VertexLabel, f32>::new_undirected();
        let a = pgraph.add_node(5);
        let b = pgraph.add_node(7);
        pgraph.add_edge(a, b, 1.);
        let graph = BaseGraph::from_petgraph(&pgraph).unwrap();
        assert_eq!(graph.get_nb_vertices(), 2);
        assert_eq!(graph.get_label(1), 7);
        assert!(graph.has_edge(1, 0));
    }

}  // end of mod tests
