//! Random labeled graphs.
//!
//! An alternate graph source, useful for tests and benchmarks of the tuple graph construction.
//! The generator is seeded so a dataset can be regenerated identically.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::graph::base::{BaseGraph, VertexLabel};


pub struct RandomGraphGenerator {
    rng : Xoshiro256PlusPlus,
}


impl RandomGraphGenerator {

    pub fn new(seed : u64) -> Self {
        RandomGraphGenerator{rng : Xoshiro256PlusPlus::seed_from_u64(seed)}
    }

    /// G(n,p) graph without self loops, labels drawn uniformly in 0..nb_labels (all 0 if nb_labels <= 1).
    /// p is clamped to \[0,1\], a NaN p gives no edge.
    pub fn erdos_renyi(&mut self, nb_vertices : usize, p : f64, nb_labels : usize) -> BaseGraph {
        let p = if p.is_nan() {
            log::warn!("erdos_renyi got a NaN edge probability, using 0.");
            0.
        }
        else {
            p.clamp(0., 1.)
        };
        let labels : Vec<VertexLabel> = (0..nb_vertices).map(|_| {
            if nb_labels > 1 { self.rng.gen_range(0..nb_labels) as VertexLabel } else { 0 }
        }).collect();
        let mut edges = Vec::<(usize, usize)>::new();
        for v in 0..nb_vertices {
            for w in (v + 1)..nb_vertices {
                if self.rng.gen_bool(p) {
                    edges.push((v, w));
                }
            }
        }
        log::trace!("erdos_renyi nb vertices : {}, nb edges : {}", nb_vertices, edges.len());
        // ranks are in range by construction
        match BaseGraph::new(labels, &edges) {
            Ok(graph) => graph,
            Err(e) => unreachable!("erdos_renyi generated an invalid edge : {}", e),
        }
    } // end of erdos_renyi


    /// nb_graphs G(n,p) graphs, n drawn uniformly in min_vertices..=max_vertices
    pub fn dataset(&mut self, nb_graphs : usize, min_vertices : usize, max_vertices : usize, p : f64, nb_labels : usize) -> Vec<BaseGraph> {
        let max_vertices = max_vertices.max(min_vertices);
        (0..nb_graphs).map(|_| {
            let n = self.rng.gen_range(min_vertices..=max_vertices);
            self.erdos_renyi(n, p, nb_labels)
        }).collect()
    } // end of dataset

} // end of impl RandomGraphGenerator



#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        log_init_test();
        let graphs_a = RandomGraphGenerator::new(42).dataset(5, 3, 9, 0.3, 4);
        let graphs_b = RandomGraphGenerator::new(42).dataset(5, 3, 9, 0.3, 4);
        for (a, b) in graphs_a.iter().zip(graphs_b.iter()) {
            assert!(a.get_nb_vertices() >= 3 && a.get_nb_vertices() <= 9);
            assert_eq!(a.get_labels(), b.get_labels());
            for v in 0..a.get_nb_vertices() {
                assert_eq!(a.get_neighbours(v), b.get_neighbours(v));
                assert!(!a.has_edge(v, v));
            }
            assert!(a.get_labels().iter().all(|l| *l >= 0 && *l < 4));
        }
    }

    #[test]
    fn extreme_probabilities() {
        log_init_test();
        let mut generator = RandomGraphGenerator::new(1);
        let complete = generator.erdos_renyi(5, 1., 1);
        assert_eq!(complete.get_nb_edges(), 10);
        assert!(complete.get_labels().iter().all(|l| *l == 0));
        let empty = generator.erdos_renyi(5, 0., 1);
        assert_eq!(empty.get_nb_edges(), 0);
        let clamped = generator.erdos_renyi(4, 2.5, 1);
        assert_eq!(clamped.get_nb_edges(), 6);
        let undefined = generator.erdos_renyi(6, f64::NAN, 2);
        assert_eq!(undefined.get_nb_vertices(), 6);
        assert_eq!(undefined.get_nb_edges(), 0);
    }

} // end of mod tests
