//! Weisfeiler-Leman color refinement on a batch of vertex and edge labeled graphs.
//!
//! At round 0 vertices are colored by their label. At each following round the signature of a vertex is
//! the sorted list of (neighbour color, edge label) over its incident edges, followed by its own color.
//! Signatures of all graphs are gathered, sorted and deduplicated; the rank of a signature is the new color.
//! The numbering is thus global to the batch, which makes histograms of different graphs comparable,
//! and it is keyed by the signatures themselves, not by hashes of them.
//!
//! The feature vector of a graph is the histogram of the colors of its vertices after the last round
//! (or the concatenation of the histograms of all rounds in cumulative mode).

use std::collections::BTreeMap;
use std::time::SystemTime;
use cpu_time::ProcessTime;

use rayon::prelude::*;

use ndarray::Array2;
use sprs::{CsMat, TriMat};

use crate::errors::{KernelError, KernelResult};
use crate::graph::base::VertexLabel;
use crate::graph::labeled::{EdgeLabel, LabeledAdjacency, LabeledGraphT};

use super::gram::gram_matrix;
use super::params::WlParams;

/// dense color index of a round
pub type Color = u32;


/// What a vertex sees at one round. Ordering is the derived lexicographic one: neighbours first, then own color.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorSignature {
    neighbours : Vec<(Color, EdgeLabel)>,
    own : Color,
}


impl ColorSignature {

    fn new(vertex : usize, adjacency : &[(usize, EdgeLabel)], colors : &[Color]) -> Self {
        let mut neighbours : Vec<(Color, EdgeLabel)> = adjacency.iter().map(|(w, label)| (colors[*w], *label)).collect();
        neighbours.sort_unstable();
        ColorSignature{neighbours, own : colors[vertex]}
    }
} // end of impl ColorSignature



/// Result of refinement
pub struct WlKernel {
    /// one row per graph
    features : CsMat<f64>,
    /// features * transpose(features)
    gram : Array2<f64>,
    /// number of distinct colors in the batch at each round, round 0 included
    nb_colors : Vec<usize>,
} // end of WlKernel


impl WlKernel {
    /// sparse histograms, one row per graph
    pub fn get_features(&self) -> &CsMat<f64> {
        &self.features
    }

    /// histograms as a dense matrix
    pub fn get_dense_features(&self) -> Array2<f64> {
        self.features.to_dense()
    }

    ///
    pub fn get_gram(&self) -> &Array2<f64> {
        &self.gram
    }

    ///
    pub fn into_gram(self) -> Array2<f64> {
        self.gram
    }

    /// number of distinct colors at each round
    pub fn get_nb_colors(&self) -> &[usize] {
        &self.nb_colors
    }
} // end of impl WlKernel



pub struct ColorRefiner {
    params : WlParams,
}


impl ColorRefiner {

    pub fn new(params : WlParams) -> Self {
        ColorRefiner{params}
    }

    ///
    pub fn get_params(&self) -> &WlParams {
        &self.params
    }

    /// refines any batch of labeled graphs (base graphs for plain WL, tuple graphs for (k,s) WL)
    pub fn refine<G>(&self, graphs : &[G]) -> KernelResult<WlKernel>
        where G : LabeledGraphT + Sync {
        let (adjacencies, labels) : (Vec<LabeledAdjacency>, Vec<Vec<VertexLabel>>) = if self.params.get_parallel() {
            graphs.par_iter().map(|g| (g.get_labeled_adjacency(), g.get_vertex_labels())).unzip()
        }
        else {
            graphs.iter().map(|g| (g.get_labeled_adjacency(), g.get_vertex_labels())).unzip()
        };
        self.refine_labeled(&adjacencies, &labels)
    } // end of refine


    /// refinement from explicit initial colors and edge labeled adjacency lists
    pub fn refine_labeled(&self, adjacencies : &[LabeledAdjacency], labels : &[Vec<VertexLabel>]) -> KernelResult<WlKernel> {
        check_input(adjacencies, labels)?;
        let nb_graphs = adjacencies.len();
        let nb_iter = self.params.get_nb_iter();
        log::info!("color refinement of {} graphs, nb rounds : {}, cumulative : {}", nb_graphs, nb_iter, self.params.is_cumulative());
        let cpu_start = ProcessTime::now();
        let sys_start = SystemTime::now();
        //
        let (mut colors, mut nb_colors) = initial_colors(labels)?;
        log::debug!("round 0, nb colors : {}", nb_colors);
        let mut nb_colors_by_round = vec![nb_colors];
        let mut triplets = Vec::<(usize, usize, f64)>::new();
        let mut offset = 0;
        if self.params.is_cumulative() {
            push_histograms(&colors, offset, &mut triplets);
            offset += nb_colors;
        }
        for round in 1..=nb_iter {
            let (new_colors, new_nb_colors) = self.one_round(adjacencies, &colors)?;
            colors = new_colors;
            nb_colors = new_nb_colors;
            log::debug!("round {}, nb colors : {}", round, nb_colors);
            nb_colors_by_round.push(nb_colors);
            if self.params.is_cumulative() {
                push_histograms(&colors, offset, &mut triplets);
                offset += nb_colors;
            }
        }
        if !self.params.is_cumulative() {
            push_histograms(&colors, offset, &mut triplets);
            offset += nb_colors;
        }
        //
        let mut trimat = TriMat::<f64>::new((nb_graphs, offset));
        for (row, col, count) in triplets {
            trimat.add_triplet(row, col, count);
        }
        let features : CsMat<f64> = trimat.to_csr();
        let gram = gram_matrix(&features, self.params.get_parallel());
        log::info!("refinement done, feature dimension : {}, sys time(s) {:.2e} cpu time(s) {:.2e}", offset,
                sys_start.elapsed().map(|d| d.as_secs_f64()).unwrap_or(0.), cpu_start.elapsed().as_secs_f64());
        Ok(WlKernel{features, gram, nb_colors : nb_colors_by_round})
    } // end of refine_labeled


    // signatures are computed per graph (possibly in parallel), renumbering is global and sequential
    fn one_round(&self, adjacencies : &[LabeledAdjacency], colors : &[Vec<Color>]) -> KernelResult<(Vec<Vec<Color>>, usize)> {
        let graph_signatures = |(adjacency, colors) : (&LabeledAdjacency, &Vec<Color>)| -> Vec<ColorSignature> {
            adjacency.iter().enumerate().map(|(v, neighbours)| ColorSignature::new(v, neighbours, colors)).collect()
        };
        let signatures : Vec<Vec<ColorSignature>> = if self.params.get_parallel() {
            adjacencies.par_iter().zip(colors.par_iter()).map(graph_signatures).collect()
        }
        else {
            adjacencies.iter().zip(colors.iter()).map(graph_signatures).collect()
        };
        //
        let mut palette = BTreeMap::<&ColorSignature, Color>::new();
        for signature in signatures.iter().flatten() {
            palette.insert(signature, 0);
        }
        for (rank, color) in palette.values_mut().enumerate() {
            *color = color_of_rank(rank)?;
        }
        let new_colors = signatures.iter().map(|graph| graph.iter().map(|sig| palette[sig]).collect()).collect();
        Ok((new_colors, palette.len()))
    } // end of one_round

} // end of impl ColorRefiner



fn check_input(adjacencies : &[LabeledAdjacency], labels : &[Vec<VertexLabel>]) -> KernelResult<()> {
    if adjacencies.len() != labels.len() {
        return Err(KernelError::InvalidParameter(format!("got {} adjacencies and {} label arrays", adjacencies.len(), labels.len())));
    }
    for (g, (adjacency, labels)) in adjacencies.iter().zip(labels.iter()).enumerate() {
        let nb_vertices = labels.len();
        if adjacency.len() != nb_vertices {
            return Err(KernelError::InvalidParameter(format!("graph {} has {} labels for {} vertices", g, nb_vertices, adjacency.len())));
        }
        if adjacency.iter().flatten().any(|(w, _)| *w >= nb_vertices) {
            return Err(KernelError::InvalidParameter(format!("graph {} has a neighbour out of range", g)));
        }
    }
    Ok(())
} // end of check_input


// labels are mapped to 0..nb_distinct in increasing order, over the whole batch
fn initial_colors(labels : &[Vec<VertexLabel>]) -> KernelResult<(Vec<Vec<Color>>, usize)> {
    let mut palette = BTreeMap::<VertexLabel, Color>::new();
    for label in labels.iter().flatten() {
        palette.insert(*label, 0);
    }
    for (rank, color) in palette.values_mut().enumerate() {
        *color = color_of_rank(rank)?;
    }
    let colors = labels.iter().map(|graph| graph.iter().map(|l| palette[l]).collect()).collect();
    Ok((colors, palette.len()))
} // end of initial_colors


fn color_of_rank(rank : usize) -> KernelResult<Color> {
    Color::try_from(rank).map_err(|_| KernelError::InvalidParameter(format!("too many colors : {}", rank + 1)))
}


// appends (graph, offset + color, count) for each color present in each graph
fn push_histograms(colors : &[Vec<Color>], offset : usize, triplets : &mut Vec<(usize, usize, f64)>) {
    for (g, graph_colors) in colors.iter().enumerate() {
        let mut sorted = graph_colors.clone();
        sorted.sort_unstable();
        let mut start = 0;
        while start < sorted.len() {
            let color = sorted[start];
            let end = start + sorted[start..].partition_point(|c| *c == color);
            triplets.push((g, offset + color as usize, (end - start) as f64));
            start = end;
        }
    }
} // end of push_histograms



// end of mod tests
