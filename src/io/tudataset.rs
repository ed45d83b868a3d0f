//! Loading of graph classification benchmarks in the TU Dortmund text format.
//!
//! A dataset NAME is a directory containing :
//! - NAME_A.txt : one edge "i, j" per line, node ids global to the dataset and 1-based
//! - NAME_graph_indicator.txt : line i gives the graph id (1-based) of node i
//! - NAME_graph_labels.txt : line g gives the class of graph g
//! - NAME_node_labels.txt : optional, line i gives the label of node i
//!
//! Edges are listed in both directions in these files; the duplicates are merged by [BaseGraph].

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::errors::{KernelError, KernelResult};
use crate::graph::base::{BaseGraph, VertexLabel};


/// A set of graphs with their class.
pub struct GraphDataset {
    ///
    pub graphs : Vec<BaseGraph>,
    /// class of each graph, passed through to the evaluation
    pub classes : Vec<i64>,
}


// reads a file of comma separated integers, each record must have nb_fields fields
fn read_integers(path : &Path, nb_fields : usize) -> KernelResult<Vec<Vec<i64>>> {
    log::debug!("reading {:?}", path);
    let mut reader = ReaderBuilder::new().has_headers(false).trim(Trim::All).flexible(true).from_path(path)?;
    let mut rows = Vec::<Vec<i64>>::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        // skip empty lines
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if record.len() != nb_fields {
            return Err(KernelError::Format(format!("{:?} line {} : expected {} fields, got {}", path, line + 1, nb_fields, record.len())));
        }
        let mut row = Vec::<i64>::with_capacity(nb_fields);
        for field in record.iter() {
            let value = field.parse::<i64>()
                .map_err(|_| KernelError::Format(format!("{:?} line {} : cannot parse {:?}", path, line + 1, field)))?;
            row.push(value);
        }
        rows.push(row);
    }
    Ok(rows)
} // end of read_integers



fn read_column(path : &Path) -> KernelResult<Vec<i64>> {
    Ok(read_integers(path, 1)?.into_iter().map(|r| r[0]).collect())
}


/// loads dataset name from directory dir
pub fn read_tu_dataset(dir : &Path, name : &str) -> KernelResult<GraphDataset> {
    log::info!("loading dataset {} from {:?}", name, dir);
    let indicator = read_column(&dir.join(format!("{}_graph_indicator.txt", name)))?;
    let classes = read_column(&dir.join(format!("{}_graph_labels.txt", name)))?;
    let edges = read_integers(&dir.join(format!("{}_A.txt", name)), 2)?;
    let node_labels_path = dir.join(format!("{}_node_labels.txt", name));
    let node_labels = if node_labels_path.exists() {
        let labels = read_column(&node_labels_path)?;
        if labels.len() != indicator.len() {
            return Err(KernelError::Format(format!("{} node labels for {} nodes", labels.len(), indicator.len())));
        }
        labels
    }
    else {
        log::info!("no node labels for dataset {}, using label 0", name);
        vec![0; indicator.len()]
    };
    //
    let nb_graphs = classes.len();
    // rank of each node inside its graph
    let mut graph_of_node = Vec::<usize>::with_capacity(indicator.len());
    let mut local_rank = Vec::<usize>::with_capacity(indicator.len());
    let mut labels_by_graph : Vec<Vec<VertexLabel>> = (0..nb_graphs).map(|_| Vec::new()).collect();
    for (node, graph_id) in indicator.iter().enumerate() {
        if *graph_id < 1 || *graph_id as usize > nb_graphs {
            return Err(KernelError::Format(format!("node {} has graph id {} but there are {} graphs", node + 1, graph_id, nb_graphs)));
        }
        let g = *graph_id as usize - 1;
        graph_of_node.push(g);
        local_rank.push(labels_by_graph[g].len());
        labels_by_graph[g].push(node_labels[node]);
    }
    let mut edges_by_graph : Vec<Vec<(usize, usize)>> = (0..nb_graphs).map(|_| Vec::new()).collect();
    for edge in edges {
        let (a, b) = (edge[0], edge[1]);
        if a < 1 || b < 1 || a as usize > indicator.len() || b as usize > indicator.len() {
            return Err(KernelError::Format(format!("edge ({}, {}) refers to an unknown node", a, b)));
        }
        let (a, b) = (a as usize - 1, b as usize - 1);
        if graph_of_node[a] != graph_of_node[b] {
            return Err(KernelError::Format(format!("edge ({}, {}) joins 2 graphs", a + 1, b + 1)));
        }
        edges_by_graph[graph_of_node[a]].push((local_rank[a], local_rank[b]));
    }
    //
    let graphs = labels_by_graph.into_iter().zip(edges_by_graph.iter())
        .map(|(labels, edges)| BaseGraph::new(labels, edges))
        .collect::<KernelResult<Vec<BaseGraph>>>()?;
    log::info!("dataset {} loaded, nb graphs : {}, nb nodes : {}", name, graphs.len(), indicator.len());
    Ok(GraphDataset{graphs, classes})
} // end of read_tu_dataset



// end of mod tests
