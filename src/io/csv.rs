//! Dump of kernel results in csv files, to be consumed by an external classifier.
//!
//! - the Gram matrix : one line per graph, comma separated, no header
//! - a summary : one record per graph (class, base and tuple graph sizes, diagonal of kernel)

use std::path::Path;

use csv::WriterBuilder;
use ndarray::Array2;
use serde::Serialize;

use crate::errors::{KernelError, KernelResult};


/// per graph information dumped along the kernel
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphSummary {
    /// rank of graph in the dataset
    pub graph : usize,
    /// class of graph
    pub class : i64,
    ///
    pub nb_vertices : usize,
    ///
    pub nb_edges : usize,
    /// number of valid tuples
    pub nb_tuples : usize,
    /// number of edges of tuple graph, self loops included
    pub nb_tuple_edges : usize,
    /// kernel value of graph with itself
    pub self_similarity : f64,
} // end of GraphSummary



/// writes the gram matrix, one row per line
pub fn dump_gram_csv(gram : &Array2<f64>, path : &Path) -> KernelResult<()> {
    log::info!("dumping gram matrix of dimension {:?} in {:?}", gram.dim(), path);
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    for row in gram.rows() {
        writer.serialize(row.to_vec())?;
    }
    writer.flush()?;
    Ok(())
} // end of dump_gram_csv


/// writes the summary with a header line
pub fn dump_summary_csv(summary : &[GraphSummary], path : &Path) -> KernelResult<()> {
    log::info!("dumping summary of {} graphs in {:?}", summary.len(), path);
    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    for record in summary {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
} // end of dump_summary_csv


/// reloads a gram matrix dumped by [dump_gram_csv]
pub fn reload_gram_csv(path : &Path) -> KernelResult<Array2<f64>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_path(path)?;
    let mut rows = Vec::<Vec<f64>>::new();
    for record in reader.deserialize() {
        let row : Vec<f64> = record?;
        rows.push(row);
    }
    let nb_rows = rows.len();
    let nb_cols = rows.first().map_or(0, |r| r.len());
    if rows.iter().any(|r| r.len() != nb_cols) {
        return Err(KernelError::Format(format!("{:?} has rows of different lengths", path)));
    }
    let data : Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((nb_rows, nb_cols), data)
        .map_err(|e| KernelError::Format(format!("{:?} : {}", path, e)))
} // end of reload_gram_csv



// end of mod tests
