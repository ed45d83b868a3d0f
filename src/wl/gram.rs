//! Gram matrix of feature vectors and its normalization.
//!
//! The kernel value of 2 graphs is the dot product of their histograms, so the Gram matrix
//! is F * F^t which is symmetric positive semi definite.

use rayon::prelude::*;

use ndarray::Array2;
use sprs::CsMat;

use crate::errors::{KernelError, KernelResult};


/// computes features * transpose(features). Rows of features are graphs.
/// A csc matrix is converted to csr first.
pub fn gram_matrix(features : &CsMat<f64>, parallel : bool) -> Array2<f64> {
    if !features.is_csr() {
        log::debug!("gram_matrix, converting features to csr");
        return gram_matrix(&features.to_csr(), parallel);
    }
    let nb_graphs = features.rows();
    let upper_row = |i : usize| -> Vec<f64> {
        match features.outer_view(i) {
            Some(row_i) => (i..nb_graphs).map(|j| features.outer_view(j).map_or(0., |row_j| row_i.dot(&row_j))).collect(),
            None => vec![0.; nb_graphs - i],
        }
    };
    let rows : Vec<Vec<f64>> = if parallel {
        (0..nb_graphs).into_par_iter().map(upper_row).collect()
    }
    else {
        (0..nb_graphs).map(upper_row).collect()
    };
    let mut gram = Array2::<f64>::zeros((nb_graphs, nb_graphs));
    for (i, row) in rows.into_iter().enumerate() {
        for (offset, value) in row.into_iter().enumerate() {
            gram[[i, i + offset]] = value;
            gram[[i + offset, i]] = value;
        }
    }
    gram
} // end of gram_matrix



/// Normalizes the kernel : M(i,j) / sqrt(M(i,i) * M(j,j)).
/// Entries involving a graph with null diagonal (an empty graph) are set to 0.
/// Fails if the matrix is not square.
pub fn normalize_gram_matrix(gram : &mut Array2<f64>) -> KernelResult<()> {
    let (nb_row, nb_col) = gram.dim();
    if nb_row != nb_col {
        return Err(KernelError::InvalidParameter(format!("normalize_gram_matrix, matrix is not square : {} x {}", nb_row, nb_col)));
    }
    let diagonal : Vec<f64> = gram.diag().to_vec();
    let nb_null = diagonal.iter().filter(|d| !(**d > 0.)).count();
    if nb_null > 0 {
        log::warn!("normalize_gram_matrix, nb graphs with null self similarity : {}", nb_null);
    }
    for ((i, j), value) in gram.indexed_iter_mut() {
        let norm = (diagonal[i] * diagonal[j]).sqrt();
        *value = if norm > 0. { *value / norm } else { 0. };
    }
    Ok(())
} // end of normalize_gram_matrix



#[cfg(test)]
mod tests {

    use super::*;

    use sprs::TriMat;

    use crate::graph::base::BaseGraph;
    use crate::tools::generator::RandomGraphGenerator;
    use crate::tuple::builder::TupleGraphBuilder;
    use crate::tuple::params::{Enumeration, TupleGraphParams};
    use crate::wl::params::WlParams;
    use crate::wl::refine::ColorRefiner;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // eigenvalues of a symmetric matrix by cyclic Jacobi rotations
    fn jacobi_eigenvalues(mat : &Array2<f64>) -> Vec<f64> {
        let n = mat.nrows();
        let mut a = mat.clone();
        for _sweep in 0..100 {
            let off : f64 = (0..n).flat_map(|i| (0..n).map(move |j| (i, j))).filter(|(i, j)| i != j).map(|(i, j)| a[[i, j]] * a[[i, j]]).sum();
            if off < 1.0e-18 {
                break;
            }
            for p in 0..n {
                for q in (p + 1)..n {
                    if a[[p, q]].abs() < 1.0e-300 {
                        continue;
                    }
                    let theta = (a[[q, q]] - a[[p, p]]) / (2. * a[[p, q]]);
                    let t = theta.signum() / (theta.abs() + (theta * theta + 1.).sqrt());
                    let c = 1. / (t * t + 1.).sqrt();
                    let s = t * c;
                    for k in 0..n {
                        let (akp, akq) = (a[[k, p]], a[[k, q]]);
                        a[[k, p]] = c * akp - s * akq;
                        a[[k, q]] = s * akp + c * akq;
                    }
                    for k in 0..n {
                        let (apk, aqk) = (a[[p, k]], a[[q, k]]);
                        a[[p, k]] = c * apk - s * aqk;
                        a[[q, k]] = s * apk + c * aqk;
                    }
                }
            }
        }
        (0..n).map(|i| a[[i, i]]).collect()
    } // end of jacobi_eigenvalues


    #[test]
    fn jacobi_on_known_matrix() {
        log_init_test();
        let mat = ndarray::arr2(&[[2., 1.], [1., 2.]]);
        let mut eigen = jacobi_eigenvalues(&mat);
        eigen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((eigen[0] - 1.).abs() < 1.0e-9);
        assert!((eigen[1] - 3.).abs() < 1.0e-9);
    }


    #[test]
    fn gram_of_small_features() {
        log_init_test();
        let mut trimat = TriMat::<f64>::new((3, 4));
        trimat.add_triplet(0, 0, 2.);
        trimat.add_triplet(0, 3, 1.);
        trimat.add_triplet(1, 3, 4.);
        let features : CsMat<f64> = trimat.to_csr();
        for parallel in [false, true] {
            let gram = gram_matrix(&features, parallel);
            assert_eq!(gram, ndarray::arr2(&[[5., 4., 0.], [4., 16., 0.], [0., 0., 0.]]));
        }
        // same result from column storage
        let csc = features.to_csc();
        assert!(!csc.is_csr());
        assert_eq!(gram_matrix(&csc, false), gram_matrix(&features, false));
    }


    #[test]
    fn normalization() {
        log_init_test();
        let mut gram = ndarray::arr2(&[[4., 2., 0.], [2., 9., 0.], [0., 0., 0.]]);
        normalize_gram_matrix(&mut gram).unwrap();
        assert_eq!(gram[[0, 0]], 1.);
        assert_eq!(gram[[1, 1]], 1.);
        assert!((gram[[0, 1]] - 2. / 6.).abs() < 1.0e-12);
        assert_eq!(gram[[1, 0]], gram[[0, 1]]);
        assert_eq!(gram[[2, 2]], 0.);
        assert_eq!(gram[[2, 0]], 0.);
        let mut rectangle = Array2::<f64>::zeros((2, 3));
        assert!(matches!(normalize_gram_matrix(&mut rectangle), Err(KernelError::InvalidParameter(_))));
    }


    // the kernel of tuple graphs is symmetric and positive semi definite
    #[test]
    fn gram_is_symmetric_psd() {
        log_init_test();
        let mut graphs = RandomGraphGenerator::new(31).dataset(12, 1, 7, 0.4, 2);
        graphs.push(BaseGraph::unlabeled(0, &[]).unwrap());
        let builder = TupleGraphBuilder::new(TupleGraphParams::new(2, 1, true, Enumeration::Multiset), true).unwrap();
        let (derived, _) = builder.build_batch(&graphs).unwrap();
        let kernel = ColorRefiner::new(WlParams::new(3, false, true)).refine(&derived).unwrap();
        let gram = kernel.get_gram();
        let n = gram.nrows();
        for i in 0..n {
            for j in 0..n {
                assert_eq!(gram[[i, j]], gram[[j, i]]);
            }
        }
        let eigen = jacobi_eigenvalues(gram);
        let scale = gram.diag().iter().cloned().fold(1., f64::max);
        for lambda in eigen {
            log::debug!("eigenvalue : {:.3e}", lambda);
            assert!(lambda >= -1.0e-9 * scale);
        }
        let mut normalized = gram.clone();
        normalize_gram_matrix(&mut normalized).unwrap();
        let eigen = jacobi_eigenvalues(&normalized);
        assert!(eigen.iter().all(|l| *l >= -1.0e-9));
    } // end of gram_is_symmetric_psd

} // end of mod tests
