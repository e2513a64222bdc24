//! Dense weighted least-squares solver shared by [`crate::gbvtd`] and
//! [`crate::hvvp`] (spec §4.7).
//!
//! Forms the normal equations `AᵀWA x = AᵀWb` and inverts `AᵀWA` by
//! Gauss-Jordan elimination with partial pivoting, returning the solution,
//! its sum of squared residuals, and per-coefficient standard errors
//! derived from the diagonal of the inverse.

use crate::result::{Error, Result};

/// The minimum pivot magnitude below which the normal-equations matrix is
/// considered singular (spec §4.7).
const ILL_CONDITIONED_THRESHOLD: f64 = 1e-12;

/// The result of a weighted linear least-squares fit.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquaresFit {
    /// The fitted coefficient vector, length N.
    pub coefficients: Vec<f64>,
    /// Sum of squared weighted residuals.
    pub sse: f64,
    /// Per-coefficient standard error, derived from `sqrt(diag((AᵀWA)⁻¹) * sse / (M - N))`.
    pub standard_errors: Vec<f64>,
}

/// Solves `min ‖W(Ax - b)‖₂` for `x`, where `rows` is the M×N design
/// matrix `A` given row-major, `b` is the M-vector of observations, and
/// `weights` is an optional M-vector (unit weights are used when `None`,
/// matching HVVP's usage per spec §4.5).
///
/// Returns [`Error::InsufficientData`] if `M < N`, or
/// [`Error::IllConditioned`] if any pivot during the Gauss-Jordan inversion
/// of `AᵀWA` falls below `1e-12` in magnitude.
pub fn lls(rows: &[Vec<f64>], b: &[f64], weights: Option<&[f64]>) -> Result<LeastSquaresFit> {
    let m = rows.len();
    let n = rows.first().map(Vec::len).unwrap_or(0);

    if m < n || n == 0 {
        return Err(Error::InsufficientData {
            required: n,
            available: m,
        });
    }

    let w = |i: usize| weights.map(|w| w[i]).unwrap_or(1.0);

    // ata = AᵀWA, atb = AᵀWb
    let mut ata = vec![vec![0.0f64; n]; n];
    let mut atb = vec![0.0f64; n];
    for i in 0..m {
        let wi = w(i);
        for j in 0..n {
            atb[j] += wi * rows[i][j] * b[i];
            for k in 0..n {
                ata[j][k] += wi * rows[i][j] * rows[i][k];
            }
        }
    }

    let inverse = gauss_jordan_invert(&ata)?;

    let mut coefficients = vec![0.0f64; n];
    for j in 0..n {
        for k in 0..n {
            coefficients[j] += inverse[j][k] * atb[k];
        }
    }

    let mut sse = 0.0f64;
    for i in 0..m {
        let predicted: f64 = (0..n).map(|j| rows[i][j] * coefficients[j]).sum();
        let residual = predicted - b[i];
        sse += w(i) * residual * residual;
    }

    let dof = (m.saturating_sub(n)).max(1) as f64;
    let variance = sse / dof;
    let standard_errors = (0..n)
        .map(|j| (inverse[j][j].max(0.0) * variance).sqrt())
        .collect();

    Ok(LeastSquaresFit {
        coefficients,
        sse,
        standard_errors,
    })
}

/// Inverts a square matrix via Gauss-Jordan elimination with partial
/// pivoting. Returns [`Error::IllConditioned`] if any pivot's magnitude
/// falls below [`ILL_CONDITIONED_THRESHOLD`].
fn gauss_jordan_invert(matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let n = matrix.len();
    let mut augmented: Vec<Vec<f64>> = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut full = row.clone();
            full.resize(2 * n, 0.0);
            full[n + i] = 1.0;
            full
        })
        .collect();

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| {
                augmented[a][col]
                    .abs()
                    .partial_cmp(&augmented[b][col].abs())
                    .unwrap()
            })
            .unwrap();
        augmented.swap(col, pivot_row);

        let pivot = augmented[col][col];
        if pivot.abs() < ILL_CONDITIONED_THRESHOLD {
            return Err(Error::IllConditioned);
        }

        for value in augmented[col].iter_mut() {
            *value /= pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = augmented[row][col];
            if factor == 0.0 {
                continue;
            }
            for c in 0..2 * n {
                augmented[row][c] -= factor * augmented[col][c];
            }
        }
    }

    Ok(augmented
        .into_iter()
        .map(|row| row[n..].to_vec())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_exact_linear_system() {
        // y = 2x + 3, perfectly fit by 4 points.
        let rows: Vec<Vec<f64>> = (0..4).map(|x| vec![1.0, x as f64]).collect();
        let b: Vec<f64> = (0..4).map(|x| 2.0 * x as f64 + 3.0).collect();

        let fit = lls(&rows, &b, None).unwrap();
        assert!((fit.coefficients[0] - 3.0).abs() < 1e-9);
        assert!((fit.coefficients[1] - 2.0).abs() < 1e-9);
        assert!(fit.sse.abs() < 1e-9);
    }

    #[test]
    fn reports_insufficient_data() {
        let rows = vec![vec![1.0, 2.0]];
        let b = vec![1.0];
        assert!(matches!(
            lls(&rows, &b, None),
            Err(Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn reports_ill_conditioned_for_singular_system() {
        // Both rows/columns identical -> singular normal-equations matrix.
        let rows = vec![vec![1.0, 1.0], vec![1.0, 1.0], vec![1.0, 1.0]];
        let b = vec![1.0, 1.0, 1.0];
        assert!(matches!(lls(&rows, &b, None), Err(Error::IllConditioned)));
    }

    #[test]
    fn weighted_fit_downweights_outlier() {
        let rows: Vec<Vec<f64>> = (0..5).map(|x| vec![1.0, x as f64]).collect();
        let mut b: Vec<f64> = (0..5).map(|x| 2.0 * x as f64 + 3.0).collect();
        b[4] += 100.0; // outlier
        let weights = vec![1.0, 1.0, 1.0, 1.0, 0.0001];

        let fit = lls(&rows, &b, Some(&weights)).unwrap();
        assert!((fit.coefficients[1] - 2.0).abs() < 0.1);
    }
}
