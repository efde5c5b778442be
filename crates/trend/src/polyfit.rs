//! Ordinary least-squares polynomial fitting over f64 series.
//!
//! Normal equations with a dense Gaussian-elimination solve are plenty for
//! the degree-3 / ≤50-observation systems the estimator produces. The
//! abscissae are rescaled to the unit interval before building the moment
//! matrix, otherwise the x^6 moments of a multi-week window overwhelm the
//! low-order ones.

use crate::error::{Error, Result};

/// Fits `degree`-order polynomial coefficients (constant term first) to the
/// given points by ordinary least squares.
///
/// Requires at least `degree + 1` observations. A rank-deficient system
/// (e.g. all observations at the same x) fails with `SingularFit`.
pub fn polyfit(xs: &[f64], ys: &[f64], degree: usize) -> Result<Vec<f64>> {
    debug_assert_eq!(xs.len(), ys.len());
    let n = degree + 1;
    if xs.len() < n {
        return Err(Error::InsufficientData {
            needed: n,
            got: xs.len(),
        });
    }

    // Rescale x to [-1, 1]-ish before forming moments.
    let scale = xs.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    let scale = if scale > 0.0 { scale } else { 1.0 };

    // Moment sums m[k] = Σ (x/scale)^k for k = 0..=2*degree.
    let mut moments = vec![0.0_f64; 2 * degree + 1];
    let mut rhs = vec![0.0_f64; n];
    for (&x, &y) in xs.iter().zip(ys) {
        let sx = x / scale;
        let mut p = 1.0;
        for (k, m) in moments.iter_mut().enumerate() {
            *m += p;
            if k < n {
                rhs[k] += y * p;
            }
            p *= sx;
        }
    }

    // Normal-equation matrix A[i][j] = m[i + j].
    let mut a: Vec<Vec<f64>> = (0..n).map(|i| moments[i..i + n].to_vec()).collect();
    let mut b = rhs;

    // Gaussian elimination with partial pivoting.
    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&r1, &r2| a[r1][col].abs().total_cmp(&a[r2][col].abs()))
            .unwrap_or(col);
        if a[pivot_row][col].abs() < 1e-12 {
            return Err(Error::SingularFit);
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution.
    let mut coeffs = vec![0.0_f64; n];
    for row in (0..n).rev() {
        let mut acc = b[row];
        for k in row + 1..n {
            acc -= a[row][k] * coeffs[k];
        }
        coeffs[row] = acc / a[row][row];
    }

    // Undo the x rescaling: c_k in original units is c'_k / scale^k.
    let mut divisor = 1.0;
    for c in coeffs.iter_mut() {
        *c /= divisor;
        divisor *= scale;
    }

    Ok(coeffs)
}

/// Evaluates a polynomial (constant term first) at `x` by Horner's rule.
pub fn eval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_cubic() {
        let coeffs = [2.0, 0.5, -0.01, 0.001];
        let xs: Vec<f64> = (0..30).map(|i| i as f64 * 7.0).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| eval(&coeffs, x)).collect();

        let fitted = polyfit(&xs, &ys, 3).unwrap();
        for (c, f) in coeffs.iter().zip(&fitted) {
            assert!((c - f).abs() < 1e-6, "expected {c}, fitted {f}");
        }
    }

    #[test]
    fn fits_linear_data_with_negligible_curvature() {
        let xs: Vec<f64> = (0..50).map(|i| i as f64 * 60.0).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| 1.10 + 2e-6 * x).collect();

        let fitted = polyfit(&xs, &ys, 3).unwrap();
        for (&x, &y) in xs.iter().zip(&ys) {
            assert!((eval(&fitted, x) - y).abs() < 1e-9);
        }
    }

    #[test]
    fn too_few_points_is_insufficient_data() {
        let xs = [0.0, 60.0, 120.0];
        let ys = [1.0, 2.0, 3.0];
        match polyfit(&xs, &ys, 3) {
            Err(Error::InsufficientData { needed: 4, got: 3 }) => {}
            other => panic!("expected InsufficientData, got {other:?}"),
        }
    }

    #[test]
    fn coincident_abscissae_are_singular() {
        let xs = [5.0; 6];
        let ys = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert!(matches!(polyfit(&xs, &ys, 3), Err(Error::SingularFit)));
    }
}
