//! Two-dimensional Nelder-Mead downhill simplex minimization (spec §4.2).
//!
//! Standard coefficients: reflect α=1, expand γ=2, contract ρ=0.5,
//! shrink σ=0.5. Ties are broken by lexicographically-smaller `(x, y)`.

/// The outcome of a completed simplex search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexResult {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    /// True if the search terminated by the tolerance rule rather than
    /// hitting the iteration cap.
    pub converged: bool,
    pub iterations: u32,
}

const REFLECT: f64 = 1.0;
const EXPAND: f64 = 2.0;
const CONTRACT: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Minimizes `objective(x, y)` starting from an initial simplex of vertices
/// `(x0, y0)`, `(x0 + delta, y0)`, `(x0, y0 + delta)`.
///
/// Terminates when `2*|f_high - f_low| / (|f_high| + |f_low| + eps) < tol`
/// or after `max_iterations`, whichever comes first.
pub fn minimize(
    mut objective: impl FnMut(f64, f64) -> f64,
    x0: f64,
    y0: f64,
    delta: f64,
    tol: f64,
    max_iterations: u32,
) -> SimplexResult {
    const EPS: f64 = 1e-12;

    let mut vertices = [(x0, y0), (x0 + delta, y0), (x0, y0 + delta)];
    let mut values = [
        objective(vertices[0].0, vertices[0].1),
        objective(vertices[1].0, vertices[1].1),
        objective(vertices[2].0, vertices[2].1),
    ];

    let mut iterations = 0;
    let mut converged = false;

    loop {
        sort_by_value_with_tiebreak(&mut vertices, &mut values);

        let (low, mid, high) = (0, 1, 2);

        let spread = 2.0 * (values[high] - values[low]).abs()
            / (values[high].abs() + values[low].abs() + EPS);
        if spread < tol {
            converged = true;
            break;
        }
        if iterations >= max_iterations {
            break;
        }
        iterations += 1;

        let centroid = (
            (vertices[low].0 + vertices[mid].0) / 2.0,
            (vertices[low].1 + vertices[mid].1) / 2.0,
        );

        // Reflect
        let reflected = (
            centroid.0 + REFLECT * (centroid.0 - vertices[high].0),
            centroid.1 + REFLECT * (centroid.1 - vertices[high].1),
        );
        let f_reflected = objective(reflected.0, reflected.1);

        if f_reflected < values[low] {
            // Expand
            let expanded = (
                centroid.0 + EXPAND * (reflected.0 - centroid.0),
                centroid.1 + EXPAND * (reflected.1 - centroid.1),
            );
            let f_expanded = objective(expanded.0, expanded.1);
            if f_expanded < f_reflected {
                vertices[high] = expanded;
                values[high] = f_expanded;
            } else {
                vertices[high] = reflected;
                values[high] = f_reflected;
            }
        } else if f_reflected < values[mid] {
            vertices[high] = reflected;
            values[high] = f_reflected;
        } else {
            // Contract
            let contracted = (
                centroid.0 + CONTRACT * (vertices[high].0 - centroid.0),
                centroid.1 + CONTRACT * (vertices[high].1 - centroid.1),
            );
            let f_contracted = objective(contracted.0, contracted.1);
            if f_contracted < values[high] {
                vertices[high] = contracted;
                values[high] = f_contracted;
            } else {
                // Shrink toward the best vertex.
                for i in [mid, high] {
                    vertices[i] = (
                        vertices[low].0 + SHRINK * (vertices[i].0 - vertices[low].0),
                        vertices[low].1 + SHRINK * (vertices[i].1 - vertices[low].1),
                    );
                    values[i] = objective(vertices[i].0, vertices[i].1);
                }
            }
        }
    }

    sort_by_value_with_tiebreak(&mut vertices, &mut values);
    SimplexResult {
        x: vertices[0].0,
        y: vertices[0].1,
        value: values[0],
        converged,
        iterations,
    }
}

/// Sorts the three vertices ascending by value, breaking ties by the
/// lexicographically smaller `(x, y)` per spec §4.2.
fn sort_by_value_with_tiebreak(vertices: &mut [(f64, f64); 3], values: &mut [f64; 3]) {
    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap()
            .then_with(|| vertices[a].partial_cmp(&vertices[b]).unwrap())
    });

    let sorted_vertices = [vertices[order[0]], vertices[order[1]], vertices[order[2]]];
    let sorted_values = [values[order[0]], values[order[1]], values[order[2]]];
    *vertices = sorted_vertices;
    *values = sorted_values;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scenario S3: J(x,y) = (x-3)^2 + (y-2)^2 + 1.
    #[test]
    fn s3_simplex_convergence() {
        let result = minimize(|x, y| (x - 3.0).powi(2) + (y - 2.0).powi(2) + 1.0, 0.0, 0.0, 1.0, 1e-6, 125);

        assert!(result.converged);
        assert!((result.x - 3.0).abs() < 1e-3);
        assert!((result.y - 2.0).abs() < 1e-3);
        assert!((result.value - 1.0).abs() < 1e-3);
    }

    #[test]
    fn stops_at_iteration_cap_when_not_converging() {
        // A pathological objective that never satisfies the tolerance.
        let mut calls = 0;
        let result = minimize(
            |x, y| {
                calls += 1;
                (x.sin() + y.cos()).abs()
            },
            0.0,
            0.0,
            1.0,
            0.0,
            10,
        );
        assert!(!result.converged);
        assert_eq!(result.iterations, 10);
        let _ = calls;
    }
}
