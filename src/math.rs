//! Math utility functions for the local polynomial fit.

use crate::{gamma::Linear, Component};

/// Number of points in one fit, and the degree of the fitted polynomial.
pub const DEGREE: usize = 4;

/// A square system matrix.
pub type Matrix = [[Component; DEGREE]; DEGREE];

/// The powers `x, x^2, x^3, x^4` of `x`, one row of the system matrix.
pub fn power_row(x: Component) -> [Component; DEGREE] {
    let mut row = [0.0; DEGREE];
    let mut power = 1.0;
    for cell in row.iter_mut() {
        power *= x;
        *cell = power;
    }
    row
}

/// Solve `matrix * coefficients = rhs` for all three channels at once using
/// Gaussian elimination.
///
/// There is no pivoting: the diagonal must stay non-zero during
/// elimination, which holds for [`power_row`] rows built from distinct
/// positive positions.
pub fn eliminate(matrix: Matrix, rhs: [Linear; DEGREE]) -> [Linear; DEGREE] {
    let mut b = matrix;
    let mut r = rhs;

    for k in 0..DEGREE - 1 {
        for i in k + 1..DEGREE {
            let mul = b[i][k] / b[k][k];
            for j in k + 1..DEGREE {
                b[i][j] -= b[k][j] * mul;
            }
            let reduced = r[k] * mul;
            r[i] -= reduced;
        }
    }

    for k in (1..DEGREE).rev() {
        for i in 0..k {
            let reduced = r[k] * b[i][k] / b[k][k];
            r[i] -= reduced;
        }
    }

    for k in 0..DEGREE {
        r[k] = r[k] / b[k][k];
    }

    r
}

/// Evaluate `c[0] x + c[1] x^2 + c[2] x^3 + c[3] x^4` for every channel.
pub fn evaluate(coefficients: &[Linear; DEGREE], x: Component) -> Linear {
    coefficients
        .iter()
        .zip(power_row(x))
        .fold(Linear::zero(), |acc, (c, power)| acc + *c * power)
}

#[cfg(test)]
mod tests {
    use euclid::vec3;

    use super::*;

    #[test]
    fn powers_start_at_one() {
        assert_eq!(power_row(2.0), [2.0, 4.0, 8.0, 16.0]);
        assert_eq!(power_row(0.0), [0.0; DEGREE]);
    }

    #[test]
    fn solves_diagonal_system() {
        let mut m = [[0.0; DEGREE]; DEGREE];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = (i + 1) as Component;
        }
        let rhs = [vec3(1.0, 2.0, 3.0); DEGREE];
        let x = eliminate(m, rhs);
        for (i, v) in x.iter().enumerate() {
            let d = (i + 1) as Component;
            approx::assert_relative_eq!(v.x, 1.0 / d);
            approx::assert_relative_eq!(v.y, 2.0 / d);
            approx::assert_relative_eq!(v.z, 3.0 / d);
        }
    }

    #[test]
    fn fitted_polynomial_passes_through_points() {
        let xs = [400.0, 450.0, 500.0, 550.0];
        let ys = [
            vec3(0.6, 0.1, 0.2),
            vec3(0.4, 0.2, 0.4),
            vec3(0.0, 0.3, 0.5),
            vec3(0.1, 0.4, 0.3),
        ];
        let coefficients = eliminate(xs.map(power_row), ys);
        for (x, y) in xs.iter().zip(ys) {
            let v = evaluate(&coefficients, *x);
            approx::assert_abs_diff_eq!(v.x, y.x, epsilon = 1e-6);
            approx::assert_abs_diff_eq!(v.y, y.y, epsilon = 1e-6);
            approx::assert_abs_diff_eq!(v.z, y.z, epsilon = 1e-6);
        }
    }

    #[test]
    fn recovers_known_coefficients() {
        // y = x + x^4
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = xs.map(|x: Component| {
            let y = x + x.powi(4);
            vec3(y, 2.0 * y, 0.0)
        });
        let c = eliminate(xs.map(power_row), ys);
        approx::assert_abs_diff_eq!(c[0].x, 1.0, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(c[1].x, 0.0, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(c[2].x, 0.0, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(c[3].x, 1.0, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(c[3].y, 2.0, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(c[0].z, 0.0, epsilon = 1e-9);
    }
}
