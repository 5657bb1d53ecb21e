use nalgebra::Matrix3;

use crate::interfaces::ProjectionVector;

/// The six fixed matrices spanning the space of symmetric 3x3 matrices.
///
/// B1..B3 carry the off-diagonal entries (0,1), (0,2) and (1,2); B4..B6 carry
/// the diagonal as diag(1,-1,0), diag(1,1,-2) and the identity. The basis is
/// orthogonal under the Frobenius inner product.
pub fn basis_matrices() -> [Matrix3<f64>; 6] {
    [
        Matrix3::new(
            0.0, 1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 0.0,
        ),
        Matrix3::new(
            0.0, 0.0, 1.0,
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
        ),
        Matrix3::new(
            0.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
            0.0, 1.0, 0.0,
        ),
        Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, -1.0, 0.0,
            0.0, 0.0, 0.0,
        ),
        Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, -2.0,
        ),
        Matrix3::identity(),
    ]
}

/// S = sum_i k_i * B_i
pub fn symmetric_from_coefficients(coefficients: &ProjectionVector) -> Matrix3<f64> {
    basis_matrices()
        .iter()
        .zip(coefficients.iter())
        .fold(Matrix3::zeros(), |acc, (basis, k)| acc + basis * *k)
}

/// Inverse of [`symmetric_from_coefficients`] for a symmetric matrix.
///
/// Off-diagonal entries give k1..k3 directly. The diagonal is decomposed through
/// its trace: k6 = tr(S)/3, k5 = (S00 + S11)/2 - k6, k4 = S00 - k5 - k6.
pub fn coefficients_from_symmetric(s: &Matrix3<f64>) -> ProjectionVector {
    let k1 = s[(0, 1)];
    let k2 = s[(0, 2)];
    let k3 = s[(1, 2)];
    let k6 = s.trace() / 3.0;
    let k5 = (s[(0, 0)] + s[(1, 1)]) / 2.0 - k6;
    let k4 = s[(0, 0)] - (k5 + k6);
    [k1, k2, k3, k4, k5, k6]
}
